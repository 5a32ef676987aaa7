//! Seekable reader trait and implementations
//!
//! This module provides a unified trait for readers that support both
//! reading and seeking operations.

use std::io::{Read, Result, Seek, SeekFrom};

/// Trait for readers that can both read and seek
///
/// Lets the DSF reader accept files and in-memory cursors alike.
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}

/// Returns the total length of the stream, restoring the current position
pub fn stream_len(reader: &mut dyn SeekableReader) -> Result<u64> {
    let current_position = reader.stream_position()?;
    let len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(current_position))?;
    Ok(len)
}
