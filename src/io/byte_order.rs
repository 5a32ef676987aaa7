//! Byte order handling for raster sample output
//!
//! DSF payloads are always little-endian and are read in place by the
//! decoder. Output samples wider than a byte need an explicit order; raw
//! heightmaps and PNG both store them big-endian.

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::{Result, Write};

/// Byte order for multi-byte output samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian",
            ByteOrder::BigEndian => "Big Endian",
        }
    }

    /// Writes 16-bit samples in this byte order
    pub fn write_u16_samples(&self, writer: &mut dyn Write, samples: &[u16]) -> Result<()> {
        for &sample in samples {
            match self {
                ByteOrder::LittleEndian => writer.write_u16::<LittleEndian>(sample)?,
                ByteOrder::BigEndian => writer.write_u16::<BigEndian>(sample)?,
            }
        }
        Ok(())
    }

    /// Encodes 16-bit samples into a new byte vector
    pub fn encode_u16_samples(&self, samples: &[u16]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(samples.len() * 2);
        for &sample in samples {
            let pair = match self {
                ByteOrder::LittleEndian => sample.to_le_bytes(),
                ByteOrder::BigEndian => sample.to_be_bytes(),
            };
            bytes.extend_from_slice(&pair);
        }
        bytes
    }
}
