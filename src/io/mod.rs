//! I/O utilities for file handling
//!
//! Seekable input streams for the DSF reader and byte-order aware sample
//! output for the raster writers.

pub mod seekable;
pub mod byte_order;
