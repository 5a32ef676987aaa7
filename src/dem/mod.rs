//! DEM decoding and rasterization
//!
//! Turns a validated elevation grid into an 8-bit or 16-bit grayscale
//! raster and writes it out.

pub mod decoder;
pub mod quantizer;
pub mod raster;
pub mod writer;
pub mod pipeline;

pub use decoder::{DemGrid, SampleType};
pub use quantizer::{BitDepth, GRAY16_BIAS, MAX_ELEVATION_METERS, MIN_ELEVATION_METERS};
pub use raster::{RasterBuffer, Samples};
pub use writer::{RasterWriter, RasterWriterFactory};
pub use pipeline::{render, DemExtractor, ExtractOptions};

#[cfg(test)]
mod tests;
