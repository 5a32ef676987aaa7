//! Grayscale raster buffer produced by the extraction pipeline

use std::fmt;

use crate::dem::quantizer::BitDepth;
use crate::dsf::errors::{DsfError, DsfResult};
use crate::io::byte_order::ByteOrder;

/// Row-major sample storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Samples {
    Gray8(Vec<u8>),
    Gray16(Vec<u16>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Gray8(s) => s.len(),
            Samples::Gray16(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A finished grayscale raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    samples: Samples,
}

impl RasterBuffer {
    /// Wraps samples, which must number exactly `width * height`
    pub fn new(width: u32, height: u32, samples: Samples) -> DsfResult<Self> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(DsfError::GenericError(format!(
                "Raster {}x{} needs {} samples, got {}",
                width,
                height,
                expected,
                samples.len()
            )));
        }
        Ok(RasterBuffer { width, height, samples })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub fn bit_depth(&self) -> BitDepth {
        match self.samples {
            Samples::Gray8(_) => BitDepth::Eight,
            Samples::Gray16(_) => BitDepth::Sixteen,
        }
    }

    /// Sample at (`row`, `col`), widened to u16
    pub fn get(&self, row: u32, col: u32) -> Option<u16> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let index = row as usize * self.width as usize + col as usize;
        match &self.samples {
            Samples::Gray8(s) => Some(u16::from(s[index])),
            Samples::Gray16(s) => Some(s[index]),
        }
    }

    /// Storage form of the samples: bytes as-is, 16-bit samples big-endian
    pub fn to_be_bytes(&self) -> Vec<u8> {
        match &self.samples {
            Samples::Gray8(s) => s.clone(),
            Samples::Gray16(s) => ByteOrder::BigEndian.encode_u16_samples(s),
        }
    }
}

impl fmt::Display for RasterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} gray{}", self.width, self.height, self.bit_depth().bits())
    }
}
