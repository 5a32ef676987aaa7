//! Elevation decoder
//!
//! Reinterprets the DEMD payload according to the DEMI descriptor and
//! applies the per-tile scale/offset to recover elevations in meters.

use byteorder::{ByteOrder, LittleEndian};
use log::debug;
use std::fmt;

use crate::dsf::demi::{ElevationEncoding, ElevationInfo};
use crate::dsf::errors::{DsfError, DsfResult};

/// Concrete storage type of one DEM cell
///
/// Resolved once from the (encoding, bytes per sample) pair so the decode
/// loop never looks at the raw descriptor again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    Float32,
    Int8,
    Int16,
    Int32,
    UInt8,
    UInt16,
    UInt32,
}

impl SampleType {
    /// Maps an encoding and sample width onto a storage type
    ///
    /// Returns `None` for any pair outside the supported table.
    pub fn resolve(encoding: Option<ElevationEncoding>, bytes_per_sample: u8) -> Option<Self> {
        match (encoding?, bytes_per_sample) {
            (ElevationEncoding::Float32, 4) => Some(SampleType::Float32),
            (ElevationEncoding::SignedInt, 1) => Some(SampleType::Int8),
            (ElevationEncoding::SignedInt, 2) => Some(SampleType::Int16),
            (ElevationEncoding::SignedInt, 4) => Some(SampleType::Int32),
            (ElevationEncoding::UnsignedInt, 1) => Some(SampleType::UInt8),
            (ElevationEncoding::UnsignedInt, 2) => Some(SampleType::UInt16),
            (ElevationEncoding::UnsignedInt, 4) => Some(SampleType::UInt32),
            _ => None,
        }
    }

    /// Width of one cell in bytes
    pub fn size(&self) -> usize {
        match self {
            SampleType::Int8 | SampleType::UInt8 => 1,
            SampleType::Int16 | SampleType::UInt16 => 2,
            SampleType::Float32 | SampleType::Int32 | SampleType::UInt32 => 4,
        }
    }

    /// Reads cell `index` from a little-endian payload, widened to f64
    #[inline]
    fn read_raw(&self, data: &[u8], index: usize) -> f64 {
        let at = index * self.size();
        match self {
            SampleType::Float32 => f64::from(LittleEndian::read_f32(&data[at..])),
            SampleType::Int8 => f64::from(data[at] as i8),
            SampleType::Int16 => f64::from(LittleEndian::read_i16(&data[at..])),
            SampleType::Int32 => f64::from(LittleEndian::read_i32(&data[at..])),
            SampleType::UInt8 => f64::from(data[at]),
            SampleType::UInt16 => f64::from(LittleEndian::read_u16(&data[at..])),
            SampleType::UInt32 => f64::from(LittleEndian::read_u32(&data[at..])),
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleType::Float32 => "f32",
            SampleType::Int8 => "i8",
            SampleType::Int16 => "i16",
            SampleType::Int32 => "i32",
            SampleType::UInt8 => "u8",
            SampleType::UInt16 => "u16",
            SampleType::UInt32 => "u32",
        };
        f.write_str(name)
    }
}

/// A DEM grid ready for decoding
///
/// Borrows the DEMD payload. Construction checks the encoding and that the
/// payload covers every cell, so `read_cell` has no failure path.
#[derive(Debug, Clone)]
pub struct DemGrid<'a> {
    info: ElevationInfo,
    sample_type: SampleType,
    data: &'a [u8],
}

impl<'a> DemGrid<'a> {
    /// Binds a DEMI record to its DEMD payload
    pub fn new(info: ElevationInfo, data: &'a [u8]) -> DsfResult<Self> {
        let sample_type = SampleType::resolve(info.encoding, info.bytes_per_sample).ok_or(
            DsfError::UnsupportedEncoding {
                flags: info.flags,
                bytes_per_sample: info.bytes_per_sample,
            },
        )?;

        let expected = info.expected_payload_len().ok_or(DsfError::GridTooLarge {
            width: info.width,
            height: info.height,
            bytes_per_sample: info.bytes_per_sample,
        })?;
        if data.len() < expected {
            return Err(DsfError::TruncatedPayload {
                expected,
                actual: data.len(),
            });
        }

        debug!("DEM grid {}x{} of {} cells", info.width, info.height, sample_type);

        Ok(DemGrid {
            info,
            sample_type,
            data,
        })
    }

    pub fn info(&self) -> &ElevationInfo {
        &self.info
    }

    pub fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Elevation in meters at (`row`, `col`)
    ///
    /// `row` 0 is the southern edge of the tile.
    #[inline]
    pub fn read_cell(&self, row: u32, col: u32) -> f64 {
        debug_assert!(row < self.info.height && col < self.info.width);
        let index = row as usize * self.info.width as usize + col as usize;
        self.sample_type.read_raw(self.data, index) * self.info.scale + self.info.offset
    }

    /// Lowest and highest elevation in the grid
    pub fn elevation_range(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in 0..self.info.height {
            for col in 0..self.info.width {
                let v = self.read_cell(row, col);
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min, max)
    }
}
