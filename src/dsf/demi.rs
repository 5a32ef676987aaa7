//! DEM info (DEMI) record
//!
//! Geometry and encoding descriptor of the elevation grid stored in the
//! sibling DEMD atom.

use byteorder::{LittleEndian, ReadBytesExt};
use log::warn;
use std::fmt;
use std::io::Cursor;

use crate::dsf::constants::{atoms, dem};
use crate::dsf::errors::{DsfError, DsfResult};

/// Numeric family of the raw DEM cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElevationEncoding {
    Float32,
    SignedInt,
    UnsignedInt,
}

impl ElevationEncoding {
    /// Decodes the encoding bits of a DEMI flags word
    ///
    /// Returns `None` for the reserved value 3.
    pub fn from_flags(flags: u16) -> Option<Self> {
        match flags & dem::DATA_MASK {
            dem::DATA_FP32 => Some(ElevationEncoding::Float32),
            dem::DATA_SINT => Some(ElevationEncoding::SignedInt),
            dem::DATA_UINT => Some(ElevationEncoding::UnsignedInt),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ElevationEncoding::Float32 => "float",
            ElevationEncoding::SignedInt => "signed integer",
            ElevationEncoding::UnsignedInt => "unsigned integer",
        }
    }
}

/// Parsed DEMI record
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationInfo {
    pub version: u8,
    pub width: u32,
    pub height: u32,
    /// `None` when the flags carry the reserved encoding value
    pub encoding: Option<ElevationEncoding>,
    pub bytes_per_sample: u8,
    /// Raw flags word as stored
    pub flags: u16,
    pub scale: f64,
    pub offset: f64,
}

impl ElevationInfo {
    /// Parses a DEMI atom payload
    pub fn parse(payload: &[u8]) -> DsfResult<Self> {
        if payload.len() < dem::DEMI_SIZE {
            return Err(DsfError::TruncatedAtom { id: atoms::DEMI, offset: 0 });
        }

        let mut cursor = Cursor::new(payload);
        let version = cursor.read_u8()?;
        let bytes_per_sample = cursor.read_u8()?;
        let flags = cursor.read_u16::<LittleEndian>()?;
        let width = cursor.read_u32::<LittleEndian>()?;
        let height = cursor.read_u32::<LittleEndian>()?;
        let scale = cursor.read_f32::<LittleEndian>()?;
        let offset = cursor.read_f32::<LittleEndian>()?;

        if version != dem::DEMI_VERSION {
            warn!("Unexpected DEMI version {}, decoding anyway", version);
        }

        Ok(ElevationInfo {
            version,
            width,
            height,
            encoding: ElevationEncoding::from_flags(flags),
            bytes_per_sample,
            flags,
            scale: f64::from(scale),
            offset: f64::from(offset),
        })
    }

    /// Whether samples sit on the grid posts, sharing edges with neighbours
    pub fn is_post_centric(&self) -> bool {
        self.flags & dem::POST_CENTRIC != 0
    }

    /// Number of cells in the grid, `None` if it does not fit in `usize`
    pub fn cell_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Payload size the grid requires, `None` on overflow
    pub fn expected_payload_len(&self) -> Option<usize> {
        self.cell_count()?.checked_mul(usize::from(self.bytes_per_sample))
    }
}

impl fmt::Display for ElevationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DEM Info:")?;
        writeln!(f, "  Version: {}", self.version)?;
        writeln!(f, "  Dimensions: {}x{}", self.width, self.height)?;
        match self.encoding {
            Some(enc) => writeln!(f, "  Encoding: {} ({} bytes/sample)", enc.name(), self.bytes_per_sample)?,
            None => writeln!(f, "  Encoding: invalid (flags {:#06x})", self.flags)?,
        }
        writeln!(f, "  Post-centric: {}", self.is_post_centric())?;
        write!(f, "  Scale/offset: {} / {}", self.scale, self.offset)
    }
}
