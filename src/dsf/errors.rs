//! Custom error types for DSF and DEM processing

use std::fmt;
use std::io;

/// DSF/DEM-specific error types
#[derive(Debug)]
pub enum DsfError {
    /// I/O error
    IoError(io::Error),
    /// File does not start with the `XPLNEDSF` cookie
    InvalidHeader,
    /// Unsupported DSF version
    UnsupportedVersion(i32),
    /// File is wrapped in a 7-Zip archive
    CompressedContainer,
    /// Atom header is malformed or runs past the end of its parent
    TruncatedAtom { id: u32, offset: u64 },
    /// Required atom is absent
    AtomNotFound(String),
    /// DEM grid is below the minimum usable resolution
    ResolutionTooLow { width: u32, height: u32 },
    /// (encoding, bytes per sample) pair outside the supported table
    UnsupportedEncoding { flags: u16, bytes_per_sample: u8 },
    /// DEMI geometry describes more bytes than can be addressed
    GridTooLarge { width: u32, height: u32, bytes_per_sample: u8 },
    /// DEMD payload is shorter than the grid described by DEMI
    TruncatedPayload { expected: usize, actual: usize },
    /// Output buffer could not be allocated
    AllocationFailure(usize),
    /// Output file extension has no raster writer
    UnsupportedOutputFormat(String),
    /// Image encoding error
    ImageError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for DsfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DsfError::IoError(e) => write!(f, "I/O error: {}", e),
            DsfError::InvalidHeader => write!(f, "Invalid DSF header"),
            DsfError::UnsupportedVersion(v) => write!(f, "Unsupported DSF version: {}", v),
            DsfError::CompressedContainer => {
                write!(f, "DSF file is 7-Zip compressed, extract it first")
            }
            DsfError::TruncatedAtom { id, offset } => write!(
                f,
                "Truncated atom {} at offset {}",
                crate::dsf::atom::atom_name(*id),
                offset
            ),
            DsfError::AtomNotFound(path) => write!(f, "Atom not found: {}", path),
            DsfError::ResolutionTooLow { width, height } => write!(
                f,
                "DEM resolution {}x{} is below the minimum of {}",
                width,
                height,
                crate::dsf::constants::dem::MIN_RESOLUTION
            ),
            DsfError::UnsupportedEncoding { flags, bytes_per_sample } => write!(
                f,
                "Unsupported DEM encoding: flags={:#06x}, bytes per sample={}",
                flags, bytes_per_sample
            ),
            DsfError::GridTooLarge { width, height, bytes_per_sample } => write!(
                f,
                "DEM grid {}x{} at {} bytes per sample is too large to address",
                width, height, bytes_per_sample
            ),
            DsfError::TruncatedPayload { expected, actual } => write!(
                f,
                "DEM payload too short: expected {} bytes, found {}",
                expected, actual
            ),
            DsfError::AllocationFailure(n) => {
                write!(f, "Failed to allocate raster buffer of {} samples", n)
            }
            DsfError::UnsupportedOutputFormat(ext) => {
                write!(f, "Unsupported output format: {}", ext)
            }
            DsfError::ImageError(msg) => write!(f, "Image error: {}", msg),
            DsfError::GenericError(msg) => write!(f, "DSF error: {}", msg),
        }
    }
}

impl std::error::Error for DsfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DsfError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DsfError {
    fn from(error: io::Error) -> Self {
        DsfError::IoError(error)
    }
}

impl From<image::ImageError> for DsfError {
    fn from(error: image::ImageError) -> Self {
        DsfError::ImageError(error.to_string())
    }
}

impl From<String> for DsfError {
    fn from(msg: String) -> Self {
        DsfError::GenericError(msg)
    }
}

impl DsfError {
    /// Whether this error means the file carries no usable DEM
    ///
    /// Missing atoms and undersized grids are both reported to users as
    /// "invalid or missing DEM data".
    pub fn is_not_found(&self) -> bool {
        matches!(self, DsfError::AtomNotFound(_) | DsfError::ResolutionTooLow { .. })
    }
}

/// Result type for DSF operations
pub type DsfResult<T> = Result<T, DsfError>;
