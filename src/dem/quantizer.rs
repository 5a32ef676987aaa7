//! Elevation to grayscale sample quantization
//!
//! 8-bit output maps a fixed Earth-wide elevation range onto 0..=255.
//! 16-bit output biases signed meters into the unsigned range.

/// Low end of the normalization range (Dead Sea shore), meters
pub const MIN_ELEVATION_METERS: f64 = -418.0;

/// Highest peak on Earth (Everest), meters
pub const MAX_ELEVATION_METERS: f64 = 8848.0;

/// Added to meters to produce a 16-bit sample; sea level lands mid-range
pub const GRAY16_BIAS: f64 = 32767.0;

/// Output sample depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    #[default]
    Eight,
    Sixteen,
}

impl BitDepth {
    /// Parses `8` or `16`
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(BitDepth::Eight),
            16 => Some(BitDepth::Sixteen),
            _ => None,
        }
    }

    pub fn bits(&self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }
}

/// Linear position of `value` between `lo` and `hi`, clamped to [0, 1]
#[inline]
pub fn clamped_fraction(value: f64, lo: f64, hi: f64) -> f64 {
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Quantizes meters to an 8-bit sample over the fixed global range
#[inline]
pub fn quantize_gray8(meters: f64) -> u8 {
    (255.0 * clamped_fraction(meters, MIN_ELEVATION_METERS, MAX_ELEVATION_METERS)).round() as u8
}

/// Quantizes meters to a 16-bit sample
///
/// No clamping: the biased value is truncated toward zero and wraps
/// modulo 2^16 if the elevation falls outside the signed 16-bit range.
#[inline]
pub fn quantize_gray16(meters: f64) -> u16 {
    (meters + GRAY16_BIAS) as i64 as u16
}
