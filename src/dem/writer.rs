//! Raster writer strategies
//!
//! The output file extension picks how a finished raster is serialized:
//! an image container through the `image` crate, or a headerless sample
//! dump for heightmap tools.

use image::{ImageBuffer, ImageFormat, Luma};
use log::{debug, error, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::dem::raster::{RasterBuffer, Samples};
use crate::dsf::errors::{DsfError, DsfResult};
use crate::io::byte_order::ByteOrder;

/// Strategy for writing a raster to disk
pub trait RasterWriter {
    /// Write the whole raster to `path`
    fn write(&self, path: &str, raster: &RasterBuffer) -> DsfResult<()>;

    /// Human readable name of the output format
    fn name(&self) -> &'static str;
}

/// PNG/TIFF output through the `image` crate
pub struct ImageRasterWriter {
    format: ImageFormat,
}

impl ImageRasterWriter {
    pub fn new(format: ImageFormat) -> Self {
        ImageRasterWriter { format }
    }
}

impl RasterWriter for ImageRasterWriter {
    fn write(&self, path: &str, raster: &RasterBuffer) -> DsfResult<()> {
        let size_error = || DsfError::GenericError(format!("Raster {} does not fit its buffer", raster));

        let result = match raster.samples() {
            Samples::Gray8(s) => {
                ImageBuffer::<Luma<u8>, &[u8]>::from_raw(raster.width(), raster.height(), s.as_slice())
                    .ok_or_else(size_error)?
                    .save_with_format(path, self.format)
            }
            Samples::Gray16(s) => {
                ImageBuffer::<Luma<u16>, &[u16]>::from_raw(raster.width(), raster.height(), s.as_slice())
                    .ok_or_else(size_error)?
                    .save_with_format(path, self.format)
            }
        };

        result.map_err(|e| {
            error!("Failed to save {}: {}", path, e);
            DsfError::from(e)
        })
    }

    fn name(&self) -> &'static str {
        match self.format {
            ImageFormat::Png => "PNG",
            ImageFormat::Tiff => "TIFF",
            _ => "image",
        }
    }
}

/// Headerless samples, 16-bit values big-endian
pub struct RawRasterWriter;

impl RasterWriter for RawRasterWriter {
    fn write(&self, path: &str, raster: &RasterBuffer) -> DsfResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        match raster.samples() {
            Samples::Gray8(s) => writer.write_all(s)?,
            Samples::Gray16(s) => ByteOrder::BigEndian.write_u16_samples(&mut writer, s)?,
        }
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "raw"
    }
}

/// Picks a writer from the output file extension
pub struct RasterWriterFactory;

impl RasterWriterFactory {
    /// Create a writer for `output_path`
    ///
    /// # Returns
    /// A writer for `png`, `tif`/`tiff` or `raw`/`r16`/`bin`, or
    /// `UnsupportedOutputFormat` for anything else
    pub fn create_writer(output_path: &str) -> DsfResult<Box<dyn RasterWriter>> {
        let extension = Path::new(output_path)
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or("")
            .to_lowercase();

        debug!("Determining writer for file extension: {}", extension);

        let writer: Box<dyn RasterWriter> = match extension.as_str() {
            "png" => Box::new(ImageRasterWriter::new(ImageFormat::Png)),
            "tif" | "tiff" => Box::new(ImageRasterWriter::new(ImageFormat::Tiff)),
            "raw" | "r16" | "bin" => Box::new(RawRasterWriter),
            _ => {
                error!("Unsupported output format: {}", extension);
                return Err(DsfError::UnsupportedOutputFormat(extension));
            }
        };

        info!("Using {} writer for {}", writer.name(), output_path);
        Ok(writer)
    }
}
