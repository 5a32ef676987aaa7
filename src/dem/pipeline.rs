//! DEM extraction pipeline
//!
//! Validate → allocate → fill → write. The output image is flipped
//! vertically so that its top row is the northern edge of the tile, and
//! may drop the last source row and column when tiles overlap by one post.

use log::{debug, error, info};

use crate::dem::decoder::DemGrid;
use crate::dem::quantizer::{quantize_gray16, quantize_gray8, BitDepth};
use crate::dem::raster::{RasterBuffer, Samples};
use crate::dem::writer::RasterWriterFactory;
use crate::dsf::errors::{DsfError, DsfResult};
use crate::dsf::reader::DsfReader;
use crate::dsf::validation;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// How a DEM is turned into a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractOptions {
    /// Sample depth of the output
    pub bit_depth: BitDepth,
    /// Drop the last source row and column
    pub trim_overlap: bool,
    /// Draw a progress bar while quantizing
    pub show_progress: bool,
}

impl ExtractOptions {
    /// Output dimensions for a source grid of `width` x `height`
    pub fn output_size(&self, width: u32, height: u32) -> (u32, u32) {
        let trim = u32::from(self.trim_overlap);
        (width.saturating_sub(trim), height.saturating_sub(trim))
    }
}

/// Quantizes a validated grid into a raster buffer
///
/// Output row `y` reads source row `out_height - 1 - y`; columns keep their
/// order. Pure: no I/O besides the optional progress bar.
pub fn render(grid: &DemGrid<'_>, options: &ExtractOptions) -> DsfResult<RasterBuffer> {
    let (out_width, out_height) = options.output_size(grid.width(), grid.height());
    debug!(
        "Rendering {}x{} grid to {}x{} gray{}",
        grid.width(),
        grid.height(),
        out_width,
        out_height,
        options.bit_depth.bits()
    );

    let progress = if options.show_progress {
        ProgressTracker::new(u64::from(out_height), "Quantizing elevation rows")
    } else {
        ProgressTracker::hidden()
    };

    let samples = match options.bit_depth {
        BitDepth::Eight => Samples::Gray8(fill(grid, out_width, out_height, &progress, quantize_gray8)?),
        BitDepth::Sixteen => Samples::Gray16(fill(grid, out_width, out_height, &progress, quantize_gray16)?),
    };
    progress.finish();

    RasterBuffer::new(out_width, out_height, samples)
}

fn fill<T>(
    grid: &DemGrid<'_>,
    out_width: u32,
    out_height: u32,
    progress: &ProgressTracker,
    quantize: fn(f64) -> T,
) -> DsfResult<Vec<T>> {
    let count = out_width as usize * out_height as usize;
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(count)
        .map_err(|_| DsfError::AllocationFailure(count))?;

    for y in 0..out_height {
        let source_row = out_height - 1 - y;
        for x in 0..out_width {
            samples.push(quantize(grid.read_cell(source_row, x)));
        }
        progress.increment(1);
    }

    Ok(samples)
}

/// Loads DSF files and extracts their DEM as grayscale rasters
pub struct DemExtractor<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DemExtractor<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        DemExtractor { logger }
    }

    /// Loads `input_path`, validates its DEM and renders it to memory
    pub fn extract(&self, input_path: &str, options: &ExtractOptions) -> DsfResult<RasterBuffer> {
        let mut reader = DsfReader::new(self.logger);
        let dsf = reader.load(input_path)?;

        let grid = validation::validate(&dsf).map_err(|e| {
            if e.is_not_found() {
                error!("{}: invalid or missing DEM data", input_path);
            }
            e
        })?;

        render(&grid, options)
    }

    /// Extracts the DEM of `input_path` and writes it to `output_path`
    ///
    /// The writer is chosen before any decoding so an unsupported output
    /// extension fails early. Nothing is written unless the whole raster
    /// was produced.
    pub fn extract_to_file(&self, input_path: &str, output_path: &str, options: &ExtractOptions) -> DsfResult<()> {
        info!("Extracting DEM from {} to {}", input_path, output_path);

        let writer = RasterWriterFactory::create_writer(output_path)?;
        let raster = self.extract(input_path, options)?;

        writer.write(output_path, &raster)?;
        info!("Wrote {} raster to {}", raster, output_path);
        self.logger.log(&format!("Extracted {} from {} to {}", raster, input_path, output_path))?;

        Ok(())
    }
}
