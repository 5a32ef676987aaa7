//! DEM extraction command
//!
//! Renders the DEM of a DSF file to a grayscale raster.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::dem::{BitDepth, DemExtractor, ExtractOptions};
use crate::dsf::errors::{DsfError, DsfResult};
use crate::utils::logger::Logger;

/// Command for extracting a DEM to an image file
pub struct ExtractCommand<'a> {
    /// Path to the input DSF file
    input_file: String,
    /// Path to the output raster
    output_file: String,
    /// Depth, trimming and progress settings
    options: ExtractOptions,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> DsfResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| DsfError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| DsfError::GenericError("Missing output file path for extraction".to_string()))?
            .clone();
        info!("Output file: {}", output_file);

        let options = parse_options(args)?;
        info!("Bit depth: {}, trim overlap: {}", options.bit_depth.bits(), options.trim_overlap);

        Ok(ExtractCommand {
            input_file,
            output_file,
            options,
            logger,
        })
    }
}

/// Builds extraction options from the `bits` and `trim` arguments
pub fn parse_options(args: &ArgMatches) -> DsfResult<ExtractOptions> {
    let bits_str = args.get_one::<String>("bits").map(String::as_str).unwrap_or("8");
    let bit_depth = bits_str
        .parse::<u32>()
        .ok()
        .and_then(BitDepth::from_bits)
        .ok_or_else(|| DsfError::GenericError(format!("Invalid bit depth: {} (expected 8 or 16)", bits_str)))?;

    Ok(ExtractOptions {
        bit_depth,
        trim_overlap: args.get_flag("trim"),
        show_progress: !args.get_flag("quiet"),
    })
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> DsfResult<()> {
        let extractor = DemExtractor::new(self.logger);
        extractor.extract_to_file(&self.input_file, &self.output_file, &self.options)?;
        info!("DEM extraction successful");
        Ok(())
    }
}
