use log::info;

use crate::dem::{DemExtractor, ExtractOptions, RasterBuffer};
use crate::dsf::errors::DsfResult;
use crate::dsf::DsfReader;
use crate::utils::logger::Logger;

/// Main interface to the dsfdem library
pub struct DemKit {
    logger: Logger,
}

impl DemKit {
    /// Create a new DemKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "dsfdem.log"
    pub fn new(log_file: Option<&str>) -> DsfResult<Self> {
        let log_path = log_file.unwrap_or("dsfdem.log");
        let logger = Logger::new(log_path)?;
        Ok(DemKit { logger })
    }

    /// Summarize the atoms and DEM of a DSF file
    pub fn describe(&self, input_path: &str) -> DsfResult<String> {
        let mut reader = DsfReader::new(&self.logger);
        let dsf = reader.load(input_path)?;
        Ok(crate::commands::info_command::describe(&dsf))
    }

    /// Render the DEM of a DSF file into memory
    pub fn render(&self, input_path: &str, options: &ExtractOptions) -> DsfResult<RasterBuffer> {
        DemExtractor::new(&self.logger).extract(input_path, options)
    }

    /// Extract the DEM of a DSF file to a PNG, TIFF or raw raster
    ///
    /// # Arguments
    /// * `input_path` - Path to the DSF file
    /// * `output_path` - Output raster, format chosen by extension
    /// * `options` - Bit depth and overlap trimming
    pub fn extract(&self, input_path: &str, output_path: &str, options: &ExtractOptions) -> DsfResult<()> {
        info!("Extracting {} with {:?}", input_path, options);
        DemExtractor::new(&self.logger).extract_to_file(input_path, output_path, options)
    }
}
