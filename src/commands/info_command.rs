//! DSF/DEM structure summary command

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::dsf::errors::{DsfError, DsfResult};
use crate::dsf::validation;
use crate::dsf::{DsfReader, DSF};
use crate::utils::logger::Logger;

/// Command for describing the atoms and DEM of a DSF file
pub struct InfoCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to write the full atom tree to the log file
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InfoCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> DsfResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| DsfError::GenericError("Missing input file".to_string()))?
            .clone();

        Ok(InfoCommand {
            input_file,
            verbose: args.get_flag("verbose"),
            logger,
        })
    }
}

/// Human readable summary of a DSF and its DEM
///
/// A missing or unusable DEM is reported in the text rather than as an
/// error, so the atom listing is still shown.
pub fn describe(dsf: &DSF) -> String {
    let mut result = String::from("DSF Analysis Results:\n");
    result.push_str(&format!("  Version: {}\n", dsf.version));
    result.push_str(&format!("  Size: {} bytes\n", dsf.len()));
    let names: Vec<String> = dsf.atoms.iter().map(|a| a.name()).collect();
    result.push_str(&format!("  Top-level atoms: {}\n", names.join(", ")));

    match validation::validate(dsf) {
        Ok(grid) => {
            result.push_str(&format!("\n{}\n", grid.info()));
            result.push_str(&format!("  Sample type: {}\n", grid.sample_type()));
            let (min, max) = grid.elevation_range();
            result.push_str(&format!("  Elevation range: {:.1} m to {:.1} m\n", min, max));
            if grid.info().is_post_centric() {
                result.push_str("  Edges are shared with neighbouring tiles (trim when mosaicking)\n");
            }
        }
        Err(e) => result.push_str(&format!("\nDEM: not usable ({})\n", e)),
    }

    result
}

impl<'a> Command for InfoCommand<'a> {
    fn execute(&self) -> DsfResult<()> {
        let mut reader = DsfReader::new(self.logger);
        let dsf = reader.load(&self.input_file)?;

        for line in describe(&dsf).lines() {
            info!("{}", line);
        }

        if self.verbose {
            self.logger.print_atom_directory(&dsf.atoms)?;
        }

        debug!("Info completed successfully");
        self.logger.log("Info completed successfully")?;
        Ok(())
    }
}
