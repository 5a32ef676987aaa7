//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod info_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use info_command::InfoCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::dsf::errors::DsfResult;

/// Factory for creating command instances based on CLI arguments
pub struct DsfDemCommandFactory;

impl DsfDemCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        DsfDemCommandFactory
    }
}

impl Default for DsfDemCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for DsfDemCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> DsfResult<Box<dyn Command + 'a>> {
        if args.get_flag("info") {
            Ok(Box::new(InfoCommand::new(args, logger)?))
        } else {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}
