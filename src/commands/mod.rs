//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod list_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use list_command::ListCommand;

use clap::ArgMatches;

use crate::carve::errors::CarveResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CarvekitCommandFactory;

impl CarvekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CarvekitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for CarvekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> CarveResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("list") {
            Ok(Box::new(ListCommand::new(args, logger)?))
        } else {
            // Default to extraction
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        }
    }
}
