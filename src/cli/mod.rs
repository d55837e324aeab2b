//! CLI module for Folio.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and usage display
//! - Dumping the active profile as JSON
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! let config = args.apply_to(folio::config::FolioConfig::from_env());
//! if let Some(result) = run_cli_command(&args, &config) {
//!     // CLI command was executed, exit with result
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, CliError};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::config::FolioConfig;
use crate::profile::resolve_profile;

/// Usage text printed by `--help` and after usage errors.
pub const USAGE: &str = "\
Usage: folio [OPTIONS]

Options:
  -p, --profile <PATH>  Load the portfolio from a JSON profile file
      --no-animation    Disable panel and hover animations
      --print-profile   Print the active profile as JSON and exit
  -h, --help            Print this help and exit
  -V, --version         Print version and exit

Environment:
  FOLIO_PROFILE, FOLIO_REDUCED_MOTION, FOLIO_TICK_MS, FOLIO_LOG, FOLIO_LOG_FILE";

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(args: &CliArgs, config: &FolioConfig) -> Option<Result<()>> {
    match args.command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::PrintProfile => Some(handle_print_profile(config)),
        CliCommand::RunTui => None,
    }
}

fn handle_print_profile(config: &FolioConfig) -> Result<()> {
    let profile = resolve_profile(config.profile_path.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
