//! Command-line argument parsing for Folio CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::FolioConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the active profile as JSON
    PrintProfile,
    /// Run the TUI application (default)
    #[default]
    RunTui,
}

/// Command plus the options that feed into [`FolioConfig`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub command: CliCommand,
    pub profile_path: Option<PathBuf>,
    pub no_animation: bool,
}

impl CliArgs {
    /// Layer the command-line options over `config`.
    pub fn apply_to(&self, mut config: FolioConfig) -> FolioConfig {
        if let Some(path) = &self.profile_path {
            config = config.with_profile_path(path.clone());
        }
        if self.no_animation {
            config = config.with_animations(false);
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' requires a value")]
    MissingValue(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parse command-line arguments.
///
/// `--version` and `--help` win over everything else, like the usual
/// convention; the remaining flags accumulate.
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                parsed.command = CliCommand::Version;
                return Ok(parsed);
            }
            "--help" | "-h" => {
                parsed.command = CliCommand::Help;
                return Ok(parsed);
            }
            "--print-profile" => parsed.command = CliCommand::PrintProfile,
            "--no-animation" => parsed.no_animation = true,
            "--profile" | "-p" => match args.next() {
                Some(value) if !value.starts_with('-') => {
                    parsed.profile_path = Some(PathBuf::from(value))
                }
                _ => return Err(CliError::MissingValue(arg)),
            },
            other => {
                if let Some(value) = other.strip_prefix("--profile=") {
                    if value.is_empty() {
                        return Err(CliError::MissingValue("--profile".to_string()));
                    }
                    parsed.profile_path = Some(PathBuf::from(value));
                } else if other.starts_with('-') {
                    return Err(CliError::UnknownOption(other.to_string()));
                } else {
                    return Err(CliError::UnexpectedArgument(other.to_string()));
                }
            }
        }
    }

    Ok(parsed)
}
