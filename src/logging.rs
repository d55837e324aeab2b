//! File-based tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file only. The filter comes
//! from `FOLIO_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const ENV_LOG_FILTER: &str = "FOLIO_LOG";

/// Install a global subscriber writing to `log_file`.
///
/// Best effort: returns false (and installs nothing) if the file can't be
/// opened or a subscriber is already set.
pub fn init_logging(log_file: Option<&Path>) -> bool {
    let Some(path) = log_file else {
        return false;
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok()
}
