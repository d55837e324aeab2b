//! Runtime configuration.
//!
//! Settings are resolved in three layers: defaults, then environment
//! variables ([`FolioConfig::from_env`]), then command-line overrides
//! applied with the builder methods.
//!
//! # Example
//!
//! ```ignore
//! use folio::config::FolioConfig;
//!
//! let config = FolioConfig::from_env()
//!     .with_animations(false)
//!     .with_profile_path("me.json");
//! ```

use std::path::PathBuf;

/// Environment variable naming a profile JSON file.
pub const ENV_PROFILE: &str = "FOLIO_PROFILE";
/// Environment variable that disables animations when set to `1`/`true`.
pub const ENV_REDUCED_MOTION: &str = "FOLIO_REDUCED_MOTION";
/// Environment variable overriding the frame tick in milliseconds.
pub const ENV_TICK_MS: &str = "FOLIO_TICK_MS";
/// Environment variable overriding the log file location.
pub const ENV_LOG_FILE: &str = "FOLIO_LOG_FILE";

pub const DEFAULT_TICK_MS: u64 = 16;
pub const MIN_TICK_MS: u64 = 4;
pub const MAX_TICK_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq)]
pub struct FolioConfig {
    /// Profile file to load; `None` uses the built-in sample.
    pub profile_path: Option<PathBuf>,
    /// Play enter/exit and hover animations.
    pub animations: bool,
    /// Event-loop tick (animation clock step) in milliseconds.
    pub tick_ms: u64,
    /// Where logs go; `None` disables file logging.
    pub log_file: Option<PathBuf>,
    /// Environment variables that were set but could not be used, with
    /// their values. Read before logging exists, so reported later by
    /// [`FolioConfig::log_rejected_env`].
    pub rejected_env: Vec<(&'static str, String)>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            profile_path: None,
            animations: true,
            tick_ms: DEFAULT_TICK_MS,
            log_file: default_log_file(),
            rejected_env: Vec::new(),
        }
    }
}

impl FolioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.profile_path = Some(path.into());
        self
    }

    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    /// Set the tick, clamped to a usable range.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Defaults overlaid with `FOLIO_*` environment variables.
    ///
    /// Unparseable values are ignored and kept in `rejected_env`.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = non_empty_var(ENV_PROFILE) {
            config = config.with_profile_path(path);
        }

        if let Some(value) = non_empty_var(ENV_REDUCED_MOTION) {
            if is_truthy(&value) {
                config = config.with_animations(false);
            }
        }

        if let Some(value) = non_empty_var(ENV_TICK_MS) {
            match value.parse::<u64>() {
                Ok(ms) => config = config.with_tick_ms(ms),
                Err(_) => config.rejected_env.push((ENV_TICK_MS, value)),
            }
        }

        if let Some(path) = non_empty_var(ENV_LOG_FILE) {
            config = config.with_log_file(Some(PathBuf::from(path)));
        }

        config
    }

    /// Warn about every rejected environment variable. Call once the
    /// subscriber is installed.
    pub fn log_rejected_env(&self) {
        for (name, value) in &self.rejected_env {
            tracing::warn!(value = %value, "Ignoring invalid {}", name);
        }
    }
}

/// `<data_local_dir>/folio/folio.log`, if the platform has such a directory.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("folio").join("folio.log"))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
