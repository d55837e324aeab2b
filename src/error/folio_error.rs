//! Unified error type for the Folio application.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Every failure Folio can report.
#[derive(Debug, Error)]
pub enum FolioError {
    /// The profile file could not be read.
    #[error("failed to read profile {}: {source}", path.display())]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The profile file is not valid profile JSON.
    #[error("failed to parse profile {}: {source}", path.display())]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory profile JSON did not parse.
    #[error("failed to parse profile: {0}")]
    ProfileJson(#[from] serde_json::Error),

    /// The profile parsed but violates a content rule.
    #[error("invalid profile: {reason}")]
    InvalidProfile { reason: String },

    /// Terminal setup, teardown or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The OS opener refused an outbound link.
    #[error("failed to open {url}: {message}")]
    LinkOpen { url: String, message: String },
}

impl FolioError {
    /// Create an `InvalidProfile` error.
    pub fn invalid_profile(reason: impl Into<String>) -> Self {
        FolioError::InvalidProfile {
            reason: reason.into(),
        }
    }

    /// Attach the file a parse error came from.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            FolioError::ProfileJson(source) => FolioError::ProfileParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }

    /// Short, user-facing message for stderr or the footer status line.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::ProfileRead { path, .. } => {
                format!("Could not read profile file {}", path.display())
            }
            FolioError::ProfileParse { path, source } => format!(
                "Profile file {} is not valid JSON (line {}, column {})",
                path.display(),
                source.line(),
                source.column()
            ),
            FolioError::ProfileJson(source) => format!(
                "Profile is not valid JSON (line {}, column {})",
                source.line(),
                source.column()
            ),
            FolioError::InvalidProfile { reason } => format!("Profile rejected: {}", reason),
            FolioError::Terminal(_) => {
                "Terminal error. You may need to reset your terminal.".to_string()
            }
            FolioError::LinkOpen { url, .. } => format!("Couldn't open {}", url),
        }
    }
}
