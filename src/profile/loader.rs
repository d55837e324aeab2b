//! Loading a profile record from a JSON file.

use std::fs;
use std::path::Path;

use super::record::ProfileRecord;
use crate::error::{FolioError, FolioResult};

/// Read, parse and validate a profile file.
pub fn load_profile(path: &Path) -> FolioResult<ProfileRecord> {
    let raw = fs::read_to_string(path).map_err(|source| FolioError::ProfileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = parse_profile(&raw).map_err(|err| err.at_path(path))?;
    tracing::info!(
        path = %path.display(),
        skills = profile.skills.len(),
        projects = profile.projects.len(),
        "Loaded profile"
    );
    Ok(profile)
}

/// The configured profile file, or the built-in sample when none is set.
pub fn resolve_profile(path: Option<&Path>) -> FolioResult<ProfileRecord> {
    match path {
        Some(path) => load_profile(path),
        None => Ok(ProfileRecord::sample()),
    }
}

/// Parse and validate profile JSON held in memory.
pub fn parse_profile(raw: &str) -> FolioResult<ProfileRecord> {
    let profile: ProfileRecord = serde_json::from_str(raw)?;
    profile.validate()?;
    Ok(profile)
}
