use crate::error::{PlacementError, Result};
use crate::types::profile::ProfileInput;
use std::path::Path;
use tracing::debug;

/// Reads a profile document, choosing the parser from the file extension.
pub fn load_profile(path: &Path) -> Result<ProfileInput> {
    if !path.exists() {
        return Err(PlacementError::ProfileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    debug!(path = %path.display(), "loading profile document");
    let input = match extension.as_deref() {
        Some("toml") => toml::from_str(&std::fs::read_to_string(path)?)?,
        Some("json") => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        _ => return Err(PlacementError::UnsupportedFormat(path.display().to_string())),
    };
    Ok(input)
}
