use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("invalid profile: {field} {reason}")]
    InvalidProfile { field: &'static str, reason: String },

    #[error("profile file not found: {0}")]
    ProfileNotFound(String),

    #[error("unsupported profile format (expected .toml or .json): {0}")]
    UnsupportedFormat(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlacementError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlacementError>;
