use thiserror::Error;

#[derive(Error, Debug)]
pub enum WgError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(String),
    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting { field: String, reason: String },
    #[error("Unknown widget type: {0}")]
    UnknownWidget(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WgError {
    pub fn invalid_setting(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting { field: field.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, WgError>;
