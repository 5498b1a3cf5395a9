use crate::error::{Result, WgError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where embed links point and which query parameters carry the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    pub base_url: String,
    pub route_prefix: String,
    /// Compact token parameter. Kept short on purpose: it is pasted into iframe fields.
    pub token_param: String,
    /// Parameter used by links generated before the compact format.
    pub legacy_param: String,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            route_prefix: "/embed".into(),
            token_param: "s".into(),
            legacy_param: "config".into(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

impl EmbedConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading embed config");
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.token_param.is_empty() || self.legacy_param.is_empty() {
            return Err(WgError::InvalidConfig("query parameter names must not be empty".into()));
        }
        if self.token_param == self.legacy_param {
            return Err(WgError::InvalidConfig(format!(
                "token and legacy parameters must differ (both `{}`)",
                self.token_param
            )));
        }
        if !self.route_prefix.starts_with('/') {
            return Err(WgError::InvalidConfig(format!(
                "route prefix `{}` must start with '/'",
                self.route_prefix
            )));
        }
        Ok(())
    }

    /// Base URL without trailing slashes.
    pub fn trimmed_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
