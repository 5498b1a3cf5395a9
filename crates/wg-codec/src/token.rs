//! The two token formats a link can carry.

use crate::compact::{self, Decoded};
use crate::legacy;
use wg_core::EmbedConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedToken {
    Compact(String),
    Legacy(String),
}

impl EmbedToken {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Compact(t) | Self::Legacy(t) => t,
        }
    }

    pub fn decode(&self) -> Option<Decoded> {
        match self {
            Self::Compact(t) => compact::decode(t),
            Self::Legacy(t) => legacy::decode_legacy(t),
        }
    }

    /// Tokens present in a query, compact parameter first.
    pub fn from_query(pairs: &[(String, String)], config: &EmbedConfig) -> Vec<EmbedToken> {
        let find = |name: &str| {
            pairs
                .iter()
                .find(|(k, v)| k == name && !v.is_empty())
                .map(|(_, v)| v.clone())
        };
        let mut tokens = Vec::new();
        if let Some(t) = find(&config.token_param) {
            tokens.push(Self::Compact(t));
        }
        if let Some(t) = find(&config.legacy_param) {
            tokens.push(Self::Legacy(t));
        }
        tokens
    }

    /// First token in the query that decodes.
    pub fn resolve(pairs: &[(String, String)], config: &EmbedConfig) -> Option<Decoded> {
        Self::from_query(pairs, config).iter().find_map(|token| {
            let decoded = token.decode();
            if decoded.is_none() {
                tracing::debug!(token = ?token, "token in query did not decode");
            }
            decoded
        })
    }
}
