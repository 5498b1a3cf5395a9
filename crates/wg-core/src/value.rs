use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;

/// A single settings value.
///
/// Colors and enumerated names are both `Text`; whether a string is a color
/// is decided by the field it is stored under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(Number),
    Text(String),
}

/// Field name → value. Ordered so serialized maps are stable.
pub type SettingsMap = BTreeMap<String, SettingValue>;

impl SettingValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn from_f64(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self::Number)
    }
}

impl PartialEq for SettingValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            // 12 and 12.0 are the same setting
            (Self::Number(a), Self::Number(b)) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            },
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<u32> for SettingValue {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Parse a decimal string the way the wire format writes numbers.
///
/// Integers stay integers; anything else must be a finite float.
pub fn parse_number(raw: &str) -> Option<Number> {
    if raw.is_empty() || raw.trim() != raw {
        return None;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Some(i.into());
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Some(u.into());
    }
    let looks_numeric = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !looks_numeric {
        return None;
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}
