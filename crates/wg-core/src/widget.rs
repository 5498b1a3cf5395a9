use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Widget kinds that can be embedded.
///
/// Unknown names survive in `Other` so that tokens from newer builders still
/// round-trip through older ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WidgetType {
    Calendar,
    Clock,
    Weather,
    Other(String),
}

/// Group a settings field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFamily {
    Shared,
    Calendar,
    Clock,
    Weather,
}

impl WidgetType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "calendar" => Self::Calendar,
            "clock" => Self::Clock,
            "weather" => Self::Weather,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "c" => Self::Calendar,
            "k" => Self::Clock,
            "w" => Self::Weather,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Calendar => "calendar",
            Self::Clock => "clock",
            Self::Weather => "weather",
            Self::Other(name) => name,
        }
    }

    /// Short tag written into tokens; unknown widgets pass their name through.
    pub fn tag(&self) -> &str {
        match self {
            Self::Calendar => "c",
            Self::Clock => "k",
            Self::Weather => "w",
            Self::Other(name) => name,
        }
    }

    pub fn family(&self) -> Option<FieldFamily> {
        match self {
            Self::Calendar => Some(FieldFamily::Calendar),
            Self::Clock => Some(FieldFamily::Clock),
            Self::Weather => Some(FieldFamily::Weather),
            Self::Other(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for WidgetType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl Serialize for WidgetType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for WidgetType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
