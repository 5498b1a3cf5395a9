pub mod config;
pub mod error;
pub mod settings;
pub mod value;
pub mod widget;

pub use config::EmbedConfig;
pub use error::{Result, WgError};
pub use settings::{CalendarSettings, ClockSettings, WeatherSettings, WidgetSettings};
pub use value::{SettingValue, SettingsMap};
pub use widget::{FieldFamily, WidgetType};

#[cfg(test)]
mod tests;
