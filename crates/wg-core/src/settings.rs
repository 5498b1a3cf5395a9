//! Typed settings objects for each widget.
//!
//! The codec works on plain [`SettingsMap`]s; these are what embed pages build
//! from a decoded map once they need validated values.

use crate::error::{Result, WgError};
use crate::value::SettingsMap;
use crate::widget::WidgetType;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color pattern"));

/// Fields every widget carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonSettings {
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub border_color: String,
    pub border_radius: f64,
    pub show_border: bool,
    pub padding: f64,
    pub font_size: String,
    pub font_family: String,
    pub transparent: bool,
}

impl Default for CommonSettings {
    fn default() -> Self {
        Self {
            primary_color: "#667EEA".into(),
            background_color: "#ffffff".into(),
            text_color: "#1f2937".into(),
            accent_color: "#764BA2".into(),
            border_color: "#e5e7eb".into(),
            border_radius: 12.0,
            show_border: true,
            padding: 16.0,
            font_size: "medium".into(),
            font_family: "system".into(),
            transparent: false,
        }
    }
}

impl CommonSettings {
    fn validate(&self) -> Result<()> {
        check_color("primaryColor", &self.primary_color)?;
        check_color("backgroundColor", &self.background_color)?;
        check_color("textColor", &self.text_color)?;
        check_color("accentColor", &self.accent_color)?;
        check_color("borderColor", &self.border_color)?;
        check_non_negative("borderRadius", self.border_radius)?;
        check_non_negative("padding", self.padding)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub style: String,
    pub default_view: String,
    pub show_weekends: bool,
    pub start_of_week: String,
    pub show_week_numbers: bool,
    pub highlight_today: bool,
    pub today_color: String,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            style: "modern-grid".into(),
            default_view: "month".into(),
            show_weekends: true,
            start_of_week: "sunday".into(),
            show_week_numbers: false,
            highlight_today: true,
            today_color: "#3b82f6".into(),
        }
    }
}

impl CalendarSettings {
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        check_color("todayColor", &self.today_color)?;
        check_one_of("defaultView", &self.default_view, &["month", "week", "day", "agenda"])?;
        check_one_of("startOfWeek", &self.start_of_week, &["sunday", "monday"])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClockSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub style: String,
    pub show_seconds: bool,
    pub format24h: bool,
    pub show_date: bool,
    pub display_mode: String,
    pub timezone: String,
    pub hand_color: String,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            style: "minimal".into(),
            show_seconds: true,
            format24h: false,
            show_date: true,
            display_mode: "digital".into(),
            timezone: "local".into(),
            hand_color: "#1f2937".into(),
        }
    }
}

impl ClockSettings {
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        check_color("handColor", &self.hand_color)?;
        check_one_of("displayMode", &self.display_mode, &["digital", "analog", "both"])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeatherSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub style: String,
    pub units: String,
    pub location: String,
    pub show_forecast: bool,
    pub forecast_days: u32,
    pub show_humidity: bool,
    pub show_wind: bool,
    pub icon_color: String,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            common: CommonSettings::default(),
            style: "card".into(),
            units: "celsius".into(),
            location: "auto".into(),
            show_forecast: true,
            forecast_days: 5,
            show_humidity: true,
            show_wind: true,
            icon_color: "#f59e0b".into(),
        }
    }
}

impl WeatherSettings {
    pub fn validate(&self) -> Result<()> {
        self.common.validate()?;
        check_color("iconColor", &self.icon_color)?;
        check_one_of("units", &self.units, &["celsius", "fahrenheit", "kelvin"])?;
        if !(1..=7).contains(&self.forecast_days) {
            return Err(WgError::invalid_setting(
                "forecastDays",
                format!("{} is outside 1..=7", self.forecast_days),
            ));
        }
        Ok(())
    }
}

/// A validated settings object for one of the known widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetSettings {
    Calendar(CalendarSettings),
    Clock(ClockSettings),
    Weather(WeatherSettings),
}

impl WidgetSettings {
    pub fn defaults_for(widget: &WidgetType) -> Result<Self> {
        match widget {
            WidgetType::Calendar => Ok(Self::Calendar(CalendarSettings::default())),
            WidgetType::Clock => Ok(Self::Clock(ClockSettings::default())),
            WidgetType::Weather => Ok(Self::Weather(WeatherSettings::default())),
            WidgetType::Other(name) => Err(WgError::UnknownWidget(name.clone())),
        }
    }

    /// Build and validate from a decoded map. Missing fields take defaults.
    pub fn from_decoded(widget: &WidgetType, map: &SettingsMap) -> Result<Self> {
        let settings = match widget {
            WidgetType::Calendar => Self::Calendar(from_map(map)?),
            WidgetType::Clock => Self::Clock(from_map(map)?),
            WidgetType::Weather => Self::Weather(from_map(map)?),
            WidgetType::Other(name) => return Err(WgError::UnknownWidget(name.clone())),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Calendar(s) => s.validate(),
            Self::Clock(s) => s.validate(),
            Self::Weather(s) => s.validate(),
        }
    }

    /// Plain-data projection handed to the codec.
    pub fn to_map(&self) -> Result<SettingsMap> {
        match self {
            Self::Calendar(s) => to_map(s),
            Self::Clock(s) => to_map(s),
            Self::Weather(s) => to_map(s),
        }
    }
}

/// Project any settings struct onto a flat field map.
pub fn to_map<T: Serialize>(settings: &T) -> Result<SettingsMap> {
    Ok(serde_json::from_value(serde_json::to_value(settings)?)?)
}

/// Rebuild a settings struct from a flat field map; fields it doesn't know are ignored.
pub fn from_map<T: DeserializeOwned>(map: &SettingsMap) -> Result<T> {
    Ok(serde_json::from_value(serde_json::to_value(map)?)?)
}

pub fn is_hex_color(value: &str) -> bool {
    RE_HEX_COLOR.is_match(value)
}

fn check_color(field: &str, value: &str) -> Result<()> {
    if is_hex_color(value) {
        Ok(())
    } else {
        Err(WgError::invalid_setting(field, format!("`{value}` is not a #rrggbb color")))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WgError::invalid_setting(field, format!("{value} must be a non-negative number")))
    }
}

fn check_one_of(field: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(WgError::invalid_setting(
            field,
            format!("`{value}` is not one of {}", allowed.join(", ")),
        ))
    }
}
