//! Default table — values omitted from tokens and re-inserted on decode.
//!
//! Keyed by field name; `style` is the one field whose default depends on the
//! widget.

use crate::dictionary::{self, FieldSpec};
use wg_core::{FieldFamily, SettingValue, SettingsMap, WidgetType};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DefaultValue {
    Bool(bool),
    Int(i64),
    Text(&'static str),
}

impl DefaultValue {
    fn to_value(self) -> SettingValue {
        match self {
            DefaultValue::Bool(b) => SettingValue::Bool(b),
            DefaultValue::Int(n) => SettingValue::from(n),
            DefaultValue::Text(s) => SettingValue::text(s),
        }
    }
}

const DEFAULTS: &[(&str, DefaultValue)] = &[
    ("primaryColor", DefaultValue::Text("#667EEA")),
    ("backgroundColor", DefaultValue::Text("#ffffff")),
    ("textColor", DefaultValue::Text("#1f2937")),
    ("accentColor", DefaultValue::Text("#764BA2")),
    ("borderColor", DefaultValue::Text("#e5e7eb")),
    ("borderRadius", DefaultValue::Int(12)),
    ("showBorder", DefaultValue::Bool(true)),
    ("padding", DefaultValue::Int(16)),
    ("fontSize", DefaultValue::Text("medium")),
    ("fontFamily", DefaultValue::Text("system")),
    ("transparent", DefaultValue::Bool(false)),
    ("defaultView", DefaultValue::Text("month")),
    ("showWeekends", DefaultValue::Bool(true)),
    ("startOfWeek", DefaultValue::Text("sunday")),
    ("showWeekNumbers", DefaultValue::Bool(false)),
    ("highlightToday", DefaultValue::Bool(true)),
    ("todayColor", DefaultValue::Text("#3b82f6")),
    ("showSeconds", DefaultValue::Bool(true)),
    ("format24h", DefaultValue::Bool(false)),
    ("showDate", DefaultValue::Bool(true)),
    ("displayMode", DefaultValue::Text("digital")),
    ("timezone", DefaultValue::Text("local")),
    ("handColor", DefaultValue::Text("#1f2937")),
    ("units", DefaultValue::Text("celsius")),
    ("location", DefaultValue::Text("auto")),
    ("showForecast", DefaultValue::Bool(true)),
    ("forecastDays", DefaultValue::Int(5)),
    ("showHumidity", DefaultValue::Bool(true)),
    ("showWind", DefaultValue::Bool(true)),
    ("iconColor", DefaultValue::Text("#f59e0b")),
];

fn style_default(widget: &WidgetType) -> &'static str {
    match widget {
        WidgetType::Clock => "minimal",
        WidgetType::Weather => "card",
        WidgetType::Calendar | WidgetType::Other(_) => "modern-grid",
    }
}

fn lookup(field: &FieldSpec, widget: &WidgetType) -> Option<SettingValue> {
    if field.name == "style" {
        return Some(SettingValue::text(style_default(widget)));
    }
    DEFAULTS
        .iter()
        .find(|(name, _)| *name == field.name)
        .map(|(_, d)| d.to_value())
}

/// Default for `name` when embedded as `widget`. `None` for fields the widget doesn't carry.
pub fn default_for(widget: &WidgetType, name: &str) -> Option<SettingValue> {
    let field = dictionary::by_name(name)?;
    if field.family != FieldFamily::Shared && Some(field.family) != widget.family() {
        return None;
    }
    lookup(field, widget)
}

/// Every field the widget carries, at its default.
pub fn defaults_for(widget: &WidgetType) -> SettingsMap {
    dictionary::fields_for(widget.family())
        .filter_map(|f| lookup(f, widget).map(|v| (f.name.to_string(), v)))
        .collect()
}

/// Defaults overlaid with the dictionary-known fields of `settings`.
///
/// This is exactly what `decode(encode(widget, settings))` yields.
pub fn apply_defaults(widget: &WidgetType, settings: &SettingsMap) -> SettingsMap {
    let mut out = defaults_for(widget);
    for (key, value) in settings {
        if dictionary::by_name(key).is_some() {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}
