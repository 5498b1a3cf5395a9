use crate::*;
use crate::settings::{from_map, is_hex_color, to_map};
use crate::value::parse_number;

// ========== Widget types ==========

#[test]
fn test_widget_tags_roundtrip() {
    for w in [WidgetType::Calendar, WidgetType::Clock, WidgetType::Weather] {
        assert_eq!(WidgetType::from_tag(w.tag()), w);
        assert_eq!(WidgetType::from_name(w.name()), w);
    }
}

#[test]
fn test_widget_unknown_passthrough() {
    let w = WidgetType::from_name("countdown");
    assert_eq!(w, WidgetType::Other("countdown".into()));
    assert_eq!(w.tag(), "countdown");
    assert_eq!(WidgetType::from_tag("countdown"), w);
    assert!(w.family().is_none());
    assert!(!w.is_known());
}

#[test]
fn test_widget_serde_as_name() {
    let json = serde_json::to_string(&WidgetType::Clock).unwrap();
    assert_eq!(json, "\"clock\"");
    let back: WidgetType = serde_json::from_str("\"weather\"").unwrap();
    assert_eq!(back, WidgetType::Weather);
}

// ========== Values ==========

#[test]
fn test_value_untagged_serde() {
    let map: SettingsMap = serde_json::from_str(r##"{"a":true,"b":12,"c":"#fff"}"##).unwrap();
    assert_eq!(map["a"], SettingValue::Bool(true));
    assert_eq!(map["b"], SettingValue::from(12i64));
    assert_eq!(map["c"], SettingValue::text("#fff"));
}

#[test]
fn test_value_number_equality_ignores_repr() {
    assert_eq!(SettingValue::from(12i64), SettingValue::from_f64(12.0).unwrap());
    assert_ne!(SettingValue::from(12i64), SettingValue::from_f64(12.5).unwrap());
    assert_ne!(SettingValue::from(1i64), SettingValue::Bool(true));
    assert_ne!(SettingValue::text("1"), SettingValue::from(1i64));
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_number("12").unwrap().as_i64(), Some(12));
    assert_eq!(parse_number("-3").unwrap().as_i64(), Some(-3));
    assert_eq!(parse_number("1.5").unwrap().as_f64(), Some(1.5));
    assert!(parse_number("").is_none());
    assert!(parse_number(" 1").is_none());
    assert!(parse_number("abc").is_none());
    assert!(parse_number("inf").is_none());
    assert!(parse_number("NaN").is_none());
    assert!(parse_number("3a").is_none());
}

// ========== Settings objects ==========

#[test]
fn test_calendar_defaults_project() {
    let map = to_map(&CalendarSettings::default()).unwrap();
    assert_eq!(map["primaryColor"], SettingValue::text("#667EEA"));
    assert_eq!(map["style"], SettingValue::text("modern-grid"));
    assert_eq!(map["showWeekends"], SettingValue::Bool(true));
    assert_eq!(map["borderRadius"], SettingValue::from(12i64));
    assert!(!map.contains_key("common"));
}

#[test]
fn test_clock_field_names() {
    let map = to_map(&ClockSettings::default()).unwrap();
    assert!(map.contains_key("format24h"));
    assert!(map.contains_key("showSeconds"));
    assert!(map.contains_key("handColor"));
}

#[test]
fn test_from_map_partial_fills_defaults() {
    let mut map = SettingsMap::new();
    map.insert("showSeconds".into(), false.into());
    let clock: ClockSettings = from_map(&map).unwrap();
    assert!(!clock.show_seconds);
    assert_eq!(clock.display_mode, "digital");
    assert_eq!(clock.common.border_radius, 12.0);
}

#[test]
fn test_from_map_wrong_type() {
    let mut map = SettingsMap::new();
    map.insert("showSeconds".into(), "maybe".into());
    assert!(from_map::<ClockSettings>(&map).is_err());
}

#[test]
fn test_widget_settings_from_decoded_validates() {
    let mut map = SettingsMap::new();
    map.insert("primaryColor".into(), "#12".into());
    let err = WidgetSettings::from_decoded(&WidgetType::Calendar, &map).unwrap_err();
    assert!(matches!(err, WgError::InvalidSetting { ref field, .. } if field == "primaryColor"));
}

#[test]
fn test_widget_settings_forecast_range() {
    let mut map = SettingsMap::new();
    map.insert("forecastDays".into(), 9u32.into());
    assert!(WidgetSettings::from_decoded(&WidgetType::Weather, &map).is_err());
    map.insert("forecastDays".into(), 3u32.into());
    let ws = WidgetSettings::from_decoded(&WidgetType::Weather, &map).unwrap();
    assert!(matches!(ws, WidgetSettings::Weather(ref w) if w.forecast_days == 3));
}

#[test]
fn test_widget_settings_fractional_spacing() {
    let mut map = SettingsMap::new();
    map.insert("padding".into(), SettingValue::from_f64(2.5).unwrap());
    map.insert("borderRadius".into(), SettingValue::from_f64(0.5).unwrap());
    match WidgetSettings::from_decoded(&WidgetType::Calendar, &map).unwrap() {
        WidgetSettings::Calendar(cal) => {
            assert_eq!(cal.common.padding, 2.5);
            assert_eq!(cal.common.border_radius, 0.5);
        }
        other => panic!("expected calendar settings, got {other:?}"),
    }
}

#[test]
fn test_widget_settings_negative_spacing() {
    let mut map = SettingsMap::new();
    map.insert("padding".into(), SettingValue::from(-4i64));
    let err = WidgetSettings::from_decoded(&WidgetType::Clock, &map).unwrap_err();
    assert!(matches!(err, WgError::InvalidSetting { ref field, .. } if field == "padding"));

    let mut map = SettingsMap::new();
    map.insert("borderRadius".into(), SettingValue::from_f64(-0.5).unwrap());
    let err = WidgetSettings::from_decoded(&WidgetType::Weather, &map).unwrap_err();
    assert!(matches!(err, WgError::InvalidSetting { ref field, .. } if field == "borderRadius"));
}

#[test]
fn test_widget_settings_unknown_widget() {
    let err = WidgetSettings::defaults_for(&WidgetType::Other("x".into())).unwrap_err();
    assert!(matches!(err, WgError::UnknownWidget(_)));
}

#[test]
fn test_defaults_validate() {
    for w in [WidgetType::Calendar, WidgetType::Clock, WidgetType::Weather] {
        WidgetSettings::defaults_for(&w).unwrap().validate().unwrap();
    }
}

#[test]
fn test_hex_color() {
    assert!(is_hex_color("#ABCDEF"));
    assert!(is_hex_color("#abcdef"));
    assert!(!is_hex_color("ABCDEF"));
    assert!(!is_hex_color("#ABCDE"));
    assert!(!is_hex_color("#GGGGGG"));
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let cfg = EmbedConfig::default();
    assert_eq!(cfg.token_param, "s");
    assert_eq!(cfg.legacy_param, "config");
    assert_eq!(cfg.route_prefix, "/embed");
    cfg.validate().unwrap();
}

#[test]
fn test_config_partial_json() {
    let cfg = EmbedConfig::from_json_str(r#"{"base_url":"https://widgets.example.com/"}"#).unwrap();
    assert_eq!(cfg.trimmed_base(), "https://widgets.example.com");
    assert_eq!(cfg.token_param, "s");
    assert_eq!(cfg.server.port, 8080);
}

#[test]
fn test_config_rejects_same_params() {
    let err = EmbedConfig::from_json_str(r#"{"token_param":"x","legacy_param":"x"}"#).unwrap_err();
    assert!(matches!(err, WgError::InvalidConfig(_)));
}

#[test]
fn test_config_rejects_bad_prefix() {
    assert!(EmbedConfig::from_json_str(r#"{"route_prefix":"embed"}"#).is_err());
}

#[test]
fn test_config_load_missing_file() {
    let err = EmbedConfig::load("/nonexistent/wg-config.json").unwrap_err();
    assert!(matches!(err, WgError::Io(_)));
}
