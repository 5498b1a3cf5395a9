//! Compact token — the short form written into share links.
//!
//! A token is base64 (URL-safe, unpadded) of a minified JSON object:
//! `_` holds the widget tag, every other key is a field code whose value is
//! the field encoded as a string. Fields at their default are left out.

use crate::dictionary::{self, FieldKind, FieldSpec, TYPE_KEY, VERSION_KEY};
use crate::{b64, defaults, palette, shortcuts};
use serde::Serialize;
use serde_json::{Map, Value};
use wg_core::value::parse_number;
use wg_core::{Result, SettingValue, SettingsMap, WgError, WidgetType};

/// Wire format version. Version 1 tokens carry no `v` key.
pub const FORMAT_VERSION: u64 = 1;

/// A decoded token: the widget and a complete settings map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoded {
    pub widget_type: WidgetType,
    pub settings: SettingsMap,
}

/// Encode a widget configuration into a compact token.
///
/// Fields missing from the dictionary are dropped; fields equal to the
/// widget's default are omitted.
pub fn encode(widget: &WidgetType, settings: &SettingsMap) -> String {
    let compact = compact_object(widget, settings);
    let json = Value::Object(compact).to_string();
    b64::encode_unpadded(json.as_bytes())
}

/// The JSON object a token carries, before base64.
pub fn compact_object(widget: &WidgetType, settings: &SettingsMap) -> Map<String, Value> {
    let mut compact = Map::new();
    compact.insert(TYPE_KEY.to_string(), Value::String(widget.tag().to_string()));
    if FORMAT_VERSION > 1 {
        compact.insert(VERSION_KEY.to_string(), Value::String(FORMAT_VERSION.to_string()));
    }

    for (key, value) in settings {
        let Some(field) = dictionary::by_name(key) else {
            tracing::trace!(field = %key, "dropping unknown field");
            continue;
        };
        if defaults::default_for(widget, key).as_ref() == Some(value) {
            continue;
        }
        compact.insert(field.code.to_string(), Value::String(encode_value(field, value)));
    }
    compact
}

fn encode_value(field: &FieldSpec, value: &SettingValue) -> String {
    match value {
        SettingValue::Text(s) if dictionary::is_color_field(field.name) => match palette::shorten(s) {
            Some(nibble) => nibble.to_string(),
            None => s.strip_prefix('#').unwrap_or(s).to_string(),
        },
        SettingValue::Bool(true) => "1".to_string(),
        SettingValue::Bool(false) => "0".to_string(),
        SettingValue::Number(n) => n.to_string(),
        SettingValue::Text(s) => match shortcuts::shorten(field.name, s) {
            Some(code) => code.to_string(),
            None => s.clone(),
        },
    }
}

/// Decode a compact token. `None` for anything that isn't a valid token.
pub fn decode(token: &str) -> Option<Decoded> {
    match try_decode(token) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            tracing::debug!(error = %err, "rejecting compact token");
            None
        }
    }
}

/// Like [`decode`], but says why a token was rejected.
pub fn try_decode(token: &str) -> Result<Decoded> {
    let token = token.trim();
    if token.is_empty() {
        return Err(WgError::InvalidToken("empty token".into()));
    }
    let bytes = b64::decode_lenient(token)?;
    let mut object = match serde_json::from_slice::<Value>(&bytes)? {
        Value::Object(map) => map,
        other => {
            return Err(WgError::InvalidToken(format!("expected a JSON object, got {other}")));
        }
    };

    check_version(object.remove(VERSION_KEY))?;

    let widget_type = match object.remove(TYPE_KEY) {
        Some(Value::String(tag)) => WidgetType::from_tag(&tag),
        _ => return Err(WgError::InvalidToken("missing widget tag".into())),
    };

    let mut settings = defaults::defaults_for(&widget_type);
    for (code, raw) in object {
        let Some(field) = dictionary::by_code(&code) else {
            tracing::trace!(code = %code, "skipping unknown field code");
            continue;
        };
        let raw = match raw {
            Value::String(s) => s,
            Value::Bool(b) => (if b { "1" } else { "0" }).to_string(),
            Value::Number(n) => n.to_string(),
            other => {
                tracing::debug!(field = field.name, value = %other, "skipping non-scalar value");
                continue;
            }
        };
        settings.insert(field.name.to_string(), decode_value(field, &raw));
    }

    Ok(Decoded { widget_type, settings })
}

fn check_version(version: Option<Value>) -> Result<()> {
    let version = match version {
        None => return Ok(()),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    };
    if version == FORMAT_VERSION.to_string() {
        Ok(())
    } else {
        tracing::warn!(version = %version, supported = FORMAT_VERSION, "token has unsupported format version");
        Err(WgError::UnsupportedVersion(version))
    }
}

fn decode_value(field: &FieldSpec, raw: &str) -> SettingValue {
    if dictionary::is_color_field(field.name) {
        return decode_color(raw);
    }
    match field.kind {
        FieldKind::Bool => match raw {
            "1" => SettingValue::Bool(true),
            "0" => SettingValue::Bool(false),
            _ => decode_untyped(raw),
        },
        FieldKind::Number => match parse_number(raw) {
            Some(n) => SettingValue::Number(n),
            None => decode_untyped(raw),
        },
        FieldKind::Text | FieldKind::Color => decode_text(field, raw),
    }
}

fn decode_color(raw: &str) -> SettingValue {
    if raw.chars().count() == 1 {
        if let Some(color) = palette::expand(raw) {
            return SettingValue::text(color);
        }
    }
    SettingValue::Text(format!("#{raw}"))
}

fn decode_text(field: &FieldSpec, raw: &str) -> SettingValue {
    if let Some(value) = shortcuts::expand(field.name, raw) {
        return SettingValue::text(value);
    }
    if raw.chars().count() == 1 && shortcuts::table_for(field.name).is_some() {
        // Kept as written so old links still open; usually an encoder bug.
        tracing::warn!(field = field.name, code = raw, "unknown shortcut, keeping literal value");
    }
    SettingValue::text(raw)
}

/// A value that doesn't fit its field's kind: `"1"`/`"0"` are booleans,
/// decimals are numbers, anything else is kept as text.
fn decode_untyped(raw: &str) -> SettingValue {
    match raw {
        "1" => SettingValue::Bool(true),
        "0" => SettingValue::Bool(false),
        _ => match parse_number(raw) {
            Some(n) => SettingValue::Number(n),
            None => SettingValue::text(raw),
        },
    }
}
