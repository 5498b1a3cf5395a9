//! Legacy token — the full-JSON form used before compact tokens.
//!
//! `base64({"type": "<widget name>", "settings": {<field name>: <value>}})`,
//! standard alphabet, padded. Only read by current links; written for
//! migration tooling and tests.

use crate::compact::Decoded;
use crate::{b64, defaults};
use serde::Deserialize;
use wg_core::{Result, SettingsMap, WidgetType};

#[derive(Debug, Deserialize)]
struct LegacyPayload {
    #[serde(rename = "type")]
    widget_type: WidgetType,
    #[serde(default)]
    settings: serde_json::Map<String, serde_json::Value>,
}

pub fn encode_legacy(widget: &WidgetType, settings: &SettingsMap) -> Result<String> {
    let payload = serde_json::json!({
        "type": widget,
        "settings": settings,
    });
    Ok(b64::encode_standard(serde_json::to_string(&payload)?.as_bytes()))
}

pub fn decode_legacy(token: &str) -> Option<Decoded> {
    match try_decode_legacy(token) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            tracing::debug!(error = %err, "rejecting legacy token");
            None
        }
    }
}

pub fn try_decode_legacy(token: &str) -> Result<Decoded> {
    let bytes = b64::decode_lenient(token.trim())?;
    let payload: LegacyPayload = serde_json::from_slice(&bytes)?;

    let mut known = SettingsMap::new();
    for (key, value) in payload.settings {
        // Values of a shape no field can hold (null, arrays, objects) are skipped like unknown fields.
        match serde_json::from_value(value) {
            Ok(v) => {
                known.insert(key, v);
            }
            Err(_) => tracing::debug!(field = %key, "skipping non-scalar legacy value"),
        }
    }

    let settings = defaults::apply_defaults(&payload.widget_type, &known);
    Ok(Decoded { widget_type: payload.widget_type, settings })
}
