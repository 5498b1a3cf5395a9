//! Embed links: `<base>/embed/<widget>?s=<token>`.

use crate::compact::{self, Decoded};
use crate::legacy;
use crate::token::EmbedToken;
use std::sync::LazyLock;
use wg_core::{EmbedConfig, Result, SettingsMap, WidgetType};

static DEFAULT_CONFIG: LazyLock<EmbedConfig> = LazyLock::new(EmbedConfig::default);

/// Build a share link under `base_url` with the default route and parameter.
pub fn create_embed_url(base_url: &str, widget: &WidgetType, settings: &SettingsMap) -> String {
    let config = EmbedConfig {
        base_url: base_url.to_string(),
        ..DEFAULT_CONFIG.clone()
    };
    create_embed_url_with(&config, widget, settings)
}

pub fn create_embed_url_with(config: &EmbedConfig, widget: &WidgetType, settings: &SettingsMap) -> String {
    let token = compact::encode(widget, settings);
    build_url(config, widget, &config.token_param, &token)
}

/// A link in the pre-compact format. Only needed to exercise old-link handling.
pub fn create_legacy_embed_url(
    config: &EmbedConfig,
    widget: &WidgetType,
    settings: &SettingsMap,
) -> Result<String> {
    let token = legacy::encode_legacy(widget, settings)?;
    Ok(build_url(config, widget, &config.legacy_param, &token))
}

fn build_url(config: &EmbedConfig, widget: &WidgetType, param: &str, token: &str) -> String {
    format!(
        "{}{}/{}?{}={}",
        config.trimmed_base(),
        config.route_prefix.trim_end_matches('/'),
        percent_encode_component(widget.name()),
        percent_encode_component(param),
        percent_encode_component(token),
    )
}

/// Settings carried by a link, or `None` when it has no readable token.
pub fn extract_from_url(url: &str) -> Option<Decoded> {
    extract_from_url_with(&DEFAULT_CONFIG, url)
}

pub fn extract_from_url_with(config: &EmbedConfig, url: &str) -> Option<Decoded> {
    let query = query_of(url)?;
    EmbedToken::resolve(&parse_query(query), config)
}

/// The part between `?` and `#`.
pub fn query_of(url: &str) -> Option<&str> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    without_fragment.split_once('?').map(|(_, q)| q)
}

/// Split an `application/x-www-form-urlencoded` query into decoded pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(k), percent_decode(v))
        })
        .collect()
}

/// Form decoding: `+` is a space, `%XX` is a byte. Malformed escapes are kept literally.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

/// Escape everything outside the unreserved set.
pub fn percent_encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}
