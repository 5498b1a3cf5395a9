use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, RawQuery, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use wg_codec::url::parse_query;
use wg_codec::{apply_defaults, create_embed_url_with, defaults_for, encode, try_decode, Decoded, EmbedToken};
use wg_core::{SettingsMap, WidgetSettings, WidgetType};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/embed", post(create_embed))
        .route("/api/v1/decode", post(decode_token))
}

/// Embed page route, mounted under the configured prefix.
pub fn embed_routes(route_prefix: &str) -> Router<AppState> {
    let path = format!("{}/{{widget}}", route_prefix.trim_end_matches('/'));
    Router::new().route(&path, get(resolve_embed))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedRequest {
    pub widget_type: WidgetType,
    #[serde(default)]
    pub settings: SettingsMap,
    pub base_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmbedResponse {
    pub token: String,
    pub url: String,
}

async fn create_embed(
    State(state): State<AppState>,
    Json(req): Json<EmbedRequest>,
) -> Result<Json<EmbedResponse>, ApiError> {
    if req.widget_type.is_known() {
        WidgetSettings::from_decoded(&req.widget_type, &apply_defaults(&req.widget_type, &req.settings))?;
    }

    let mut config = (*state.config).clone();
    if let Some(base_url) = req.base_url {
        config.base_url = base_url;
    }
    let token = encode(&req.widget_type, &req.settings);
    let url = create_embed_url_with(&config, &req.widget_type, &req.settings);
    tracing::debug!(widget = %req.widget_type, token_len = token.len(), "created embed link");
    Ok(Json(EmbedResponse { token, url }))
}

#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    pub token: String,
}

async fn decode_token(Json(req): Json<DecodeRequest>) -> Result<Json<Decoded>, ApiError> {
    try_decode(&req.token)
        .map(Json)
        .map_err(|err| ApiError::invalid_token(err.to_string()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEmbed {
    pub widget_type: WidgetType,
    pub settings: SettingsMap,
    /// `token` when the link carried a readable configuration, `defaults` otherwise.
    pub source: &'static str,
}

async fn resolve_embed(
    State(state): State<AppState>,
    Path(widget): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<ResolvedEmbed>, ApiError> {
    let widget = WidgetType::from_name(&widget);
    let pairs = query.as_deref().map(parse_query).unwrap_or_default();

    match EmbedToken::resolve(&pairs, &state.config) {
        Some(decoded) if decoded.widget_type != widget => Err(ApiError::bad_request(format!(
            "token is for a {} widget, not {}",
            decoded.widget_type, widget
        ))),
        Some(decoded) => Ok(Json(ResolvedEmbed {
            widget_type: decoded.widget_type,
            settings: decoded.settings,
            source: "token",
        })),
        None => Ok(Json(ResolvedEmbed {
            settings: defaults_for(&widget),
            widget_type: widget,
            source: "defaults",
        })),
    }
}
