//! Settings API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::settings;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Settings, SettingsUpdate};

/// Site name shown on the storefront
const APP_NAME: &str = "Disk Mensagem";

/// Public configuration snapshot
#[derive(Debug, Serialize)]
pub struct PublicConfig {
    pub base_price_cents: i64,
    pub city_name: String,
    pub whats_e164: String,
    pub phone_display: String,
    pub app_name: &'static str,
}

/// GET /api/public/config — storefront pricing/contact snapshot
pub async fn public_config(State(state): State<ServerState>) -> AppResult<Json<PublicConfig>> {
    let cfg = settings::get_or_create(&state.pool).await?;
    Ok(Json(PublicConfig {
        base_price_cents: cfg.base_price_cents,
        city_name: cfg.city_name,
        whats_e164: cfg.whats_e164,
        phone_display: cfg.phone_display,
        app_name: APP_NAME,
    }))
}

/// GET /api/admin/settings
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Settings>> {
    let cfg = settings::get_or_create(&state.pool).await?;
    Ok(Json(cfg))
}

/// PUT /api/admin/settings — replace the configuration wholesale
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<SettingsUpdate>,
) -> AppResult<Json<Settings>> {
    if payload.base_price_cents < 0 {
        return Err(AppError::validation("base_price_cents must not be negative"));
    }
    validate_required_text(&payload.city_name, "city_name", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.pix_key, "pix_key", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.whats_e164, "whats_e164", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.phone_display, "phone_display", MAX_SHORT_TEXT_LEN)?;

    let updated = settings::update(&state.pool, payload).await?;
    tracing::info!(
        base_price_cents = updated.base_price_cents,
        "Settings updated"
    );
    Ok(Json(updated))
}
