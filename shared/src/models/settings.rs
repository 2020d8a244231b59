//! Settings Model

use serde::{Deserialize, Serialize};

/// Site configuration (singleton row, last-writer-wins)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Settings {
    pub id: i64,
    /// Price applied to new orders, in integer cents
    pub base_price_cents: i64,
    pub city_name: String,
    /// PIX key used as the merchant account in generated charges
    pub pix_key: String,
    /// WhatsApp contact number, E.164
    pub whats_e164: String,
    /// Human-formatted phone shown on the storefront
    pub phone_display: String,
    pub updated_at: i64,
}

impl Settings {
    pub fn seed_defaults() -> SettingsUpdate {
        SettingsUpdate {
            base_price_cents: 7000,
            city_name: "Sua Cidade".to_string(),
            pix_key: "+5518997053664".to_string(),
            whats_e164: "+5518997053664".to_string(),
            phone_display: "(18) 99705-3664".to_string(),
        }
    }
}

/// Wholesale settings replacement — no partial-patch semantics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub base_price_cents: i64,
    pub city_name: String,
    pub pix_key: String,
    pub whats_e164: String,
    pub phone_display: String,
}
