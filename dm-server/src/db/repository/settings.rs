//! Settings Repository (Singleton)

use super::{RepoError, RepoResult};
use shared::models::{Settings, SettingsUpdate};
use sqlx::SqlitePool;

const SINGLETON_ID: i64 = 1;

const SETTINGS_SELECT: &str = "SELECT id, base_price_cents, city_name, pix_key, whats_e164, phone_display, updated_at FROM app_settings";

/// Get the singleton settings row
pub async fn get(pool: &SqlitePool) -> RepoResult<Option<Settings>> {
    let sql = format!("{SETTINGS_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Settings>(&sql)
        .bind(SINGLETON_ID)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Get or create the singleton settings row with seeded defaults
pub async fn get_or_create(pool: &SqlitePool) -> RepoResult<Settings> {
    if let Some(cfg) = get(pool).await? {
        return Ok(cfg);
    }

    let defaults = Settings::seed_defaults();
    let now = shared::util::now_millis();
    // INSERT OR IGNORE keeps concurrent first-reads from racing each other
    sqlx::query(
        "INSERT OR IGNORE INTO app_settings (id, base_price_cents, city_name, pix_key, whats_e164, phone_display, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(SINGLETON_ID)
    .bind(defaults.base_price_cents)
    .bind(&defaults.city_name)
    .bind(&defaults.pix_key)
    .bind(&defaults.whats_e164)
    .bind(&defaults.phone_display)
    .bind(now)
    .execute(pool)
    .await?;

    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create settings".into()))
}

/// Replace the settings wholesale — last writer wins, no merge.
pub async fn update(pool: &SqlitePool, data: SettingsUpdate) -> RepoResult<Settings> {
    get_or_create(pool).await?;

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE app_settings SET base_price_cents = ?1, city_name = ?2, pix_key = ?3, whats_e164 = ?4, phone_display = ?5, updated_at = ?6 WHERE id = ?7",
    )
    .bind(data.base_price_cents)
    .bind(&data.city_name)
    .bind(&data.pix_key)
    .bind(&data.whats_e164)
    .bind(&data.phone_display)
    .bind(now)
    .bind(SINGLETON_ID)
    .execute(pool)
    .await?;

    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update settings".into()))
}
