//! Admin User Model

use serde::{Deserialize, Serialize};

/// Staff account for the admin console
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AdminUser {
    pub id: i64,
    pub email: String,
    /// Argon2 PHC string; never serialized into responses
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: i64,
}
