//! Payment Model

use serde::{Deserialize, Serialize};

/// Settlement status of a payment record.
///
/// Set externally (webhook or manual admin action) — the service never infers
/// confirmation on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Confirmed => "confirmed",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// Payment record — at most one per order (UNIQUE order_id).
///
/// Immutable once minted, except for the externally-set `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PaymentRecord {
    pub id: i64,
    pub order_id: i64,
    pub method: String,
    /// Opaque per-order transaction id (`DM` + order id)
    pub reference_code: String,
    /// Scannable/copyable PIX BR Code payload shown to the customer
    pub brcode: String,
    pub amount_cents: i64,
    pub status: PaymentStatus,
    pub created_at: i64,
}

impl PaymentRecord {
    pub fn is_confirmed(&self) -> bool {
        self.status == PaymentStatus::Confirmed
    }
}
