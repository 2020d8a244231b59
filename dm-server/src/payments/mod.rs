//! Payment coordination
//!
//! At most one payment record per order. Generation is idempotent: repeated
//! calls (including concurrent ones) observe a single record, so client
//! retries after a dropped response are safe. Settlement is only ever
//! observed externally — nothing here polls or infers confirmation.

pub mod brcode;
pub mod provider;

pub use provider::{PixCharge, PixError, PixProvider};

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::repository::{order, payment, settings};
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderStatus, PaymentRecord, PaymentStatus};

/// Settlement outcome reported by the webhook boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Confirmed,
    Failed,
}

/// Coordinates payment generation and settlement for the order ledger
#[derive(Clone)]
pub struct PaymentCoordinator {
    pool: SqlitePool,
    provider: PixProvider,
}

impl PaymentCoordinator {
    pub fn new(pool: SqlitePool, provider: PixProvider) -> Self {
        Self { pool, provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Generate (or return the existing) payment record for an order.
    ///
    /// Fails with `NotFound` for unknown orders and `InvalidState` for
    /// canceled ones. A record that already exists is returned as-is — the
    /// charge provider is not invoked again and nothing is re-persisted.
    pub async fn generate(&self, order_id: i64) -> AppResult<PaymentRecord> {
        let order = order::find_by_id(&self.pool, order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {order_id} not found")))?;

        if order.status == OrderStatus::Canceled {
            return Err(AppError::invalid_state(
                "Cannot generate a payment for a canceled order",
            ));
        }

        // Idempotent fast path
        if let Some(existing) = payment::find_by_order_id(&self.pool, order_id).await? {
            return Ok(existing);
        }

        let cfg = settings::get_or_create(&self.pool).await?;
        let charge = self
            .provider
            .create_charge(&order, &cfg)
            .await
            .map_err(|e| AppError::internal(e.to_string()))?;

        // A concurrent generator may have won in the meantime; the UNIQUE
        // constraint makes this insert a no-op then, and we return the
        // winner's record.
        let record = payment::insert_if_absent(
            &self.pool,
            order_id,
            "pix",
            &charge.reference_code,
            &charge.brcode,
            order.amount_cents,
        )
        .await?;

        tracing::info!(
            order_id,
            reference_code = %record.reference_code,
            provider = self.provider.name(),
            "Payment record minted"
        );
        Ok(record)
    }

    /// Apply an externally-observed settlement outcome.
    ///
    /// `Confirmed` marks the payment confirmed and advances the order
    /// `pending → paid`; an order that has already progressed (or been
    /// canceled) is not re-labeled. `Failed` marks the payment failed and
    /// leaves the order untouched.
    pub async fn confirm(&self, order_id: i64, outcome: PaymentOutcome) -> AppResult<Order> {
        let order = order::find_by_id(&self.pool, order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {order_id} not found")))?;

        match outcome {
            PaymentOutcome::Confirmed => {
                payment::set_status(&self.pool, order_id, PaymentStatus::Confirmed).await?;
                if order.status == OrderStatus::Pending {
                    let updated =
                        order::set_status(&self.pool, order_id, OrderStatus::Paid).await?;
                    tracing::info!(order_id, "Payment confirmed, order advanced to paid");
                    return Ok(updated);
                }
                tracing::info!(order_id, status = %order.status, "Payment confirmed, order status left as-is");
                Ok(order)
            }
            PaymentOutcome::Failed => {
                payment::set_status(&self.pool, order_id, PaymentStatus::Failed).await?;
                tracing::warn!(order_id, "Payment reported as failed");
                Ok(order)
            }
        }
    }
}
