//! Payment API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::payments::PaymentCoordinator;
use crate::utils::AppResult;
use shared::models::PaymentStatus;

/// Charge request payload
#[derive(Debug, Deserialize)]
pub struct PixCreate {
    pub order_id: i64,
}

/// Charge response presented to the customer
#[derive(Debug, Serialize)]
pub struct PixChargeResponse {
    pub order_id: i64,
    pub payment_id: i64,
    /// Opaque per-order transaction id
    pub reference_code: String,
    /// Scannable/copyable BR Code payload
    pub brcode: String,
    pub amount_cents: i64,
    pub status: PaymentStatus,
    pub provider: &'static str,
}

/// POST /api/public/payments/pix — generate (or re-fetch) the order's charge
///
/// Idempotent: retrying after a dropped response returns the same record.
pub async fn create_pix(
    State(state): State<ServerState>,
    Json(payload): Json<PixCreate>,
) -> AppResult<Json<PixChargeResponse>> {
    let coordinator = PaymentCoordinator::new(state.pool.clone(), state.pix_provider.clone());
    let record = coordinator.generate(payload.order_id).await?;

    Ok(Json(PixChargeResponse {
        order_id: record.order_id,
        payment_id: record.id,
        reference_code: record.reference_code,
        brcode: record.brcode,
        amount_cents: record.amount_cents,
        status: record.status,
        provider: coordinator.provider_name(),
    }))
}
