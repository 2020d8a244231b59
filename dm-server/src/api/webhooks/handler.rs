//! Webhook Handlers
//!
//! Settlement notifications from the payment side. The caller authenticates
//! with a static token header instead of the admin bearer gate.

use axum::{Json, extract::State};
use http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::payments::{PaymentCoordinator, PaymentOutcome};
use crate::utils::{AppError, AppResult};
use shared::models::OrderStatus;

const WEBHOOK_TOKEN_HEADER: &str = "x-webhook-token";

/// Settlement notification payload
#[derive(Debug, Deserialize)]
pub struct PixWebhook {
    pub order_id: i64,
    /// "confirmed" | "failed"
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct PixWebhookResponse {
    pub ok: bool,
    pub order_status: OrderStatus,
}

/// POST /api/webhooks/pix — apply an externally-observed settlement outcome
pub async fn pix_settlement(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(payload): Json<PixWebhook>,
) -> AppResult<Json<PixWebhookResponse>> {
    let token = headers
        .get(WEBHOOK_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if token != Some(state.config.webhook_token.as_str()) {
        tracing::warn!(target: "security", order_id = payload.order_id, "Webhook with bad token rejected");
        return Err(AppError::unauthorized());
    }

    let outcome = match payload.status.as_str() {
        "confirmed" => PaymentOutcome::Confirmed,
        "failed" => PaymentOutcome::Failed,
        other => {
            return Err(AppError::validation(format!(
                "Unknown settlement status '{other}'"
            )));
        }
    };

    let coordinator = PaymentCoordinator::new(state.pool.clone(), state.pix_provider.clone());
    let order = coordinator.confirm(payload.order_id, outcome).await?;

    Ok(Json(PixWebhookResponse {
        ok: true,
        order_status: order.status,
    }))
}
