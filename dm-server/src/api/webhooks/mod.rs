//! Webhook API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // Guarded by the static webhook token, not the admin bearer gate
        .route("/api/webhooks/pix", post(handler::pix_settlement))
}
