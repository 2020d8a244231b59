//! Payment API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // Public: the storefront requests the charge right after submitting
        .route("/api/public/payments/pix", post(handler::create_pix))
}
