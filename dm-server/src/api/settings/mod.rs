//! Settings API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // Public storefront snapshot (no PIX key exposure)
        .route("/api/public/config", get(handler::public_config))
        // Admin: read + wholesale replace
        .route(
            "/api/admin/settings",
            get(handler::get).put(handler::update),
        )
}
