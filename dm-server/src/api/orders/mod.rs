//! Order API module
//!
//! Public submission and status lookup, admin listing and status management.
//! All mutations go through the order ledger repository.

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // Public storefront
        .route("/api/public/orders", post(handler::create))
        .route("/api/public/orders/{id}", get(handler::public_status))
        // Admin console
        .route("/api/admin/orders", get(handler::list))
        .route("/api/admin/orders/{id}", get(handler::get_by_id))
        .route("/api/admin/orders/{id}/status", put(handler::set_status))
}
