//! Auth API module
//!
//! - `/api/auth/login`: public (no auth required)
//! - `/api/auth/me`, `/api/auth/change-password`: protected

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/change-password", post(handler::change_password))
}
