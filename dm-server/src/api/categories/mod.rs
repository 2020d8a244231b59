//! Category API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // Public picker: active categories only
        .route("/api/public/categories", get(handler::list_public))
        // Admin CRUD
        .route(
            "/api/admin/categories",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/admin/categories/{id}",
            put(handler::update).delete(handler::delete),
        )
}
