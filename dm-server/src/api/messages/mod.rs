//! Message API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        // Public catalog browsing
        .route("/api/public/messages", get(handler::list_public))
        // Admin CRUD + bulk import
        .route(
            "/api/admin/messages",
            get(handler::list).post(handler::create),
        )
        .route("/api/admin/messages/import", post(handler::import))
        .route(
            "/api/admin/messages/{id}",
            put(handler::update).delete(handler::delete),
        )
}
