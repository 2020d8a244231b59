//! Agenda API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/agenda", get(handler::get_agenda))
        .route("/api/admin/agenda/document", get(handler::get_document))
}
