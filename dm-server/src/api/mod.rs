//! API route modules
//!
//! # Structure
//!
//! - [`health`] — health check
//! - [`auth`] — admin login and account management
//! - [`categories`] — category catalog (public listing + admin CRUD)
//! - [`messages`] — message catalog (public listing + admin CRUD + import)
//! - [`orders`] — order ledger (public submission + admin management)
//! - [`payments`] — PIX charge generation
//! - [`settings`] — site configuration (public snapshot + admin editing)
//! - [`agenda`] — daily delivery agenda and document export
//! - [`webhooks`] — settlement notifications

pub mod agenda;
pub mod auth;
pub mod categories;
pub mod health;
pub mod messages;
pub mod orders;
pub mod payments;
pub mod settings;
pub mod webhooks;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(auth::router())
        .merge(categories::router())
        .merge(messages::router())
        .merge(orders::router())
        .merge(payments::router())
        .merge(settings::router())
        .merge(agenda::router())
        .merge(webhooks::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and auth gate
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - the storefront is served from a separate origin
        .layer(CorsLayer::permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        // Request ID - unique id per request, propagated to the response
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // ========== Application Middleware ==========
        // Bearer gate for /api/admin/* and /api/auth/* (except login)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_auth,
        ))
}
