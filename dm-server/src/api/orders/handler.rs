//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::order::{self, OrderListFilter};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_BODY_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, parse_date,
    parse_time, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderCreate, OrderStatus};

/// Validate and normalize a public order submission.
///
/// Returns the payload with delivery date/time re-formatted canonically
/// (`YYYY-MM-DD` / `HH:MM`) so storage ordering is deterministic.
fn validate_submission(mut payload: OrderCreate) -> AppResult<OrderCreate> {
    validate_required_text(&payload.recipient_name, "recipient_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.sender_name, "sender_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.city, "city", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.state, "state", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.custom_message, "custom_message", MAX_BODY_LEN)?;
    validate_optional_text(&payload.intro_media_ref, "intro_media_ref", MAX_URL_LEN)?;
    validate_optional_text(&payload.closing_media_ref, "closing_media_ref", MAX_URL_LEN)?;

    validate_required_text(&payload.delivery_date, "delivery_date", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.delivery_time, "delivery_time", MAX_SHORT_TEXT_LEN)?;
    let date = parse_date(&payload.delivery_date, "delivery_date")?;
    let time = parse_time(&payload.delivery_time, "delivery_time")?;

    // Deliveries cannot be scheduled in the past; today is still accepted
    let today = chrono::Utc::now().date_naive();
    if date < today {
        return Err(AppError::validation("delivery_date must not be in the past"));
    }

    // Exactly one of catalog reference or keyed-in custom message
    let has_custom = payload
        .custom_message
        .as_deref()
        .is_some_and(|m| !m.trim().is_empty());
    match (payload.message_id, has_custom) {
        (None, false) => {
            return Err(AppError::validation(
                "Either message_id or custom_message is required",
            ));
        }
        (Some(_), true) => {
            return Err(AppError::validation(
                "Provide either message_id or custom_message, not both",
            ));
        }
        _ => {}
    }

    payload.delivery_date = date.format("%Y-%m-%d").to_string();
    payload.delivery_time = time.format("%H:%M").to_string();
    Ok(payload)
}

/// POST /api/public/orders — create an order in status `pending`
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let payload = validate_submission(payload)?;
    let created = order::create(&state.pool, &payload).await?;
    tracing::info!(
        order_id = created.id,
        delivery_date = %created.delivery_date,
        amount_cents = created.amount_cents,
        "Order created"
    );
    Ok(Json(created))
}

/// Public status response — no customer details leaked
#[derive(Debug, Serialize)]
pub struct PublicOrderStatus {
    pub id: i64,
    pub status: OrderStatus,
}

/// GET /api/public/orders/{id} — status lookup for the storefront
pub async fn public_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PublicOrderStatus>> {
    let order = order::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(PublicOrderStatus {
        id: order.id,
        status: order.status,
    }))
}

/// Query params for the admin listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Exact status match
    pub status: Option<String>,
    /// Free-text search over recipient name, address and message title
    pub q: Option<String>,
    /// Creation date range, `YYYY-MM-DD` (inclusive)
    pub from: Option<String>,
    /// Creation date range, `YYYY-MM-DD` (inclusive)
    pub to: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// GET /api/admin/orders — newest first, filterable
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let status = match &query.status {
        Some(raw) => Some(
            OrderStatus::parse(raw)
                .ok_or_else(|| AppError::validation(format!("Unknown status '{raw}'")))?,
        ),
        None => None,
    };
    let created_from = match &query.from {
        Some(raw) => {
            let date = parse_date(raw, "from")?;
            Some(date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis())
        }
        None => None,
    };
    let created_to = match &query.to {
        Some(raw) => {
            // Inclusive upper bound: push to the start of the next day
            let date = parse_date(raw, "to")? + chrono::Days::new(1);
            Some(date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis())
        }
        None => None,
    };

    let filter = OrderListFilter {
        status,
        q: query.q,
        created_from,
        created_to,
        limit: query.limit.clamp(1, 500),
        offset: query.offset.max(0),
    };
    let orders = order::list(&state.pool, &filter).await?;
    Ok(Json(orders))
}

/// GET /api/admin/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = order::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(order))
}

/// Status update payload — raw string so unknown values map to a validation
/// error instead of a deserialization failure
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// PUT /api/admin/orders/{id}/status — re-label an order
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Order>> {
    let status = OrderStatus::parse(&payload.status)
        .ok_or_else(|| AppError::validation(format!("Unknown status '{}'", payload.status)))?;
    let updated = order::set_status(&state.pool, id, status).await?;
    tracing::info!(order_id = id, status = %status, "Order status updated");
    Ok(Json(updated))
}
