//! Order Repository
//!
//! The order ledger: single authority for order persistence and status
//! transitions. Orders are never physically deleted — cancellation is a
//! status transition, so history and agendas stay intact.

use super::{RepoError, RepoResult, message, settings};
use shared::models::{Order, OrderCreate, OrderStatus};
use sqlx::SqlitePool;

const ORDER_SELECT: &str = "SELECT o.id, o.recipient_name, o.sender_name, o.address, o.city, o.state, o.delivery_date, o.delivery_time, o.message_id, o.custom_message, o.intro_media_ref, o.closing_media_ref, o.amount_cents, o.status, o.created_at FROM orders o";

/// Filter for [`list`]. `created_from`/`created_to` are epoch-millisecond
/// bounds (inclusive / exclusive).
#[derive(Debug, Clone, Default)]
pub struct OrderListFilter {
    pub status: Option<OrderStatus>,
    pub q: Option<String>,
    pub created_from: Option<i64>,
    pub created_to: Option<i64>,
    pub limit: i64,
    pub offset: i64,
}

/// Create a new order in status `pending`.
///
/// Field validation happens at the API boundary; this enforces the
/// referential check (message must exist and be active) and freezes
/// `amount_cents` from the current settings snapshot. Nothing is written when
/// any check fails.
pub async fn create(pool: &SqlitePool, data: &OrderCreate) -> RepoResult<Order> {
    if let Some(message_id) = data.message_id {
        let msg = message::find_by_id(pool, message_id).await?;
        match msg {
            Some(m) if m.is_active => {}
            _ => {
                return Err(RepoError::Validation(
                    "message_id must reference an active message".into(),
                ));
            }
        }
    }

    // Price is frozen from the settings snapshot taken now; later settings
    // changes never reprice existing orders.
    let cfg = settings::get_or_create(pool).await?;

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO orders (id, recipient_name, sender_name, address, city, state, delivery_date, delivery_time, message_id, custom_message, intro_media_ref, closing_media_ref, amount_cents, status, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
    )
    .bind(id)
    .bind(&data.recipient_name)
    .bind(&data.sender_name)
    .bind(&data.address)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.delivery_date)
    .bind(&data.delivery_time)
    .bind(data.message_id)
    .bind(&data.custom_message)
    .bind(&data.intro_media_ref)
    .bind(&data.closing_media_ref)
    .bind(cfg.base_price_cents)
    .bind(OrderStatus::Pending)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let sql = format!("{ORDER_SELECT} WHERE o.id = ?");
    let row = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Re-label an order's status.
///
/// The transition graph is deliberately permissive (any status to any other);
/// only unknown ids are rejected. Status values are already constrained to
/// the fixed set by the [`OrderStatus`] type.
pub async fn set_status(pool: &SqlitePool, id: i64, status: OrderStatus) -> RepoResult<Order> {
    let rows = sqlx::query("UPDATE orders SET status = ?1 WHERE id = ?2")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// List orders, newest first.
///
/// Ordering is `created_at DESC, id DESC` — deterministic even for orders
/// created within the same millisecond, which pagination relies on. Free-text
/// search covers recipient name, address and the linked message title.
pub async fn list(pool: &SqlitePool, filter: &OrderListFilter) -> RepoResult<Vec<Order>> {
    let mut qb: sqlx::QueryBuilder<sqlx::Sqlite> = sqlx::QueryBuilder::new(format!(
        "{ORDER_SELECT} LEFT JOIN message m ON o.message_id = m.id WHERE 1=1"
    ));
    if let Some(status) = filter.status {
        qb.push(" AND o.status = ").push_bind(status);
    }
    if let Some(q) = &filter.q
        && !q.trim().is_empty()
    {
        let pattern = format!("%{}%", q.trim());
        qb.push(" AND (o.recipient_name LIKE ")
            .push_bind(pattern.clone())
            .push(" OR o.address LIKE ")
            .push_bind(pattern.clone())
            .push(" OR m.title LIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(from) = filter.created_from {
        qb.push(" AND o.created_at >= ").push_bind(from);
    }
    if let Some(to) = filter.created_to {
        qb.push(" AND o.created_at < ").push_bind(to);
    }
    qb.push(" ORDER BY o.created_at DESC, o.id DESC LIMIT ")
        .push_bind(filter.limit)
        .push(" OFFSET ")
        .push_bind(filter.offset);

    let rows = qb.build_query_as::<Order>().fetch_all(pool).await?;
    Ok(rows)
}

/// All orders delivering on the given `YYYY-MM-DD` date, earliest time first.
///
/// Canceled orders are included — the agenda renderer marks them instead of
/// hiding them.
pub async fn find_by_delivery_date(pool: &SqlitePool, date: &str) -> RepoResult<Vec<Order>> {
    let sql = format!(
        "{ORDER_SELECT} WHERE o.delivery_date = ? ORDER BY o.delivery_time ASC, o.id ASC"
    );
    let rows = sqlx::query_as::<_, Order>(&sql)
        .bind(date)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
