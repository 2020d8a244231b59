//! Payment Repository

use super::{RepoError, RepoResult};
use shared::models::{PaymentRecord, PaymentStatus};
use sqlx::SqlitePool;

const PAYMENT_SELECT: &str = "SELECT id, order_id, method, reference_code, brcode, amount_cents, status, created_at FROM payment";

pub async fn find_by_order_id(
    pool: &SqlitePool,
    order_id: i64,
) -> RepoResult<Option<PaymentRecord>> {
    let sql = format!("{PAYMENT_SELECT} WHERE order_id = ?");
    let row = sqlx::query_as::<_, PaymentRecord>(&sql)
        .bind(order_id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert a payment record unless one already exists for the order, then
/// return whichever record is stored.
///
/// The `UNIQUE(order_id)` constraint settles concurrent generation: the
/// losing writer's insert is a no-op and the re-read observes the winner's
/// record, which is exactly the idempotent contract callers rely on.
pub async fn insert_if_absent(
    pool: &SqlitePool,
    order_id: i64,
    method: &str,
    reference_code: &str,
    brcode: &str,
    amount_cents: i64,
) -> RepoResult<PaymentRecord> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO payment (id, order_id, method, reference_code, brcode, amount_cents, status, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
         ON CONFLICT(order_id) DO NOTHING",
    )
    .bind(id)
    .bind(order_id)
    .bind(method)
    .bind(reference_code)
    .bind(brcode)
    .bind(amount_cents)
    .bind(PaymentStatus::Pending)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_order_id(pool, order_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to persist payment record".into()))
}

/// Set the externally-observed settlement status for an order's payment.
pub async fn set_status(
    pool: &SqlitePool,
    order_id: i64,
    status: PaymentStatus,
) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE payment SET status = ?1 WHERE order_id = ?2")
        .bind(status)
        .bind(order_id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
