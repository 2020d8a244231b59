//! Category Repository

use super::{RepoError, RepoResult};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use sqlx::SqlitePool;

/// Find all categories, including inactive ones (admin view)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let rows = sqlx::query_as::<_, Category>(
        "SELECT id, name, is_active FROM category ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Find active categories only (public picker)
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Category>> {
    let rows = sqlx::query_as::<_, Category>(
        "SELECT id, name, is_active FROM category WHERE is_active = 1 ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let row = sqlx::query_as::<_, Category>(
        "SELECT id, name, is_active FROM category WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Category>> {
    let row = sqlx::query_as::<_, Category>(
        "SELECT id, name, is_active FROM category WHERE name = ? LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: CategoryCreate) -> RepoResult<Category> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation(
            "Category name must not be empty".into(),
        ));
    }
    // Check duplicate name
    if find_by_name(pool, &data.name).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Category '{}' already exists",
            data.name
        )));
    }
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO category (id, name, is_active) VALUES (?1, ?2, ?3)")
        .bind(id)
        .bind(&data.name)
        .bind(data.is_active.unwrap_or(true))
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CategoryUpdate) -> RepoResult<Category> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))?;

    if let Some(ref new_name) = data.name {
        if new_name.trim().is_empty() {
            return Err(RepoError::Validation(
                "Category name must not be empty".into(),
            ));
        }
        // Check duplicate name if changing
        if new_name != &existing.name && find_by_name(pool, new_name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{new_name}' already exists"
            )));
        }
    }

    sqlx::query(
        "UPDATE category SET name = COALESCE(?1, name), is_active = COALESCE(?2, is_active) WHERE id = ?3",
    )
    .bind(data.name)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}

/// Hard delete a category. Refused while messages still reference it.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))?;

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM message WHERE category_id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if count > 0 {
        return Err(RepoError::Validation(
            "Cannot delete a category with messages".into(),
        ));
    }

    let rows = sqlx::query("DELETE FROM category WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
