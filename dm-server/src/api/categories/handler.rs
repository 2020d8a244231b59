//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::category;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

/// Public category entry — id and name only
#[derive(Debug, Serialize)]
pub struct PublicCategory {
    pub id: i64,
    pub name: String,
}

/// GET /api/public/categories — active categories for the storefront picker
pub async fn list_public(State(state): State<ServerState>) -> AppResult<Json<Vec<PublicCategory>>> {
    let categories = category::find_active(&state.pool).await?;
    Ok(Json(
        categories
            .into_iter()
            .map(|c| PublicCategory {
                id: c.id,
                name: c.name,
            })
            .collect(),
    ))
}

/// GET /api/admin/categories — all categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = category::find_all(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /api/admin/categories
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let created = category::create(&state.pool, payload).await?;
    tracing::info!(category_id = created.id, name = %created.name, "Category created");
    Ok(Json(created))
}

/// PUT /api/admin/categories/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    let updated = category::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/categories/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = category::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(category_id = id, "Category deleted");
    }
    Ok(Json(deleted))
}
