//! Message API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::message;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_BODY_LEN, MAX_TITLE_LEN, validate_optional_text, validate_required_text,
};
use shared::models::{Message, MessageCreate, MessageUpdate};

/// Query params for the public catalog listing
#[derive(Debug, Deserialize)]
pub struct PublicListQuery {
    pub category_id: Option<i64>,
    pub q: Option<String>,
}

/// Public catalog entry — body reduced to a snippet
#[derive(Debug, Serialize)]
pub struct MessageSummary {
    pub id: i64,
    pub title: String,
    pub snippet: String,
}

/// GET /api/public/messages — active messages, optional category/text filter
pub async fn list_public(
    State(state): State<ServerState>,
    Query(query): Query<PublicListQuery>,
) -> AppResult<Json<Vec<MessageSummary>>> {
    let messages =
        message::list_public(&state.pool, query.category_id, query.q.as_deref()).await?;
    Ok(Json(
        messages
            .into_iter()
            .map(|m| MessageSummary {
                id: m.id,
                title: m.title.clone(),
                snippet: m.snippet(),
            })
            .collect(),
    ))
}

/// GET /api/admin/messages — all messages
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Message>>> {
    let messages = message::find_all(&state.pool).await?;
    Ok(Json(messages))
}

/// POST /api/admin/messages
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MessageCreate>,
) -> AppResult<Json<Message>> {
    validate_required_text(&payload.title, "title", MAX_TITLE_LEN)?;
    validate_required_text(&payload.body, "body", MAX_BODY_LEN)?;
    let created = message::create(&state.pool, payload).await?;
    tracing::info!(message_id = created.id, title = %created.title, "Message created");
    Ok(Json(created))
}

/// PUT /api/admin/messages/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MessageUpdate>,
) -> AppResult<Json<Message>> {
    validate_optional_text(&payload.title, "title", MAX_TITLE_LEN)?;
    validate_optional_text(&payload.body, "body", MAX_BODY_LEN)?;
    let updated = message::update(&state.pool, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/admin/messages/{id}
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let deleted = message::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(message_id = id, "Message deleted");
    }
    Ok(Json(deleted))
}

/// Import result
#[derive(Debug, Serialize)]
pub struct ImportResult {
    pub imported: usize,
}

/// POST /api/admin/messages/import — bulk import from marker-formatted text
///
/// The body is the already-extracted plain text (`Categoria:` / `Título:` /
/// `---` markers); binary document parsing happens upstream.
pub async fn import(
    State(state): State<ServerState>,
    body: String,
) -> AppResult<Json<ImportResult>> {
    let imported = message::import_text(&state.pool, &body).await?;
    tracing::info!(imported, "Bulk message import finished");
    Ok(Json(ImportResult { imported }))
}
