//! Agenda API Handlers

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use http::header;
use serde::Deserialize;

use crate::agenda::{self, Agenda};
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::parse_date;

/// Query params for both agenda endpoints
#[derive(Debug, Deserialize)]
pub struct AgendaQuery {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
}

/// GET /api/admin/agenda?date= — the day's orders as JSON
pub async fn get_agenda(
    State(state): State<ServerState>,
    Query(query): Query<AgendaQuery>,
) -> AppResult<Json<Agenda>> {
    let date = parse_date(&query.date, "date")?;
    let agenda = agenda::build_agenda(&state.pool, &date.format("%Y-%m-%d").to_string()).await?;
    Ok(Json(agenda))
}

/// GET /api/admin/agenda/document?date= — downloadable plain-text document
pub async fn get_document(
    State(state): State<ServerState>,
    Query(query): Query<AgendaQuery>,
) -> AppResult<Response> {
    let date = parse_date(&query.date, "date")?;
    let normalized = date.format("%Y-%m-%d").to_string();
    let agenda = agenda::build_agenda(&state.pool, &normalized).await?;
    let document = agenda::render_text(&agenda);

    tracing::info!(date = %normalized, entries = agenda.entries.len(), "Agenda document exported");

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"agenda-{normalized}.txt\""),
            ),
        ],
        document,
    )
        .into_response())
}
