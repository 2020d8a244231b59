//! Agenda aggregation
//!
//! Builds the day-scoped operational view of the order ledger. The agenda
//! includes every order delivering on the date regardless of status — the
//! renderer marks canceled ones rather than hiding them, matching how the
//! daily export has always worked.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::repository::{RepoResult, order};
use shared::models::Order;

/// Day-scoped export of the order ledger
#[derive(Debug, Clone, Serialize)]
pub struct Agenda {
    /// Normalized `YYYY-MM-DD`
    pub date: String,
    /// Orders delivering on the date, earliest delivery time first
    pub entries: Vec<Order>,
}

/// Build the agenda for a calendar date.
///
/// An empty day is a valid agenda, not an error.
pub async fn build_agenda(pool: &SqlitePool, date: &str) -> RepoResult<Agenda> {
    let entries = order::find_by_delivery_date(pool, date).await?;
    Ok(Agenda {
        date: date.to_string(),
        entries,
    })
}

/// Render the agenda as the downloadable plain-text document.
///
/// Stands in for the external document renderer: one header line, one line
/// per order in delivery order.
pub fn render_text(agenda: &Agenda) -> String {
    let mut out = String::new();
    out.push_str(&format!("Agenda — {}\n\n", agenda.date));

    if agenda.entries.is_empty() {
        out.push_str("Nenhum pedido para esta data.\n");
        return out;
    }

    for o in &agenda.entries {
        let msg = match o.message_id {
            Some(id) => format!("Msg {id}"),
            None => "Msg personalizada".to_string(),
        };
        out.push_str(&format!(
            "#{} — {} — {} (de {}) — {} — {} — Status: {}\n",
            o.id, o.delivery_time, o.recipient_name, o.sender_name, o.address, msg, o.status
        ));
    }
    out
}
