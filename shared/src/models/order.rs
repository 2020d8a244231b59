//! Order Model

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The transition graph is deliberately permissive: staff may re-label an
/// order to any status in this set. Orders are never deleted; cancellation is
/// the terminal soft state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Scheduled,
    Done,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Scheduled,
        OrderStatus::Done,
        OrderStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Scheduled => "scheduled",
            OrderStatus::Done => "done",
            OrderStatus::Canceled => "canceled",
        }
    }

    /// Parse a status value; `None` for anything outside the fixed set
    pub fn parse(value: &str) -> Option<OrderStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity — owned by the order ledger.
///
/// `delivery_date` is normalized `YYYY-MM-DD`, `delivery_time` normalized
/// `HH:MM`; both are validated at creation. `amount_cents` is frozen from the
/// settings snapshot at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub recipient_name: String,
    pub sender_name: String,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub delivery_date: String,
    pub delivery_time: String,
    /// Catalog message reference; `None` when a custom message was keyed in
    pub message_id: Option<i64>,
    pub custom_message: Option<String>,
    /// Intro media reference (e.g. a YouTube URL) played before the message
    pub intro_media_ref: Option<String>,
    /// Closing media reference played after the message
    pub closing_media_ref: Option<String>,
    pub amount_cents: i64,
    pub status: OrderStatus,
    pub created_at: i64,
}

/// Public order submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub recipient_name: String,
    pub sender_name: String,
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    pub delivery_date: String,
    pub delivery_time: String,
    #[serde(default)]
    pub message_id: Option<i64>,
    #[serde(default)]
    pub custom_message: Option<String>,
    #[serde(default)]
    pub intro_media_ref: Option<String>,
    #[serde(default)]
    pub closing_media_ref: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_parse() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(OrderStatus::parse("shipped"), None);
        assert_eq!(OrderStatus::parse(""), None);
        assert_eq!(OrderStatus::parse("Pending"), None);
    }
}
