//! Input validation helpers
//!
//! Centralized text length constants and validation functions. SQLite TEXT
//! has no built-in length enforcement, so limits are applied here before
//! anything is persisted.

use chrono::{NaiveDate, NaiveTime};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category name, recipient, sender
pub const MAX_NAME_LEN: usize = 200;

/// Message titles
pub const MAX_TITLE_LEN: usize = 200;

/// Message bodies and custom keyed-in messages
pub const MAX_BODY_LEN: usize = 2000;

/// Short identifiers: phone numbers, PIX keys, city/state names
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Media references (YouTube URLs)
pub const MAX_URL_LEN: usize = 2048;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

// ── Date / time parsing ─────────────────────────────────────────────

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("{field} must be a valid YYYY-MM-DD date")))
}

/// Parse a time of day, accepting `HH:MM` or `HH:MM:SS`.
pub fn parse_time(value: &str, field: &str) -> Result<NaiveTime, AppError> {
    let v = value.trim();
    NaiveTime::parse_from_str(v, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(v, "%H:%M:%S"))
        .map_err(|_| AppError::validation(format!("{field} must be a valid HH:MM time")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_whitespace() {
        assert!(validate_required_text("Maria", "recipient_name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "recipient_name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "recipient_name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn required_text_enforces_length() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_none() {
        assert!(validate_optional_text(&None, "city", MAX_SHORT_TEXT_LEN).is_ok());
        let too_long = Some("x".repeat(MAX_SHORT_TEXT_LEN + 1));
        assert!(validate_optional_text(&too_long, "city", MAX_SHORT_TEXT_LEN).is_err());
    }

    #[test]
    fn dates_parse_and_reject_garbage() {
        assert!(parse_date("2025-12-25", "delivery_date").is_ok());
        assert!(parse_date("25/12/2025", "delivery_date").is_err());
        assert!(parse_date("2025-13-01", "delivery_date").is_err());
        assert!(parse_date("", "delivery_date").is_err());
    }

    #[test]
    fn times_accept_both_minute_and_second_precision() {
        assert_eq!(
            parse_time("09:00", "delivery_time").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert!(parse_time("09:00:30", "delivery_time").is_ok());
        assert!(parse_time("25:00", "delivery_time").is_err());
        assert!(parse_time("9h30", "delivery_time").is_err());
    }
}
