//! Message Model

use serde::{Deserialize, Serialize};

/// Snippet length for public catalog listings
const SNIPPET_LEN: usize = 160;

/// Message template entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Message {
    pub id: i64,
    pub category_id: i64,
    pub title: String,
    pub body: String,
    pub is_active: bool,
}

impl Message {
    /// Short body preview for the public catalog listing
    pub fn snippet(&self) -> String {
        let mut end = SNIPPET_LEN.min(self.body.len());
        // Back off to a char boundary so multi-byte text never splits
        while end < self.body.len() && !self.body.is_char_boundary(end) {
            end -= 1;
        }
        if end < self.body.len() {
            format!("{}...", &self.body[..end])
        } else {
            self.body.clone()
        }
    }
}

/// Create message payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreate {
    pub category_id: i64,
    pub title: String,
    pub body: String,
    pub is_active: Option<bool>,
}

/// Update message payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageUpdate {
    pub category_id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_with_body(body: &str) -> Message {
        Message {
            id: 1,
            category_id: 1,
            title: "t".to_string(),
            body: body.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn short_body_is_returned_whole() {
        let m = message_with_body("Feliz aniversário!");
        assert_eq!(m.snippet(), "Feliz aniversário!");
    }

    #[test]
    fn long_body_is_truncated_with_ellipsis() {
        let m = message_with_body(&"a".repeat(500));
        let s = m.snippet();
        assert!(s.ends_with("..."));
        assert_eq!(s.len(), 163);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // "é" is two bytes; a boundary can land mid-char
        let m = message_with_body(&"é".repeat(200));
        let s = m.snippet();
        assert!(s.ends_with("..."));
    }
}
