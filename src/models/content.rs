//! Slot cell content.
//!
//! Raw timetable cells mix session text, blanks, and whitespace noise.
//! Construction normalizes once (trim, blank becomes `Empty`) so the
//! rest of the engine never re-checks for empty strings.

use serde::{Deserialize, Serialize};

/// Content of one timetable cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotContent {
    /// No session scheduled in this slot.
    #[default]
    Empty,
    /// Scheduled session text. Never blank after construction.
    Text(String),
}

impl SlotContent {
    /// Creates content from raw cell text.
    ///
    /// Trims surrounding whitespace; blank input becomes [`SlotContent::Empty`].
    pub fn text(raw: impl AsRef<str>) -> Self {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    /// Whether this cell holds no session.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The session text, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<&str> for SlotContent {
    fn from(raw: &str) -> Self {
        Self::text(raw)
    }
}

impl From<String> for SlotContent {
    fn from(raw: String) -> Self {
        Self::text(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_normalization() {
        assert_eq!(SlotContent::text(""), SlotContent::Empty);
        assert_eq!(SlotContent::text("   "), SlotContent::Empty);
        assert_eq!(SlotContent::text("\t\n"), SlotContent::Empty);
    }

    #[test]
    fn test_text_trimmed() {
        let c = SlotContent::text("  7A Math  ");
        assert_eq!(c.as_text(), Some("7A Math"));
        assert!(!c.is_blank());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(SlotContent::from("8B Physics"), SlotContent::text("8B Physics"));
        assert_eq!(SlotContent::from(String::from(" ")), SlotContent::Empty);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(SlotContent::default().is_blank());
    }
}
