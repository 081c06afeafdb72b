//! Session classification.
//!
//! Decides whether a timetable cell counts as an active session, i.e.
//! one that needs a present staff member. Rules apply in order:
//!
//! 1. Blank cells are inactive.
//! 2. Cells matching a configured exclusion substring are inactive.
//! 3. The zero slot is active only when the cell mentions "skill".
//! 4. Cells carrying a zero-period marker ("zero pd", "0 pd", "zero")
//!    without "skill" are inactive.
//! 5. Everything else is active, including cells marked "optional".
//!
//! Exclusion outranks the zero-slot rule: an excluded substring
//! suppresses a session even in the zero slot. All matching is
//! case-insensitive.

use serde::{Deserialize, Serialize};

use crate::models::{SlotContent, SlotPlan};

/// Marker that keeps zero-slot and zero-period cells active.
const SKILL_MARKER: &str = "skill";

/// Configured substrings that exclude cells from counting as sessions.
///
/// Matching is substring-based rather than whole-word, for compatibility
/// with existing timetables (an entry like "off-site" also matches
/// "off-site training").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    substrings: Vec<String>,
}

impl ExclusionSet {
    /// Creates an empty exclusion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exclusion substring. Blank input is ignored; matching is
    /// case-insensitive.
    pub fn with(mut self, substring: impl AsRef<str>) -> Self {
        let normalized = substring.as_ref().trim().to_lowercase();
        if !normalized.is_empty() {
            self.substrings.push(normalized);
        }
        self
    }

    /// Whether the set has no substrings.
    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty()
    }

    /// Whether `text` contains any exclusion substring.
    pub fn matches(&self, text: &str) -> bool {
        if self.substrings.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.substrings.iter().any(|s| lower.contains(s))
    }
}

/// Whether a cell counts as an active session requiring coverage.
///
/// Pure function of the cell, its slot, the plan's zero-slot
/// designation, and the exclusion set.
pub fn is_active_session(
    content: &SlotContent,
    slot: &str,
    plan: &SlotPlan,
    exclusions: &ExclusionSet,
) -> bool {
    let text = match content.as_text() {
        Some(t) => t,
        None => return false,
    };

    if exclusions.matches(text) {
        return false;
    }

    let lower = text.to_lowercase();
    if plan.is_zero_slot(slot) {
        return lower.contains(SKILL_MARKER);
    }

    // "zero pd" matches as a substring; "0 pd" and "zero" only as the
    // whole cell.
    let zero_marked = lower.contains("zero pd") || lower == "0 pd" || lower == "zero";
    if zero_marked && !lower.contains(SKILL_MARKER) {
        return false;
    }

    true
}
