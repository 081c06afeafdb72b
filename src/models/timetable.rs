//! Timetable rows and read-only queries.
//!
//! A timetable holds one [`ScheduleEntry`] per (day, staff member) pair,
//! each mapping slot labels to cell content. The timetable is input data
//! owned by the caller; every query here is read-only. Structural
//! integrity (non-blank names, consistent slot sets) is the loader and
//! validation layer's responsibility, not re-checked per query.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::{SlotContent, SlotPlan};

/// One timetable row: a staff member's slots for a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day label (e.g. "monday").
    pub day: String,
    /// Staff member name.
    pub staff: String,
    /// Slot label to cell content.
    pub slots: HashMap<String, SlotContent>,
}

impl ScheduleEntry {
    /// Creates an entry with no slots.
    pub fn new(day: impl Into<String>, staff: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            staff: staff.into(),
            slots: HashMap::new(),
        }
    }

    /// Sets the content of one slot.
    pub fn with_slot(mut self, slot: impl Into<String>, content: impl Into<SlotContent>) -> Self {
        self.slots.insert(slot.into(), content.into());
        self
    }

    /// Builds an entry by zipping the plan's slots with raw cell text.
    ///
    /// Missing cells become blank slots; surplus cells are ignored.
    pub fn from_cells(
        day: impl Into<String>,
        staff: impl Into<String>,
        plan: &SlotPlan,
        cells: &[&str],
    ) -> Self {
        let mut entry = Self::new(day, staff);
        for (idx, slot) in plan.slots().iter().enumerate() {
            let raw = cells.get(idx).copied().unwrap_or("");
            entry = entry.with_slot(slot.clone(), raw);
        }
        entry
    }

    /// Content at `slot`. Missing slots read as blank.
    pub fn content_at(&self, slot: &str) -> &SlotContent {
        self.slots.get(slot).unwrap_or(&SlotContent::Empty)
    }
}

/// A week's schedule: the full set of entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    entries: Vec<ScheduleEntry>,
}

impl Timetable {
    /// Creates a timetable from its rows.
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    /// All rows, in input order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timetable has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Day labels in first-appearance order, deduplicated.
    pub fn days(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.day.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }

    /// Staff names in first-appearance order, deduplicated.
    pub fn staff_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.staff.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Rows scheduled on `day`, in input order.
    pub fn entries_for_day(&self, day: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// Rows for `staff` across all days, in input order.
    pub fn entries_for_staff(&self, staff: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.staff == staff).collect()
    }

    /// Content for one (day, staff, slot) triple.
    ///
    /// Reads from the first matching row; absent rows read as blank.
    pub fn content_at(&self, day: &str, staff: &str, slot: &str) -> &SlotContent {
        self.entries
            .iter()
            .find(|e| e.day == day && e.staff == staff)
            .map(|e| e.content_at(slot))
            .unwrap_or(&SlotContent::Empty)
    }

    /// Distinct non-blank cell texts across all slots, sorted.
    ///
    /// Useful as a suggestion list when configuring exclusion substrings.
    pub fn distinct_contents(&self) -> Vec<String> {
        let mut texts = BTreeSet::new();
        for entry in &self.entries {
            for content in entry.slots.values() {
                if let Some(text) = content.as_text() {
                    texts.insert(text.to_string());
                }
            }
        }
        texts.into_iter().collect()
    }
}
