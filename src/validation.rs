//! Timetable integrity checks.
//!
//! Verifies structural invariants of a loaded timetable before it is
//! handed to the allocator. Detects:
//! - Blank staff names
//! - Blank day labels
//! - Entries missing a configured slot
//! - Duplicate (day, staff) rows
//!
//! The engine assumes a validated timetable; these checks run once at
//! the loading boundary, and all problems are reported together rather
//! than failing on the first.

use std::collections::HashSet;

use crate::models::{SlotPlan, Timetable};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An entry has a blank staff name.
    BlankStaffName,
    /// An entry has a blank day label.
    BlankDay,
    /// An entry lacks a slot the plan defines.
    MissingSlot,
    /// Two entries share the same (day, staff) pair.
    DuplicateEntry,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a timetable against its slot plan.
///
/// Checks:
/// 1. Every entry names a staff member.
/// 2. Every entry names a day.
/// 3. Every entry carries every slot the plan defines.
/// 4. No (day, staff) pair appears twice.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_timetable(timetable: &Timetable, plan: &SlotPlan) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for (idx, entry) in timetable.entries().iter().enumerate() {
        let staff_blank = entry.staff.trim().is_empty();
        let day_blank = entry.day.trim().is_empty();

        if staff_blank {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankStaffName,
                format!("Entry {idx} (day '{}') has a blank staff name", entry.day),
            ));
        }
        if day_blank {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankDay,
                format!("Entry {idx} (staff '{}') has a blank day", entry.staff),
            ));
        }

        for slot in plan.slots() {
            if !entry.slots.contains_key(slot) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MissingSlot,
                    format!(
                        "Entry for '{}' on '{}' is missing slot '{slot}'",
                        entry.staff, entry.day
                    ),
                ));
            }
        }

        if !staff_blank && !day_blank && !seen.insert((entry.day.as_str(), entry.staff.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateEntry,
                format!(
                    "Duplicate entry for '{}' on '{}'",
                    entry.staff, entry.day
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
