//! Substitution output records.
//!
//! One record per active session of an absent staff member, produced
//! fresh by each allocation run and never mutated afterwards. An
//! unresolved record is a valid terminal outcome, not an error: it marks
//! a session that needs manual coverage and stays visibly distinct from
//! assigned ones.

use serde::{Deserialize, Serialize};

/// Outcome of one coverage attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coverage {
    /// A free staff member takes the session.
    Assigned(String),
    /// No eligible, fairness-compliant substitute was found.
    Unresolved,
}

impl Coverage {
    /// Whether a substitute was assigned.
    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    /// The assigned substitute's name, if any.
    pub fn substitute(&self) -> Option<&str> {
        match self {
            Self::Assigned(name) => Some(name),
            Self::Unresolved => None,
        }
    }
}

/// One substitution decision for an absent staff member's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRecord {
    /// Day the session falls on.
    pub day: String,
    /// The absent staff member whose session needs coverage.
    pub absent_staff: String,
    /// Slot label of the session.
    pub slot: String,
    /// Original session text.
    pub content: String,
    /// Assigned substitute or unresolved.
    pub coverage: Coverage,
}

impl SubstitutionRecord {
    /// Creates a record with an assigned substitute.
    pub fn assigned(
        day: impl Into<String>,
        absent_staff: impl Into<String>,
        slot: impl Into<String>,
        content: impl Into<String>,
        substitute: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            absent_staff: absent_staff.into(),
            slot: slot.into(),
            content: content.into(),
            coverage: Coverage::Assigned(substitute.into()),
        }
    }

    /// Creates a record for a session nobody could cover.
    pub fn unresolved(
        day: impl Into<String>,
        absent_staff: impl Into<String>,
        slot: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            absent_staff: absent_staff.into(),
            slot: slot.into(),
            content: content.into(),
            coverage: Coverage::Unresolved,
        }
    }

    /// Whether this session found a substitute.
    pub fn is_resolved(&self) -> bool {
        self.coverage.is_assigned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigned_record() {
        let r = SubstitutionRecord::assigned("mon", "asha", "p1", "7A Math", "bode");
        assert!(r.is_resolved());
        assert_eq!(r.coverage.substitute(), Some("bode"));
        assert_eq!(r.day, "mon");
        assert_eq!(r.slot, "p1");
    }

    #[test]
    fn test_unresolved_record() {
        let r = SubstitutionRecord::unresolved("mon", "asha", "p2", "8B Math");
        assert!(!r.is_resolved());
        assert_eq!(r.coverage.substitute(), None);
        assert_eq!(r.coverage, Coverage::Unresolved);
    }

    #[test]
    fn test_serialization_round_trip() {
        let r = SubstitutionRecord::assigned("mon", "asha", "p1", "7A Math", "bode");
        let json = serde_json::to_string(&r).unwrap();
        let back: SubstitutionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
