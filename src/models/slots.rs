//! Slot plan: the ordered period structure of a school day.
//!
//! A day is a fixed sequence of labeled slots ("p0", "p1", ...). The plan
//! designates an optional zero slot (governed by a special classification
//! rule) and partitions the sequence into two half-day segments, the unit
//! the fairness cap is enforced over.
//!
//! # Half Partition
//! By default the first half spans positions `[0, floor(N/2)]` and the
//! second half the remainder. The boundary is configuration, not a fixed
//! count.

use serde::{Deserialize, Serialize};

/// Half-day segment of a slot plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayHalf {
    /// Slots before the half boundary.
    First,
    /// Slots at or after the half boundary.
    Second,
}

/// Ordered slot layout for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPlan {
    /// Slot labels in day order.
    slots: Vec<String>,
    /// Label of the zero slot, if the day has one.
    zero_slot: Option<String>,
    /// Number of slots in the first half.
    first_half_len: usize,
}

impl SlotPlan {
    /// Creates a plan over the given slot labels, in day order.
    ///
    /// The half boundary defaults to `floor(N/2) + 1` first-half slots.
    /// No zero slot is designated.
    pub fn new(slots: Vec<String>) -> Self {
        let first_half_len = if slots.is_empty() {
            0
        } else {
            slots.len() / 2 + 1
        };
        Self {
            slots,
            zero_slot: None,
            first_half_len,
        }
    }

    /// Creates a plan of numbered slots `p0..p{count-1}` with `p0` as the
    /// zero slot.
    pub fn numbered(count: usize) -> Self {
        let plan = Self::new((0..count).map(|i| format!("p{i}")).collect());
        if count > 0 {
            plan.with_zero_slot("p0")
        } else {
            plan
        }
    }

    /// Designates the zero slot.
    pub fn with_zero_slot(mut self, slot: impl Into<String>) -> Self {
        self.zero_slot = Some(slot.into());
        self
    }

    /// Overrides the number of first-half slots.
    ///
    /// Clamped to the number of slots in the plan.
    pub fn with_first_half_len(mut self, len: usize) -> Self {
        self.first_half_len = len.min(self.slots.len());
        self
    }

    /// Slot labels in day order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the plan has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots in the first half.
    pub fn first_half_len(&self) -> usize {
        self.first_half_len
    }

    /// Position of a slot in day order.
    pub fn position(&self, slot: &str) -> Option<usize> {
        self.slots.iter().position(|s| s == slot)
    }

    /// Whether `slot` is the designated zero slot.
    pub fn is_zero_slot(&self, slot: &str) -> bool {
        self.zero_slot.as_deref() == Some(slot)
    }

    /// Half-day segment containing `slot`.
    ///
    /// Returns `None` for labels not in the plan.
    pub fn half_of(&self, slot: &str) -> Option<DayHalf> {
        self.position(slot).map(|pos| {
            if pos < self.first_half_len {
                DayHalf::First
            } else {
                DayHalf::Second
            }
        })
    }
}
