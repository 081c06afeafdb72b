//! Timetable domain models.
//!
//! Core data types for representing a week's schedule and the output of
//! a substitution run. All types are plain data with read-only queries;
//! allocation logic lives in the `allocator` module.
//!
//! # Vocabulary
//!
//! | Type | Timetable meaning |
//! |------|-------------------|
//! | `ScheduleEntry` | One staff member's row for one day |
//! | `SlotContent` | One cell: blank or session text |
//! | `SlotPlan` | The day's ordered periods, zero slot, half split |
//! | `SubstitutionRecord` | One coverage decision for an absent member |

mod content;
mod slots;
mod substitution;
mod timetable;

pub use content::SlotContent;
pub use slots::{DayHalf, SlotPlan};
pub use substitution::{Coverage, SubstitutionRecord};
pub use timetable::{ScheduleEntry, Timetable};
