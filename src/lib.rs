//! Substitute-coverage engine for fixed-period weekly timetables.
//!
//! Given a week's schedule and a set of absent staff, the crate decides
//! which sessions need coverage, computes who is free for each one, and
//! greedily assigns substitutes under a fairness cap of one substitution
//! per half-day per person. Allocation is a single greedy pass, not an
//! optimal matching; sessions nobody can cover surface as unresolved
//! records for manual handling.
//!
//! # Modules
//!
//! - **`models`**: domain types: `Timetable`, `ScheduleEntry`,
//!   `SlotContent`, `SlotPlan`, `DayHalf`, `SubstitutionRecord`, `Coverage`
//! - **`classifier`**: decides which cells count as active sessions
//! - **`availability`**: free-staff queries per day and slot
//! - **`fairness`**: the half-day assignment cap
//! - **`allocator`**: greedy daily and weekly substitution allocation
//! - **`workload`**: session counts and presence summaries
//! - **`validation`**: structural integrity checks on loaded timetables
//! - **`loader`**: CSV timetable loading and slot discovery
//!
//! # Example
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use subcover::allocator::SubstitutionAllocator;
//! use subcover::classifier::ExclusionSet;
//! use subcover::models::{ScheduleEntry, SlotPlan, Timetable};
//!
//! let plan = SlotPlan::numbered(4);
//! let timetable = Timetable::new(vec![
//!     ScheduleEntry::from_cells("mon", "asha", &plan, &["", "7A Math", "", ""]),
//!     ScheduleEntry::from_cells("mon", "bode", &plan, &["", "", "", ""]),
//! ]);
//!
//! let allocator = SubstitutionAllocator::new(plan, ExclusionSet::new());
//! let mut rng = SmallRng::seed_from_u64(7);
//! let records = allocator.allocate_day(&timetable, "mon", &["asha".into()], &mut rng);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].coverage.substitute(), Some("bode"));
//! ```

pub mod allocator;
pub mod availability;
pub mod classifier;
pub mod fairness;
pub mod loader;
pub mod models;
pub mod validation;
pub mod workload;
