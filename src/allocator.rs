//! Greedy substitution allocation.
//!
//! # Algorithm
//!
//! Single-pass, order-dependent greedy assignment. For each absent staff
//! member's row on the day, slots are visited in plan order; every
//! active session computes its free candidates, orders them, and takes
//! the first one the half-day ledger accepts. A session with no
//! acceptable candidate is emitted as unresolved and the pass moves on.
//!
//! Fairness is a cap (at most one assignment per half-day per
//! substitute), not load balancing: a substitute with zero assignments
//! is preferred only by luck of the ordering. With shuffled ordering the
//! same input can legitimately produce different assigned/unresolved
//! splits across runs; pin a seed or use [`CandidateOrder::ByName`] for
//! reproducible output.
//!
//! There is no backtracking, so a slot can stay unresolved even when a
//! different assignment order would have covered everything.
//!
//! # Complexity
//! O(a * s * n) where a = absent staff rows, s = slots per day,
//! n = staff rows on the day.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::availability::free_staff;
use crate::classifier::{is_active_session, ExclusionSet};
use crate::fairness::HalfDayLedger;
use crate::models::{SlotPlan, SubstitutionRecord, Timetable};

/// How candidate substitutes are ordered before the greedy scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateOrder {
    /// Randomized via the injected generator (default).
    #[default]
    Shuffled,
    /// Deterministic lexicographic order, for reproducible runs.
    ByName,
}

/// Greedy, fairness-capped substitution allocator.
///
/// Holds the slot plan and exclusion configuration; the timetable and
/// absentee set are borrowed per call and nothing is retained between
/// calls.
///
/// # Example
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use subcover::allocator::SubstitutionAllocator;
/// use subcover::classifier::ExclusionSet;
/// use subcover::models::{ScheduleEntry, SlotPlan, Timetable};
///
/// let plan = SlotPlan::numbered(4);
/// let timetable = Timetable::new(vec![
///     ScheduleEntry::from_cells("mon", "asha", &plan, &["", "7A Math", "", ""]),
///     ScheduleEntry::from_cells("mon", "bode", &plan, &["", "", "", ""]),
/// ]);
///
/// let allocator = SubstitutionAllocator::new(plan, ExclusionSet::new());
/// let mut rng = SmallRng::seed_from_u64(42);
/// let records = allocator.allocate_day(&timetable, "mon", &["asha".into()], &mut rng);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].coverage.substitute(), Some("bode"));
/// ```
#[derive(Debug, Clone)]
pub struct SubstitutionAllocator {
    plan: SlotPlan,
    exclusions: ExclusionSet,
    candidate_order: CandidateOrder,
}

impl SubstitutionAllocator {
    /// Creates an allocator with shuffled candidate ordering.
    pub fn new(plan: SlotPlan, exclusions: ExclusionSet) -> Self {
        Self {
            plan,
            exclusions,
            candidate_order: CandidateOrder::default(),
        }
    }

    /// Sets the candidate ordering strategy.
    pub fn with_candidate_order(mut self, order: CandidateOrder) -> Self {
        self.candidate_order = order;
        self
    }

    /// Allocates substitutes for one day.
    ///
    /// Emits one record per active session of each absent staff member,
    /// in schedule row and slot order. Inactive cells emit nothing, so
    /// an absent member with no active sessions contributes no records.
    /// A fresh fairness ledger is used for the day and discarded.
    pub fn allocate_day<R: Rng + ?Sized>(
        &self,
        timetable: &Timetable,
        day: &str,
        absentees: &[String],
        rng: &mut R,
    ) -> Vec<SubstitutionRecord> {
        let mut ledger = HalfDayLedger::new();
        let mut records = Vec::new();

        for entry in timetable.entries_for_day(day) {
            if !absentees.iter().any(|a| a == &entry.staff) {
                continue;
            }
            for slot in self.plan.slots() {
                let content = entry.content_at(slot);
                if !is_active_session(content, slot, &self.plan, &self.exclusions) {
                    continue;
                }
                let text = match content.as_text() {
                    Some(t) => t,
                    None => continue,
                };
                let half = match self.plan.half_of(slot) {
                    Some(h) => h,
                    None => continue,
                };

                let mut candidates =
                    free_staff(timetable, day, slot, absentees, &self.plan, &self.exclusions);
                match self.candidate_order {
                    CandidateOrder::Shuffled => candidates.shuffle(rng),
                    CandidateOrder::ByName => candidates.sort_unstable(),
                }

                let pick = candidates
                    .iter()
                    .find(|c| ledger.can_assign(c, half))
                    .copied();
                match pick {
                    Some(substitute) => {
                        ledger.record_assignment(substitute, half);
                        records.push(SubstitutionRecord::assigned(
                            day,
                            entry.staff.as_str(),
                            slot.as_str(),
                            text,
                            substitute,
                        ));
                    }
                    None => records.push(SubstitutionRecord::unresolved(
                        day,
                        entry.staff.as_str(),
                        slot.as_str(),
                        text,
                    )),
                }
            }
        }

        debug!(day, records = records.len(), "day allocation complete");
        records
    }

    /// Allocates substitutes for every day in the timetable.
    ///
    /// Days run in the timetable's natural order, each with its own
    /// fairness ledger; results are concatenated and each record carries
    /// its day label.
    pub fn allocate_week<R: Rng + ?Sized>(
        &self,
        timetable: &Timetable,
        absentees: &[String],
        rng: &mut R,
    ) -> Vec<SubstitutionRecord> {
        let mut records = Vec::new();
        for day in timetable.days() {
            records.extend(self.allocate_day(timetable, day, absentees, rng));
        }
        debug!(
            days = timetable.days().len(),
            records = records.len(),
            "week allocation complete"
        );
        records
    }
}
