//! Workload aggregation.
//!
//! Counts active sessions per staff member using the same classifier
//! the allocator uses, so substitution eligibility and workload totals
//! can never disagree about what counts as a session. Read-only and
//! independent of allocation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::classifier::{is_active_session, ExclusionSet};
use crate::models::{ScheduleEntry, SlotPlan, Timetable};

/// Aggregation scope for session counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// One named day.
    Day(&'a str),
    /// Every day in the timetable.
    Week,
}

/// Weekly totals for one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffWorkload {
    /// Staff member name.
    pub staff: String,
    /// Active sessions across the week.
    pub sessions: usize,
    /// Distinct days with at least one entry.
    pub days_present: usize,
}

/// Session count for one staff member on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffSessionCount {
    /// Staff member name.
    pub staff: String,
    /// Active sessions that day.
    pub sessions: usize,
}

/// Per-day session count for one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    /// Day label.
    pub day: String,
    /// Active sessions that day.
    pub sessions: usize,
}

/// Read-only session counter over a timetable.
#[derive(Debug, Clone)]
pub struct WorkloadCounter {
    plan: SlotPlan,
    exclusions: ExclusionSet,
}

impl WorkloadCounter {
    /// Creates a counter with the given classification configuration.
    pub fn new(plan: SlotPlan, exclusions: ExclusionSet) -> Self {
        Self { plan, exclusions }
    }

    /// Active sessions for `staff` within `scope`.
    pub fn count_active_sessions(
        &self,
        timetable: &Timetable,
        staff: &str,
        scope: Scope<'_>,
    ) -> usize {
        timetable
            .entries_for_staff(staff)
            .iter()
            .filter(|e| match scope {
                Scope::Day(day) => e.day == day,
                Scope::Week => true,
            })
            .map(|e| self.entry_sessions(e))
            .sum()
    }

    /// Distinct days on which `staff` has at least one entry.
    ///
    /// Presence, not activity: a day of blank slots still counts.
    pub fn distinct_days_present(&self, timetable: &Timetable, staff: &str) -> usize {
        timetable
            .entries_for_staff(staff)
            .iter()
            .map(|e| e.day.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Session counts per day for `staff`, in the timetable's day order.
    ///
    /// Only days where the staff member has an entry appear.
    pub fn daily_breakdown(&self, timetable: &Timetable, staff: &str) -> Vec<DayCount> {
        let mut breakdown = Vec::new();
        for day in timetable.days() {
            let entries = timetable.entries_for_day(day);
            let mine: Vec<_> = entries.iter().filter(|e| e.staff == staff).collect();
            if mine.is_empty() {
                continue;
            }
            let sessions = mine.iter().map(|e| self.entry_sessions(e)).sum();
            breakdown.push(DayCount {
                day: day.to_string(),
                sessions,
            });
        }
        breakdown
    }

    /// Weekly totals for every staff member, most sessions first.
    ///
    /// Ties keep the timetable's staff order.
    pub fn weekly_summary(&self, timetable: &Timetable) -> Vec<StaffWorkload> {
        let mut summary: Vec<StaffWorkload> = timetable
            .staff_names()
            .iter()
            .map(|staff| StaffWorkload {
                staff: staff.to_string(),
                sessions: self.count_active_sessions(timetable, staff, Scope::Week),
                days_present: self.distinct_days_present(timetable, staff),
            })
            .collect();
        summary.sort_by(|a, b| b.sessions.cmp(&a.sessions));
        summary
    }

    /// Session counts for every staff member on one day, most first.
    pub fn daily_summary(&self, timetable: &Timetable, day: &str) -> Vec<StaffSessionCount> {
        let mut seen = HashSet::new();
        let mut summary: Vec<StaffSessionCount> = timetable
            .entries_for_day(day)
            .iter()
            .filter(|e| seen.insert(e.staff.clone()))
            .map(|e| StaffSessionCount {
                staff: e.staff.clone(),
                sessions: self.count_active_sessions(timetable, &e.staff, Scope::Day(day)),
            })
            .collect();
        summary.sort_by(|a, b| b.sessions.cmp(&a.sessions));
        summary
    }

    fn entry_sessions(&self, entry: &ScheduleEntry) -> usize {
        self.plan
            .slots()
            .iter()
            .filter(|slot| {
                is_active_session(entry.content_at(slot), slot, &self.plan, &self.exclusions)
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> WorkloadCounter {
        WorkloadCounter::new(SlotPlan::numbered(4), ExclusionSet::new())
    }

    fn sample_timetable() -> Timetable {
        let plan = SlotPlan::numbered(4);
        Timetable::new(vec![
            // asha: 2 active on mon, 1 on wed
            ScheduleEntry::from_cells("mon", "asha", &plan, &["", "7A Math", "8B Math", ""]),
            ScheduleEntry::from_cells("wed", "asha", &plan, &["", "", "9C Art", ""]),
            // bode: 1 active on mon (zero slot without skill doesn't count)
            ScheduleEntry::from_cells("mon", "bode", &plan, &["assembly", "7B Sci", "", ""]),
        ])
    }

    #[test]
    fn test_week_and_day_counts() {
        let c = counter();
        let t = sample_timetable();
        assert_eq!(c.count_active_sessions(&t, "asha", Scope::Week), 3);
        assert_eq!(c.count_active_sessions(&t, "asha", Scope::Day("mon")), 2);
        assert_eq!(c.count_active_sessions(&t, "asha", Scope::Day("wed")), 1);
        assert_eq!(c.count_active_sessions(&t, "asha", Scope::Day("fri")), 0);
    }

    #[test]
    fn test_distinct_days_present() {
        let c = counter();
        let t = sample_timetable();
        assert_eq!(c.distinct_days_present(&t, "asha"), 2);
        assert_eq!(c.distinct_days_present(&t, "bode"), 1);
        assert_eq!(c.distinct_days_present(&t, "nobody"), 0);
    }

    #[test]
    fn test_zero_slot_excluded_from_counts_without_skill() {
        let c = counter();
        let t = sample_timetable();
        assert_eq!(c.count_active_sessions(&t, "bode", Scope::Week), 1);
    }

    #[test]
    fn test_skill_zero_slot_counts() {
        let plan = SlotPlan::numbered(2);
        let t = Timetable::new(vec![ScheduleEntry::from_cells(
            "mon",
            "asha",
            &plan,
            &["Skill Period", ""],
        )]);
        let c = WorkloadCounter::new(plan, ExclusionSet::new());
        assert_eq!(c.count_active_sessions(&t, "asha", Scope::Week), 1);
    }

    #[test]
    fn test_counts_are_idempotent() {
        let c = counter();
        let t = sample_timetable();
        let first = c.count_active_sessions(&t, "asha", Scope::Week);
        let second = c.count_active_sessions(&t, "asha", Scope::Week);
        assert_eq!(first, second);
    }

    #[test]
    fn test_exclusions_lower_counts() {
        let plan = SlotPlan::numbered(4);
        let c = WorkloadCounter::new(plan, ExclusionSet::new().with("math"));
        let t = sample_timetable();
        assert_eq!(c.count_active_sessions(&t, "asha", Scope::Week), 1);
    }

    #[test]
    fn test_daily_breakdown_in_day_order() {
        let c = counter();
        let t = sample_timetable();
        let breakdown = c.daily_breakdown(&t, "asha");
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].day, "mon");
        assert_eq!(breakdown[0].sessions, 2);
        assert_eq!(breakdown[1].day, "wed");
        assert_eq!(breakdown[1].sessions, 1);
    }

    #[test]
    fn test_weekly_summary_sorted_by_sessions() {
        let c = counter();
        let t = sample_timetable();
        let summary = c.weekly_summary(&t);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].staff, "asha");
        assert_eq!(summary[0].sessions, 3);
        assert_eq!(summary[0].days_present, 2);
        assert_eq!(summary[1].staff, "bode");
        assert_eq!(summary[1].sessions, 1);
        assert_eq!(summary[1].days_present, 1);
    }

    #[test]
    fn test_daily_summary_sorted_by_sessions() {
        let c = counter();
        let t = sample_timetable();
        let summary = c.daily_summary(&t, "mon");
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].staff, "asha");
        assert_eq!(summary[0].sessions, 2);
        assert_eq!(summary[1].staff, "bode");
        assert_eq!(summary[1].sessions, 1);
    }
}
