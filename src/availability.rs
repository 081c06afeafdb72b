//! Free-staff queries.
//!
//! A staff member is free for a slot when their own cell there does not
//! classify as an active session (blank cells included) and they are
//! not themselves absent. Excluded content therefore frees its owner:
//! someone on an excluded duty can still be pulled in as a substitute.

use std::collections::HashSet;

use crate::classifier::{is_active_session, ExclusionSet};
use crate::models::{SlotPlan, Timetable};

/// Staff free to cover `slot` on `day`.
///
/// Names are deduplicated and returned in schedule row order, but the
/// order carries no meaning: callers wanting fairness among equal
/// candidates must impose their own ordering. The allocator shuffles
/// with an injected generator or sorts by name.
pub fn free_staff<'a>(
    timetable: &'a Timetable,
    day: &str,
    slot: &str,
    absentees: &[String],
    plan: &SlotPlan,
    exclusions: &ExclusionSet,
) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut free = Vec::new();
    for entry in timetable.entries_for_day(day) {
        let staff = entry.staff.as_str();
        if staff.is_empty() || absentees.iter().any(|a| a == staff) {
            continue;
        }
        if is_active_session(entry.content_at(slot), slot, plan, exclusions) {
            continue;
        }
        if seen.insert(staff) {
            free.push(staff);
        }
    }
    free
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScheduleEntry;

    fn sample() -> (Timetable, SlotPlan) {
        let plan = SlotPlan::numbered(4);
        let timetable = Timetable::new(vec![
            ScheduleEntry::from_cells("mon", "asha", &plan, &["", "7A Math", "", "8B Math"]),
            ScheduleEntry::from_cells("mon", "bode", &plan, &["", "", "7A Math", ""]),
            ScheduleEntry::from_cells("mon", "chidi", &plan, &["", "exam duty", "", ""]),
            ScheduleEntry::from_cells("tue", "asha", &plan, &["", "", "", ""]),
        ]);
        (timetable, plan)
    }

    #[test]
    fn test_blank_slot_is_free() {
        let (t, plan) = sample();
        let ex = ExclusionSet::new();
        let free = free_staff(&t, "mon", "p2", &[], &plan, &ex);
        assert_eq!(free, vec!["asha", "chidi"]);
    }

    #[test]
    fn test_scheduled_staff_not_free() {
        let (t, plan) = sample();
        let ex = ExclusionSet::new();
        let free = free_staff(&t, "mon", "p1", &[], &plan, &ex);
        assert_eq!(free, vec!["bode"]);
    }

    #[test]
    fn test_absentees_excluded() {
        let (t, plan) = sample();
        let ex = ExclusionSet::new();
        let free = free_staff(&t, "mon", "p2", &["asha".into()], &plan, &ex);
        assert_eq!(free, vec!["chidi"]);
    }

    #[test]
    fn test_excluded_content_frees_its_owner() {
        let (t, plan) = sample();
        let ex = ExclusionSet::new().with("exam");
        // chidi's p1 cell is excluded, so chidi is free there.
        let free = free_staff(&t, "mon", "p1", &[], &plan, &ex);
        assert_eq!(free, vec!["bode", "chidi"]);
    }

    #[test]
    fn test_day_scoping() {
        let (t, plan) = sample();
        let ex = ExclusionSet::new();
        let free = free_staff(&t, "tue", "p1", &[], &plan, &ex);
        assert_eq!(free, vec!["asha"]);
    }

    #[test]
    fn test_unknown_day_is_empty() {
        let (t, plan) = sample();
        let ex = ExclusionSet::new();
        assert!(free_staff(&t, "fri", "p1", &[], &plan, &ex).is_empty());
    }

    #[test]
    fn test_duplicate_rows_deduplicated() {
        let plan = SlotPlan::numbered(2);
        let t = Timetable::new(vec![
            ScheduleEntry::from_cells("mon", "asha", &plan, &["", ""]),
            ScheduleEntry::from_cells("mon", "asha", &plan, &["", ""]),
        ]);
        let ex = ExclusionSet::new();
        assert_eq!(free_staff(&t, "mon", "p1", &[], &plan, &ex), vec!["asha"]);
    }
}
