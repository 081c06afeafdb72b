//! CSV timetable loading.
//!
//! Owns all file-format knowledge: header normalization, period-column
//! discovery, and cell normalization. The engine itself never touches
//! files; it consumes the [`Timetable`] and [`SlotPlan`] produced here.
//!
//! # Expected Shape
//! A header row with a `day` column, a staff column (`tname` or
//! `staff`), and one column per period labeled `p0`, `p1`, ...
//! Header matching is case-insensitive and whitespace-tolerant; period
//! columns may appear in any order and are sorted numerically. Rows
//! with a blank day or staff cell are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::models::{ScheduleEntry, SlotPlan, Timetable};

/// Header label for the day column.
const DAY_COLUMN: &str = "day";
/// Accepted header labels for the staff column.
const STAFF_COLUMNS: [&str; 2] = ["tname", "staff"];

/// Errors raised while loading a timetable file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read timetable file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse timetable file: {0}")]
    Csv(#[from] csv::Error),

    #[error("timetable is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("timetable has no period columns (expected headers like 'p0', 'p1', ...)")]
    NoPeriodColumns,
}

/// A parsed timetable plus the slot plan inferred from its headers.
#[derive(Debug, Clone)]
pub struct LoadedTimetable {
    /// The week's schedule rows.
    pub timetable: Timetable,
    /// Slot layout discovered from the period columns. `p0`, when
    /// present, is designated the zero slot.
    pub plan: SlotPlan,
}

/// Loads a timetable from a CSV file on disk.
pub fn load_timetable_csv(path: impl AsRef<Path>) -> Result<LoadedTimetable, LoadError> {
    let file = File::open(path.as_ref())?;
    load_timetable_reader(file)
}

/// Loads a timetable from any CSV reader.
pub fn load_timetable_reader<R: Read>(reader: R) -> Result<LoadedTimetable, LoadError> {
    let mut csv = csv::Reader::from_reader(reader);
    let headers: Vec<String> = csv
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let day_col = headers
        .iter()
        .position(|h| h == DAY_COLUMN)
        .ok_or(LoadError::MissingColumn(DAY_COLUMN))?;
    let staff_col = headers
        .iter()
        .position(|h| STAFF_COLUMNS.contains(&h.as_str()))
        .ok_or(LoadError::MissingColumn("tname"))?;

    // (period number, column index), sorted numerically
    let mut period_cols: Vec<(usize, usize)> = headers
        .iter()
        .enumerate()
        .filter_map(|(idx, h)| period_number(h).map(|n| (n, idx)))
        .collect();
    if period_cols.is_empty() {
        return Err(LoadError::NoPeriodColumns);
    }
    period_cols.sort_unstable();

    let slot_labels: Vec<String> = period_cols.iter().map(|(n, _)| format!("p{n}")).collect();

    let mut entries = Vec::new();
    for record in csv.records() {
        let record = record?;
        let day = record.get(day_col).unwrap_or("").trim();
        let staff = record.get(staff_col).unwrap_or("").trim();
        if day.is_empty() || staff.is_empty() {
            continue;
        }
        let mut entry = ScheduleEntry::new(day, staff);
        for (n, idx) in &period_cols {
            entry = entry.with_slot(format!("p{n}"), record.get(*idx).unwrap_or(""));
        }
        entries.push(entry);
    }

    let mut plan = SlotPlan::new(slot_labels);
    if plan.position("p0").is_some() {
        plan = plan.with_zero_slot("p0");
    }
    debug!(rows = entries.len(), slots = plan.len(), "timetable loaded");

    Ok(LoadedTimetable {
        timetable: Timetable::new(entries),
        plan,
    })
}

/// Parses a period header like "p3" into its number.
fn period_number(header: &str) -> Option<usize> {
    let digits = header.strip_prefix('p')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
