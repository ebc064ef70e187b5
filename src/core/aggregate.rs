//! Window aggregation and day-off scoring.

use crate::core::window::SummaryWindows;
use crate::models::aggregate_row::{AggregateRow, Reason};
use crate::models::presence::DriverPresence;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Days worked in the current week at which a day off is suggested.
pub const MAX_DAYS_THIS_WEEK: u32 = 5;

/// Days worked in the 14-day window at which a day off is suggested.
pub const MAX_DAYS_14D: u32 = 9;

/// Suggestion thresholds; a reason fires when a count is `>=` its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub max_days_this_week: u32,
    pub max_days_14d: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_days_this_week: MAX_DAYS_THIS_WEEK,
            max_days_14d: MAX_DAYS_14D,
        }
    }
}

impl Thresholds {
    /// Reasons fired by a row's counters, this-week check first.
    pub fn reasons_for(&self, row: &AggregateRow) -> Vec<Reason> {
        let mut reasons = Vec::new();
        if row.days_this_week >= self.max_days_this_week {
            reasons.push(Reason::TooManyDaysThisWeek);
        }
        if row.days_14d >= self.max_days_14d {
            reasons.push(Reason::TooManyDays14d);
        }
        reasons
    }
}

/// Count, per driver, the distinct days present in each window around
/// `week_start`, flag overloaded drivers and rank the result.
///
/// A driver present AM and PM on the same date (or listed several times)
/// counts once for that date. Every driver seen in `presences` gets a row,
/// even when none of their dates fall inside a window.
pub fn aggregate_days(
    presences: &[DriverPresence],
    week_start: NaiveDate,
    thresholds: &Thresholds,
) -> Vec<AggregateRow> {
    let windows = SummaryWindows::new(week_start);

    let mut seen: HashSet<(&str, NaiveDate)> = HashSet::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<AggregateRow> = Vec::new();

    for p in presences {
        if !seen.insert((p.driver_id.as_str(), p.date)) {
            continue;
        }

        let i = *index.entry(p.driver_id.as_str()).or_insert_with(|| {
            rows.push(AggregateRow::new(&p.driver_id, &p.driver_name));
            rows.len() - 1
        });
        let row = &mut rows[i];

        if windows.in_fourteen_days(p.date) {
            row.days_14d += 1;
        }
        if windows.in_this_week(p.date) {
            row.days_this_week += 1;
        } else if windows.in_last_week(p.date) {
            row.days_last_week += 1;
        }
    }

    for row in &mut rows {
        row.reasons = thresholds.reasons_for(row);
        row.suggest = !row.reasons.is_empty();
    }

    rows.sort_by(rank);
    rows
}

/// Suggested rows first, then busiest this week, then busiest over 14 days.
fn rank(a: &AggregateRow, b: &AggregateRow) -> Ordering {
    b.suggest
        .cmp(&a.suggest)
        .then_with(|| b.days_this_week.cmp(&a.days_this_week))
        .then_with(|| b.days_14d.cmp(&a.days_14d))
}
