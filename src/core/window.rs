use chrono::{Days, NaiveDate};
use serde::Serialize;

/// The three half-open date windows a summary counts presences in.
///
/// ```text
/// last_week_start      this_week_start      next_week_start
///        |---- last week ----|---- this week ----|
///        |-------------- 14 days ----------------|
/// ```
///
/// The 14-day window is exactly last week plus this week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryWindows {
    pub last_week_start: NaiveDate,
    pub this_week_start: NaiveDate,
    pub next_week_start: NaiveDate,
}

impl SummaryWindows {
    /// `week_start` is expected to be a Monday; it is not checked.
    pub fn new(week_start: NaiveDate) -> Self {
        Self {
            last_week_start: week_start - Days::new(7),
            this_week_start: week_start,
            next_week_start: week_start + Days::new(7),
        }
    }

    pub fn in_this_week(&self, d: NaiveDate) -> bool {
        d >= self.this_week_start && d < self.next_week_start
    }

    pub fn in_last_week(&self, d: NaiveDate) -> bool {
        d >= self.last_week_start && d < self.this_week_start
    }

    pub fn in_fourteen_days(&self, d: NaiveDate) -> bool {
        d >= self.last_week_start && d < self.next_week_start
    }

    /// Last day of last week (Sunday), inclusive.
    pub fn last_week_end(&self) -> NaiveDate {
        self.this_week_start - Days::new(1)
    }

    /// Last day of this week (Sunday), inclusive.
    pub fn this_week_end(&self) -> NaiveDate {
        self.next_week_start - Days::new(1)
    }
}
