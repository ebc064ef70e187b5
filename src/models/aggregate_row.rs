use serde::Serialize;
use std::fmt;

/// Why a day off is being suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reason {
    #[serde(rename = "too many days this week")]
    TooManyDaysThisWeek,
    #[serde(rename = "too many days in 14 days")]
    TooManyDays14d,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::TooManyDaysThisWeek => "too many days this week",
            Reason::TooManyDays14d => "too many days in 14 days",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-driver workload over the last-week, this-week and 14-day windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRow {
    pub driver_id: String,
    pub driver_name: String,
    pub days_last_week: u32,
    pub days_this_week: u32,
    #[serde(rename = "days14d")]
    pub days_14d: u32,
    pub suggest: bool,
    pub reasons: Vec<Reason>,
}

impl AggregateRow {
    pub fn new(driver_id: impl Into<String>, driver_name: impl Into<String>) -> Self {
        Self {
            driver_id: driver_id.into(),
            driver_name: driver_name.into(),
            days_last_week: 0,
            days_this_week: 0,
            days_14d: 0,
            suggest: false,
            reasons: Vec::new(),
        }
    }

    /// Reasons rendered as one delimited string (tables, CSV, XLSX).
    pub fn reasons_joined(&self, separator: &str) -> String {
        self.reasons
            .iter()
            .map(Reason::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
