use chrono::NaiveDate;
use serde::Serialize;

/// A driver listed in the AM and/or PM scheduled roster of one day.
///
/// Derived from a [`DayRecord`](super::day_record::DayRecord) every time a
/// summary is built; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPresence {
    pub driver_id: String,
    pub driver_name: String,
    pub date: NaiveDate,
    pub am_present: bool,
    pub pm_present: bool,
}

impl DriverPresence {
    /// Short label for terminal output: `AM`, `PM` or `AM+PM`.
    pub fn shifts_label(&self) -> &'static str {
        match (self.am_present, self.pm_present) {
            (true, true) => "AM+PM",
            (true, false) => "AM",
            (false, true) => "PM",
            (false, false) => "-",
        }
    }
}
