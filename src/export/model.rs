// src/export/model.rs

use crate::core::logic::Summary;
use crate::core::window::SummaryWindows;
use crate::models::aggregate_row::AggregateRow;
use serde::Serialize;

/// Flat summary row for CSV / XLSX. Field order is the column order.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "daysLastWeek")]
    pub days_last_week: u32,
    #[serde(rename = "daysThisWeek")]
    pub days_this_week: u32,
    #[serde(rename = "days14d")]
    pub days_14d: u32,
    #[serde(rename = "suggestDayOff")]
    pub suggest_day_off: String,
    pub reasons: String,
}

impl SummaryExport {
    pub fn from_row(r: &AggregateRow, separator: &str) -> Self {
        Self {
            driver_id: r.driver_id.clone(),
            driver_name: r.driver_name.clone(),
            days_last_week: r.days_last_week,
            days_this_week: r.days_this_week,
            days_14d: r.days_14d,
            suggest_day_off: if r.suggest { "YES" } else { "NO" }.to_string(),
            reasons: r.reasons_joined(separator),
        }
    }

    pub fn is_suggested(&self) -> bool {
        self.suggest_day_off == "YES"
    }
}

/// Structured summary for JSON: windows plus rows with reasons as arrays.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport<'a> {
    pub windows: SummaryWindows,
    pub max_days_this_week: u32,
    pub max_days_14d: u32,
    pub rows: &'a [AggregateRow],
}

impl<'a> SummaryReport<'a> {
    pub fn new(summary: &'a Summary, max_days_this_week: u32, max_days_14d: u32) -> Self {
        Self {
            windows: summary.windows,
            max_days_this_week,
            max_days_14d,
            rows: &summary.rows,
        }
    }
}

/// Column headers for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "driverId",
        "driverName",
        "daysLastWeek",
        "daysThisWeek",
        "days14d",
        "suggestDayOff",
        "reasons",
    ]
}

/// One export row as display strings, in header order.
pub(crate) fn row_to_cells(r: &SummaryExport) -> Vec<String> {
    vec![
        r.driver_id.clone(),
        r.driver_name.clone(),
        r.days_last_week.to_string(),
        r.days_this_week.to_string(),
        r.days_14d.to_string(),
        r.suggest_day_off.clone(),
        r.reasons.clone(),
    ]
}
