use crate::core::roster::normalize_block;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four rosters submitted for one calendar date.
///
/// One record per date: saving the same date again replaces the previous
/// record as a whole. Field names serialise in camelCase so JSON dumps
/// stay compatible with roster files produced by the web front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate, // ⇔ days.date (TEXT "YYYY-MM-DD")
    #[serde(default)]
    pub am_scheduled: Vec<String>,
    #[serde(default)]
    pub am_off: Vec<String>,
    #[serde(default)]
    pub pm_scheduled: Vec<String>,
    #[serde(default)]
    pub pm_off: Vec<String>,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            am_scheduled: Vec::new(),
            am_off: Vec::new(),
            pm_scheduled: Vec::new(),
            pm_off: Vec::new(),
        }
    }

    /// Build a record from four pasted text blocks, normalising each one.
    pub fn from_blocks(date: NaiveDate, am: &str, am_off: &str, pm: &str, pm_off: &str) -> Self {
        Self {
            date,
            am_scheduled: normalize_block(am),
            am_off: normalize_block(am_off),
            pm_scheduled: normalize_block(pm),
            pm_off: normalize_block(pm_off),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Trim every line of every roster and drop the blank ones.
    /// Used for records that arrive already split into lines (imports).
    pub fn tidy(mut self) -> Self {
        for lines in [
            &mut self.am_scheduled,
            &mut self.am_off,
            &mut self.pm_scheduled,
            &mut self.pm_off,
        ] {
            let cleaned = lines
                .iter()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect();
            *lines = cleaned;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.am_scheduled.is_empty()
            && self.am_off.is_empty()
            && self.pm_scheduled.is_empty()
            && self.pm_off.is_empty()
    }
}
