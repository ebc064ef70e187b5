use crate::core::aggregate::{Thresholds, aggregate_days};
use crate::core::presence::presences_from_days;
use crate::core::window::SummaryWindows;
use crate::models::aggregate_row::AggregateRow;
use crate::models::day_record::DayRecord;
use crate::utils::date::week_start_monday;
use chrono::NaiveDate;

/// Ranked workload snapshot for one reference week.
#[derive(Debug, Clone)]
pub struct Summary {
    pub windows: SummaryWindows,
    pub rows: Vec<AggregateRow>,
}

impl Summary {
    pub fn suggested(&self) -> impl Iterator<Item = &AggregateRow> {
        self.rows.iter().filter(|r| r.suggest)
    }
}

pub struct Core;

impl Core {
    /// Rebuild the summary for the week containing `reference` from every
    /// saved day. Days must already be unique per date.
    pub fn build_summary(
        days: &[DayRecord],
        reference: NaiveDate,
        thresholds: &Thresholds,
    ) -> Summary {
        let week_start = week_start_monday(reference);
        let presences = presences_from_days(days);

        Summary {
            windows: SummaryWindows::new(week_start),
            rows: aggregate_days(&presences, week_start, thresholds),
        }
    }
}
