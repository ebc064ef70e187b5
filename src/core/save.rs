use crate::core::presence::extract_presences;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_day, upsert_day};
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;

/// What a save did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Replaced,
}

pub struct SaveLogic;

impl SaveLogic {
    /// Store `day`, replacing any previous record for its date, and return
    /// the outcome with the number of scheduled drivers recognised.
    pub fn apply(pool: &mut DbPool, day: &DayRecord) -> AppResult<(SaveOutcome, usize)> {
        let existed = load_day(pool, &day.date)?.is_some();

        upsert_day(&pool.conn, day, "cli")?;

        let drivers = extract_presences(day).len();
        let outcome = if existed {
            SaveOutcome::Replaced
        } else {
            SaveOutcome::Created
        };

        let operation = match outcome {
            SaveOutcome::Created => "save",
            SaveOutcome::Replaced => "replace",
        };
        ttlog(
            &pool.conn,
            operation,
            &day.date_str(),
            &format!(
                "AM {} / PM {} scheduled lines, {} drivers recognised",
                day.am_scheduled.len(),
                day.pm_scheduled.len(),
                drivers
            ),
        )?;

        Ok((outcome, drivers))
    }
}
