use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_day;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Parse a JSON array of day records (camelCase keys, as written by
    /// `export --days`). When a date repeats, the last record wins.
    pub fn parse(content: &str) -> AppResult<Vec<DayRecord>> {
        let records: Vec<DayRecord> =
            serde_json::from_str(content).map_err(|e| AppError::Import(e.to_string()))?;

        let mut by_date: BTreeMap<_, DayRecord> = BTreeMap::new();
        for r in records {
            by_date.insert(r.date, r.tidy());
        }
        Ok(by_date.into_values().collect())
    }

    /// Import every day found in `path`, replacing saved days with the same
    /// date. Returns how many days were written.
    pub fn import(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Import(format!("{}: {}", path.display(), e)))?;
        let days = Self::parse(&content)?;

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            for day in &days {
                upsert_day(&tx, day, "import")?;
            }
            ttlog(
                &tx,
                "import",
                &path.to_string_lossy(),
                &format!("{} day(s) imported", days.len()),
            )?;
            tx.commit()?;
            Ok(days.len())
        })
    }
}
