use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_all_days, delete_day};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the given days. Either every date is removed or none is:
    /// an unknown date aborts the whole batch. Repeated dates count once.
    pub fn apply(pool: &mut DbPool, dates: &[NaiveDate]) -> AppResult<usize> {
        let unique: BTreeSet<NaiveDate> = dates.iter().copied().collect();

        pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            for d in &unique {
                if !delete_day(&tx, d)? {
                    return Err(AppError::NoDayForDate(d.format("%Y-%m-%d").to_string()));
                }
                ttlog(&tx, "del", &d.format("%Y-%m-%d").to_string(), "Day deleted")?;
            }

            tx.commit()?;
            Ok(unique.len())
        })
    }

    /// Delete every saved day.
    pub fn clear_all(pool: &mut DbPool) -> AppResult<usize> {
        let n = delete_all_days(&pool.conn)?;
        ttlog(&pool.conn, "del", "all", &format!("{n} day(s) deleted"))?;
        Ok(n)
    }
}
