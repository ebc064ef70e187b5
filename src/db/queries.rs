use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};

const SELECT_DAYS: &str =
    "SELECT date, am_scheduled, am_off, pm_scheduled, pm_off FROM days";

fn date_key(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn roster_column(row: &Row, col: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(col)?;
    serde_json::from_str(&raw).map_err(|e| conversion_error(col, AppError::Json(e)))
}

pub fn map_row(row: &Row) -> rusqlite::Result<DayRecord> {
    let date_str: String = row.get(0)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(date_str.clone())))?;

    Ok(DayRecord {
        date,
        am_scheduled: roster_column(row, 1)?,
        am_off: roster_column(row, 2)?,
        pm_scheduled: roster_column(row, 3)?,
        pm_off: roster_column(row, 4)?,
    })
}

/// Store a day, replacing whatever was saved for the same date.
pub fn upsert_day(conn: &Connection, day: &DayRecord, source: &str) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO days (date, am_scheduled, am_off, pm_scheduled, pm_off, source, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            day.date_str(),
            serde_json::to_string(&day.am_scheduled)?,
            serde_json::to_string(&day.am_off)?,
            serde_json::to_string(&day.pm_scheduled)?,
            serde_json::to_string(&day.pm_off)?,
            source,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn load_day(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Option<DayRecord>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("{SELECT_DAYS} WHERE date = ?1"))?;

    Ok(stmt.query_row([date_key(date)], map_row).optional()?)
}

/// Every saved day, oldest first.
pub fn load_all_days(pool: &mut DbPool) -> AppResult<Vec<DayRecord>> {
    let mut stmt = pool
        .conn
        .prepare(&format!("{SELECT_DAYS} ORDER BY date ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Saved days with `start <= date <= end`, oldest first.
pub fn load_days_between(
    pool: &mut DbPool,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<DayRecord>> {
    let mut stmt = pool.conn.prepare(&format!(
        "{SELECT_DAYS} WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC"
    ))?;

    let rows = stmt.query_map(params![date_key(start), date_key(end)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns true when a row was actually removed.
pub fn delete_day(conn: &Connection, date: &NaiveDate) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM days WHERE date = ?1", [date_key(date)])?;
    Ok(n > 0)
}

pub fn delete_all_days(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM days", [])?)
}

pub fn count_days(pool: &mut DbPool) -> AppResult<i64> {
    Ok(pool
        .conn
        .query_row("SELECT COUNT(*) FROM days", [], |row| row.get(0))?)
}
