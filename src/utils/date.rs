use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Like [`parse_date`], with the offending text in the error.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Monday of the week containing `d` (Sunday belongs to the week before it).
pub fn week_start_monday(d: NaiveDate) -> NaiveDate {
    d - Days::new(u64::from(d.weekday().num_days_from_monday()))
}

/// Resolve a reference date option, defaulting to today.
pub fn reference_date(opt: &Option<String>) -> AppResult<NaiveDate> {
    match opt {
        Some(s) => require_date(s),
        None => Ok(today()),
    }
}

/// First and last day covered by one period token: `YYYY`, `YYYY-MM` or
/// `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let last = (first + Months::new(1)) - Days::new(1);
            Ok((first, last))
        }
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

/// Parse a `--period` / `--range` expression into inclusive bounds.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or two of the same shape joined
/// by `:` (e.g. `2024-05:2024-06`).
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let (start, end) = (start_raw.trim(), end_raw.trim());
            if start.len() != end.len() {
                return Err(AppError::InvalidRange(format!(
                    "{r}: start and end must have the same format"
                )));
            }

            let (first, _) = period_bounds(start)?;
            let (_, last) = period_bounds(end)?;
            if first > last {
                return Err(AppError::InvalidRange(format!("{r}: start is after end")));
            }
            Ok((first, last))
        }
        None => period_bounds(r),
    }
}
