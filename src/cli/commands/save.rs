use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::roster::parse_driver_line;
use crate::core::save::{SaveLogic, SaveOutcome};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use std::fs;

/// Roster text from either the inline flag or the file flag (clap makes
/// them mutually exclusive). Missing → empty roster.
fn block(text: &Option<String>, file: &Option<String>) -> AppResult<String> {
    match (text, file) {
        (Some(t), _) => Ok(t.clone()),
        (None, Some(f)) => {
            let path = expand_tilde(f);
            fs::read_to_string(&path).map_err(|e| {
                AppError::from(std::io::Error::new(
                    e.kind(),
                    format!("cannot read roster file {}: {}", path.display(), e),
                ))
            })
        }
        (None, None) => Ok(String::new()),
    }
}

/// Scheduled lines the parser could not read as a driver.
fn skipped_lines(day: &DayRecord) -> usize {
    day.am_scheduled
        .iter()
        .chain(&day.pm_scheduled)
        .filter(|l| parse_driver_line(l).is_none())
        .count()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save {
        date: date_str,
        am,
        am_file,
        am_off,
        am_off_file,
        pm,
        pm_file,
        pm_off,
        pm_off_file,
    } = cmd
    {
        let d = date::require_date(date_str)?;

        let day = DayRecord::from_blocks(
            d,
            &block(am, am_file)?,
            &block(am_off, am_off_file)?,
            &block(pm, pm_file)?,
            &block(pm_off, pm_off_file)?,
        );

        if day.is_empty() {
            warning(format!("All rosters for {} are empty.", d));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let (outcome, drivers) = SaveLogic::apply(&mut pool, &day)?;

        match outcome {
            SaveOutcome::Created => success(format!("Day {} saved ({} drivers).", d, drivers)),
            SaveOutcome::Replaced => {
                success(format!("Day {} replaced ({} drivers).", d, drivers))
            }
        }

        let scheduled_lines = day.am_scheduled.len() + day.pm_scheduled.len();
        let skipped = skipped_lines(&day);
        if scheduled_lines > 0 && skipped == scheduled_lines {
            warning("No scheduled line matched '<6-8 digit id> <name>'.");
        } else if skipped > 0 {
            warning(format!(
                "{} of {} scheduled line(s) ignored (expected '<6-8 digit id> <name>').",
                skipped, scheduled_lines
            ));
        }
    }

    Ok(())
}
