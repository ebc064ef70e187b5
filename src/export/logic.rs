// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_days, load_days_between};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{SummaryExport, SummaryReport};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use crate::utils::path::absolute_path;
use chrono::NaiveDate;
use std::path::Path;

/// What an export writes.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    /// The ranked summary for the week containing the reference date.
    Summary { reference: NaiveDate },
    /// Raw saved days, optionally limited to a `--range` expression.
    Days { range: Option<String> },
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export to `file` (must be absolute, `~` is expanded).
    ///
    /// Raw days are only written as JSON, which `import` reads back.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        target: &ExportTarget,
        force: bool,
    ) -> AppResult<()> {
        let path = absolute_path(file)?;

        if matches!(target, ExportTarget::Days { .. }) && format != ExportFormat::Json {
            return Err(AppError::InvalidExportFormat(format!(
                "{} (saved days can only be exported as json)",
                format.as_str()
            )));
        }

        ensure_writable(&path, force)?;

        let written = match target {
            ExportTarget::Summary { reference } => {
                export_summary(pool, cfg, format, &path, *reference)?
            }
            ExportTarget::Days { range } => export_days(pool, &path, range)?,
        };

        if written > 0 {
            ttlog(
                &pool.conn,
                "export",
                &path.to_string_lossy(),
                &format!("{} {} record(s)", format.as_str(), written),
            )?;
        }

        Ok(())
    }
}

fn export_summary(
    pool: &mut DbPool,
    cfg: &Config,
    format: ExportFormat,
    path: &Path,
    reference: NaiveDate,
) -> AppResult<usize> {
    let days = load_all_days(pool)?;
    let summary = Core::build_summary(&days, reference, &cfg.thresholds());

    if summary.rows.is_empty() {
        warning("No saved days. Nothing to export.");
        return Ok(0);
    }

    let flat: Vec<SummaryExport> = summary
        .rows
        .iter()
        .map(|r| SummaryExport::from_row(r, &cfg.reasons_separator))
        .collect();

    match format {
        ExportFormat::Csv => export_csv(&flat, path)?,
        ExportFormat::Xlsx => export_xlsx(&flat, path)?,
        ExportFormat::Json => {
            let report = SummaryReport::new(&summary, cfg.max_days_this_week, cfg.max_days_14d);
            export_json(&report, path)?
        }
    }

    Ok(summary.rows.len())
}

fn export_days(pool: &mut DbPool, path: &Path, range: &Option<String>) -> AppResult<usize> {
    let days = match range {
        None => load_all_days(pool)?,
        Some(r) if r.eq_ignore_ascii_case("all") => load_all_days(pool)?,
        Some(r) => {
            let (start, end) = parse_range(r)?;
            load_days_between(pool, &start, &end)?
        }
    };

    if days.is_empty() {
        warning("No saved days for the selected range. Nothing to export.");
        return Ok(0);
    }

    export_json(&days, path)?;
    Ok(days.len())
}
