use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { dates, all, yes } = cmd {
        let parsed = dates
            .iter()
            .map(|s| date::require_date(s))
            .collect::<AppResult<Vec<_>>>()?;

        let prompt = if *all {
            "Delete ALL saved days? This action is irreversible.".to_string()
        } else {
            let list = parsed
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("Delete {} day(s): {}? This action is irreversible.", parsed.len(), list)
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if *all {
            let n = DeleteLogic::clear_all(&mut pool)?;
            success(format!("{} day(s) deleted.", n));
        } else {
            let n = DeleteLogic::apply(&mut pool, &parsed)?;
            success(format!("{} day(s) deleted.", n));
        }
    }

    Ok(())
}
