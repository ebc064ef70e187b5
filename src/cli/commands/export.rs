use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportTarget;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date: date_opt,
        days,
        range,
        force,
    } = cmd
    {
        let target = if *days {
            ExportTarget::Days {
                range: range.clone(),
            }
        } else {
            ExportTarget::Summary {
                reference: date::reference_date(date_opt)?,
            }
        };

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, cfg, *format, file, &target, *force)?;
    }
    Ok(())
}
