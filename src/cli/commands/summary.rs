use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_days;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date: date_opt } = cmd {
        let reference = date::reference_date(date_opt)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let days = load_all_days(&mut pool)?;

        let summary = Core::build_summary(&days, reference, &cfg.thresholds());
        SummaryLogic::print(&summary, cfg);
    }

    Ok(())
}
