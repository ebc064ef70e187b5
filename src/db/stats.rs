use crate::core::presence::presences_from_days;
use crate::db::pool::DbPool;
use crate::db::queries::{count_days, load_all_days};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::collections::HashSet;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) SAVED DAYS
    //
    let count = count_days(pool)?;
    println!("{}• Saved days:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) DATE RANGE + DRIVERS
    //
    let days = load_all_days(pool)?;

    let fmt_first = days
        .first()
        .map(|d| d.date_str())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = days
        .last()
        .map(|d| d.date_str())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    let presences = presences_from_days(&days);
    let drivers: HashSet<&str> = presences.iter().map(|p| p.driver_id.as_str()).collect();

    println!(
        "{}• Distinct drivers:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        drivers.len(),
        RESET
    );

    if count > 0 {
        let avg = presences.len() as f64 / count as f64;
        println!("{}• Average drivers/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
