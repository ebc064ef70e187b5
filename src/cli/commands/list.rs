use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::presence::extract_presences;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_days, load_days_between};
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date::parse_range;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, details } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let days = match period {
            Some(p) if !p.eq_ignore_ascii_case("all") => {
                let (start, end) = parse_range(p)?;
                load_days_between(&mut pool, &start, &end)?
            }
            _ => load_all_days(&mut pool)?,
        };

        if days.is_empty() {
            info("No saved days for the selected period.");
            return Ok(());
        }

        let rule = cfg.separator_char.chars().next().unwrap_or('-');

        if *details {
            for day in &days {
                print_details(day, rule);
            }
        } else {
            print_days(&days, rule);
        }
    }
    Ok(())
}

fn print_days(days: &[DayRecord], rule: char) {
    let mut table = Table::new(
        vec![
            Column::left("Date"),
            Column::left("Day"),
            Column::right("AM"),
            Column::right("AM off"),
            Column::right("PM"),
            Column::right("PM off"),
            Column::right("Drivers"),
        ],
        rule,
    );

    for d in days {
        let presences = extract_presences(d);
        let am = presences.iter().filter(|p| p.am_present).count();
        let pm = presences.iter().filter(|p| p.pm_present).count();

        table.add_row(vec![
            d.date_str(),
            d.date.weekday().to_string(),
            am.to_string(),
            d.am_off.len().to_string(),
            pm.to_string(),
            d.pm_off.len().to_string(),
            presences.len().to_string(),
        ]);
    }

    print!("{}", table.render());
    println!("\n{} day(s)", days.len());
}

fn print_details(day: &DayRecord, rule: char) {
    println!("\n=== {} ({}) ===", day.date_str(), day.date.weekday());

    let presences = extract_presences(day);
    if presences.is_empty() {
        println!("{GREY}No scheduled drivers.{RESET}");
        return;
    }

    let mut table = Table::new(
        vec![
            Column::left("ID"),
            Column::left("Driver"),
            Column::left("Shift"),
        ],
        rule,
    );

    for p in &presences {
        table.add_row(vec![
            p.driver_id.clone(),
            p.driver_name.clone(),
            p.shifts_label().to_string(),
        ]);
    }

    print!("{}", table.render());
}
