use crate::core::roster::parse_driver_line;
use crate::models::day_record::DayRecord;
use crate::models::presence::DriverPresence;
use std::collections::{HashMap, HashSet};

/// Turn one day's scheduled rosters into presence flags per driver.
///
/// Only `am_scheduled` and `pm_scheduled` are read: a driver missing from
/// the scheduled lists is not present, whatever the off lists say.
/// Output follows first-seen order (AM lines before PM lines), and the
/// first name seen for an id is the one reported.
pub fn extract_presences(day: &DayRecord) -> Vec<DriverPresence> {
    let mut am: HashSet<String> = HashSet::new();
    let mut pm: HashSet<String> = HashSet::new();
    let mut names: HashMap<String, String> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    let shifts = [(&day.am_scheduled, &mut am), (&day.pm_scheduled, &mut pm)];

    for (lines, set) in shifts {
        for line in lines {
            let Some(driver) = parse_driver_line(line) else {
                continue;
            };

            if !names.contains_key(&driver.id) {
                order.push(driver.id.clone());
                names.insert(driver.id.clone(), driver.name);
            }
            set.insert(driver.id);
        }
    }

    order
        .into_iter()
        .map(|id| DriverPresence {
            driver_name: names.get(&id).cloned().unwrap_or_else(|| id.clone()),
            date: day.date,
            am_present: am.contains(&id),
            pm_present: pm.contains(&id),
            driver_id: id,
        })
        .collect()
}

/// Presences of every day, concatenated in input order.
pub fn presences_from_days(days: &[DayRecord]) -> Vec<DriverPresence> {
    days.iter().flat_map(extract_presences).collect()
}
