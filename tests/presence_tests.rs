use chrono::NaiveDate;
use rshiftbalancer::core::presence::{extract_presences, presences_from_days};
use rshiftbalancer::models::day_record::DayRecord;
use rshiftbalancer::models::presence::DriverPresence;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn day(date: &str, am: &str, pm: &str) -> DayRecord {
    DayRecord::from_blocks(d(date), am, "", pm, "")
}

#[test]
fn test_single_am_line_yields_one_presence() {
    let out = extract_presences(&day("2024-06-03", "1234567 Ana Silva", ""));
    assert_eq!(
        out,
        vec![DriverPresence {
            driver_id: "1234567".into(),
            driver_name: "Ana Silva".into(),
            date: d("2024-06-03"),
            am_present: true,
            pm_present: false,
        }]
    );
}

#[test]
fn test_bracketed_line_same_as_plain() {
    let plain = extract_presences(&day("2024-06-03", "1234567 Ana Silva", ""));
    let bracketed = extract_presences(&day("2024-06-03", "[1234567 Ana Silva]", ""));
    assert_eq!(plain, bracketed);
}

#[test]
fn test_unparsable_line_excluded() {
    let out = extract_presences(&day("2024-06-03", "abcdef John\n1234567 Ana", ""));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].driver_id, "1234567");
}

#[test]
fn test_empty_blocks_yield_nothing() {
    assert!(extract_presences(&day("2024-06-03", "", "")).is_empty());
    assert!(extract_presences(&DayRecord::new(d("2024-06-03"))).is_empty());
}

#[test]
fn test_am_and_pm_merge_into_one_presence() {
    let out = extract_presences(&day(
        "2024-06-03",
        "1234567 Ana Silva\n7654321 Bruno",
        "1234567 Ana Silva\n5555555 Carla",
    ));

    let ids: Vec<&str> = out.iter().map(|p| p.driver_id.as_str()).collect();
    assert_eq!(ids, vec!["1234567", "7654321", "5555555"]);

    assert!(out[0].am_present && out[0].pm_present);
    assert!(out[1].am_present && !out[1].pm_present);
    assert!(!out[2].am_present && out[2].pm_present);
    assert_eq!(out[0].shifts_label(), "AM+PM");
}

#[test]
fn test_duplicate_lines_collapse() {
    let out = extract_presences(&day(
        "2024-06-03",
        "1234567 Ana\n1234567 Ana\n[1234567 Ana]",
        "1234567 Ana",
    ));
    assert_eq!(out.len(), 1);
}

#[test]
fn test_first_seen_name_wins() {
    let out = extract_presences(&day(
        "2024-06-03",
        "1234567 Ana Silva\n1234567 A. Silva",
        "1234567 Ana S.",
    ));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].driver_name, "Ana Silva");

    // PM-only driver: the PM line is the first seen
    let out = extract_presences(&day("2024-06-03", "", "7654321 Bruno\n7654321 Bruno C."));
    assert_eq!(out[0].driver_name, "Bruno");
}

#[test]
fn test_off_lists_never_count() {
    let record = DayRecord::from_blocks(
        d("2024-06-03"),
        "1234567 Ana",
        "7654321 Bruno",
        "",
        "5555555 Carla\n1234567 Ana",
    );
    let out = extract_presences(&record);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].driver_id, "1234567");
    assert!(out[0].am_present);
}

#[test]
fn test_presences_from_days_concatenates_in_order() {
    let days = vec![
        day("2024-06-04", "1234567 Ana", ""),
        day("2024-06-03", "7654321 Bruno", "1234567 Ana"),
    ];
    let out = presences_from_days(&days);

    let keys: Vec<(String, NaiveDate)> = out.iter().map(|p| (p.driver_id.clone(), p.date)).collect();
    assert_eq!(
        keys,
        vec![
            ("1234567".to_string(), d("2024-06-04")),
            ("7654321".to_string(), d("2024-06-03")),
            ("1234567".to_string(), d("2024-06-03")),
        ]
    );
}
