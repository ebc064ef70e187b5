use chrono::{Days, NaiveDate};
use rshiftbalancer::core::aggregate::{MAX_DAYS_14D, MAX_DAYS_THIS_WEEK, Thresholds, aggregate_days};
use rshiftbalancer::core::logic::Core;
use rshiftbalancer::core::presence::presences_from_days;
use rshiftbalancer::core::window::SummaryWindows;
use rshiftbalancer::models::aggregate_row::{AggregateRow, Reason};
use rshiftbalancer::models::day_record::DayRecord;
use rshiftbalancer::models::presence::DriverPresence;
use rshiftbalancer::utils::date::week_start_monday;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn week_start() -> NaiveDate {
    d("2024-06-03")
}

fn presence(id: &str, date: &str) -> DriverPresence {
    DriverPresence {
        driver_id: id.to_string(),
        driver_name: format!("Driver {id}"),
        date: d(date),
        am_present: true,
        pm_present: false,
    }
}

fn row<'a>(rows: &'a [AggregateRow], id: &str) -> &'a AggregateRow {
    rows.iter().find(|r| r.driver_id == id).unwrap()
}

/// `n` consecutive days starting at `from`.
fn run_of_days(id: &str, from: &str, n: u64) -> Vec<DriverPresence> {
    (0..n)
        .map(|i| {
            let date = d(from) + Days::new(i);
            presence(id, &date.format("%Y-%m-%d").to_string())
        })
        .collect()
}

#[test]
fn test_thresholds_defaults() {
    assert_eq!(MAX_DAYS_THIS_WEEK, 5);
    assert_eq!(MAX_DAYS_14D, 9);
    let t = Thresholds::default();
    assert_eq!(t.max_days_this_week, 5);
    assert_eq!(t.max_days_14d, 9);
}

#[test]
fn test_week_start_monday() {
    assert_eq!(week_start_monday(d("2024-06-03")), d("2024-06-03"));
    assert_eq!(week_start_monday(d("2024-06-05")), d("2024-06-03"));
    // Sunday belongs to the week that started six days before
    assert_eq!(week_start_monday(d("2024-06-09")), d("2024-06-03"));
    assert_eq!(week_start_monday(d("2024-06-10")), d("2024-06-10"));
    // across a month / year boundary
    assert_eq!(week_start_monday(d("2025-01-01")), d("2024-12-30"));
}

#[test]
fn test_windows_bounds() {
    let w = SummaryWindows::new(week_start());
    assert_eq!(w.last_week_start, d("2024-05-27"));
    assert_eq!(w.last_week_end(), d("2024-06-02"));
    assert_eq!(w.this_week_end(), d("2024-06-09"));
    assert_eq!(w.next_week_start, d("2024-06-10"));

    assert!(w.in_fourteen_days(d("2024-05-27")));
    assert!(w.in_fourteen_days(d("2024-06-09")));
    assert!(!w.in_fourteen_days(d("2024-05-26")));
    assert!(!w.in_fourteen_days(d("2024-06-10")));
}

#[test]
fn test_window_partition() {
    let w = SummaryWindows::new(week_start());
    let mut date = d("2024-05-13");

    while date < d("2024-06-24") {
        let tw = w.in_this_week(date);
        let lw = w.in_last_week(date);
        assert!(!(tw && lw), "{date} in both weeks");
        assert_eq!(tw || lw, w.in_fourteen_days(date), "{date}");
        date = date + Days::new(1);
    }
}

#[test]
fn test_five_days_this_week_suggests() {
    let rows = aggregate_days(
        &run_of_days("1234567", "2024-06-03", 5),
        week_start(),
        &Thresholds::default(),
    );

    let r = row(&rows, "1234567");
    assert_eq!(r.days_this_week, 5);
    assert_eq!(r.days_last_week, 0);
    assert_eq!(r.days_14d, 5);
    assert!(r.suggest);
    assert_eq!(r.reasons, vec![Reason::TooManyDaysThisWeek]);
    assert_eq!(r.reasons_joined("; "), "too many days this week");
}

#[test]
fn test_both_reasons_in_fixed_order() {
    let mut ps = run_of_days("1234567", "2024-06-03", 5);
    ps.extend(run_of_days("1234567", "2024-05-27", 4));

    let rows = aggregate_days(&ps, week_start(), &Thresholds::default());
    let r = row(&rows, "1234567");

    assert_eq!(r.days_last_week, 4);
    assert_eq!(r.days_this_week, 5);
    assert_eq!(r.days_14d, 9);
    assert_eq!(
        r.reasons,
        vec![Reason::TooManyDaysThisWeek, Reason::TooManyDays14d]
    );
    assert_eq!(
        r.reasons_joined("; "),
        "too many days this week; too many days in 14 days"
    );
}

#[test]
fn test_fourteen_day_reason_alone() {
    // 5 days last week + 4 this week: only the 14-day limit is hit
    let mut ps = run_of_days("1234567", "2024-05-27", 5);
    ps.extend(run_of_days("1234567", "2024-06-03", 4));

    let rows = aggregate_days(&ps, week_start(), &Thresholds::default());
    assert_eq!(rows[0].reasons, vec![Reason::TooManyDays14d]);
}

#[test]
fn test_duplicates_count_once_per_date() {
    let mut ps = Vec::new();
    for _ in 0..3 {
        ps.push(presence("1234567", "2024-06-03"));
    }
    // same day through the PM roster
    ps.push(DriverPresence {
        am_present: false,
        pm_present: true,
        ..presence("1234567", "2024-06-03")
    });
    ps.push(presence("1234567", "2024-05-28"));

    let rows = aggregate_days(&ps, week_start(), &Thresholds::default());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].days_this_week, 1);
    assert_eq!(rows[0].days_last_week, 1);
    assert_eq!(rows[0].days_14d, 2);
}

#[test]
fn test_am_and_pm_lines_for_same_driver_count_one_day() {
    let days = vec![DayRecord::from_blocks(
        d("2024-06-04"),
        "1234567 Ana\n1234567 Ana",
        "",
        "[1234567 Ana]",
        "",
    )];
    let summary = Core::build_summary(&days, d("2024-06-06"), &Thresholds::default());
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].days_this_week, 1);
    assert_eq!(summary.rows[0].days_14d, 1);
}

#[test]
fn test_driver_outside_windows_still_listed() {
    let ps = vec![presence("1234567", "2024-04-01"), presence("7654321", "2024-06-12")];
    let rows = aggregate_days(&ps, week_start(), &Thresholds::default());

    assert_eq!(rows.len(), 2);
    for r in &rows {
        assert_eq!((r.days_last_week, r.days_this_week, r.days_14d), (0, 0, 0));
        assert!(!r.suggest);
        assert!(r.reasons.is_empty());
    }
}

#[test]
fn test_no_presences_no_rows() {
    assert!(aggregate_days(&[], week_start(), &Thresholds::default()).is_empty());
}

#[test]
fn test_threshold_monotonicity() {
    let t = Thresholds::default();
    let mut had_week = false;
    let mut had_14d = false;

    // grow presences day by day across both weeks
    for n in 1..=14 {
        let ps = run_of_days("1234567", "2024-05-27", n);
        let rows = aggregate_days(&ps, week_start(), &t);
        let r = &rows[0];

        let has_week = r.reasons.contains(&Reason::TooManyDaysThisWeek);
        let has_14d = r.reasons.contains(&Reason::TooManyDays14d);

        assert_eq!(has_week, r.days_this_week >= t.max_days_this_week);
        assert_eq!(has_14d, r.days_14d >= t.max_days_14d);
        assert!(!had_week || has_week, "week reason lost at n={n}");
        assert!(!had_14d || has_14d, "14d reason lost at n={n}");

        had_week = has_week;
        had_14d = has_14d;
    }
    assert!(had_week && had_14d);
}

#[test]
fn test_custom_thresholds() {
    let t = Thresholds {
        max_days_this_week: 2,
        max_days_14d: 3,
    };
    let rows = aggregate_days(&run_of_days("1234567", "2024-06-03", 2), week_start(), &t);
    assert_eq!(rows[0].reasons, vec![Reason::TooManyDaysThisWeek]);
}

#[test]
fn test_sort_order() {
    let mut ps = Vec::new();
    ps.extend(run_of_days("1000001", "2024-06-03", 2)); // ok, tw 2
    ps.extend(run_of_days("1000002", "2024-06-03", 5)); // suggest, tw 5
    ps.extend(run_of_days("1000003", "2024-06-03", 4)); // ok, tw 4
    ps.extend(run_of_days("1000004", "2024-05-27", 5)); // ok, lw 5
    ps.extend(run_of_days("1000004", "2024-06-03", 4)); // + tw 4 → 14d 9, suggest
    ps.extend(run_of_days("1000005", "2024-05-27", 3)); // ok, lw 3
    ps.extend(run_of_days("1000005", "2024-06-03", 2)); // + tw 2 → 14d 5

    let rows = aggregate_days(&ps, week_start(), &Thresholds::default());
    let ids: Vec<&str> = rows.iter().map(|r| r.driver_id.as_str()).collect();

    assert_eq!(
        ids,
        vec!["1000002", "1000004", "1000003", "1000005", "1000001"]
    );

    let first_ok = rows.iter().position(|r| !r.suggest).unwrap();
    assert!(rows[..first_ok].iter().all(|r| r.suggest));
    assert!(rows[first_ok..].iter().all(|r| !r.suggest));

    for pair in rows.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if a.suggest == b.suggest {
            assert!(
                a.days_this_week > b.days_this_week
                    || (a.days_this_week == b.days_this_week && a.days_14d >= b.days_14d)
            );
        }
    }
}

#[test]
fn test_exact_ties_keep_input_order() {
    let mut ps = Vec::new();
    ps.extend(run_of_days("3000003", "2024-06-03", 2));
    ps.extend(run_of_days("1000001", "2024-06-03", 2));
    ps.extend(run_of_days("2000002", "2024-06-03", 2));

    let rows = aggregate_days(&ps, week_start(), &Thresholds::default());
    let ids: Vec<&str> = rows.iter().map(|r| r.driver_id.as_str()).collect();
    assert_eq!(ids, vec!["3000003", "1000001", "2000002"]);
}

#[test]
fn test_build_summary_from_days() {
    let mut days = Vec::new();
    for date in ["2024-06-03", "2024-06-04", "2024-06-05", "2024-06-06", "2024-06-07"] {
        days.push(DayRecord::from_blocks(
            d(date),
            "1234567 Ana Silva\nabcdef John",
            "",
            "7654321 Bruno",
            "",
        ));
    }

    // any day of the week gives the same windows
    let summary = Core::build_summary(&days, d("2024-06-09"), &Thresholds::default());
    assert_eq!(summary.windows, SummaryWindows::new(week_start()));
    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.suggested().count(), 2);
    assert_eq!(summary.rows[0].driver_id, "1234567");
    assert_eq!(summary.rows[0].driver_name, "Ana Silva");

    // a week later the same days are "last week"
    let later = Core::build_summary(&days, d("2024-06-10"), &Thresholds::default());
    assert_eq!(later.rows[0].days_last_week, 5);
    assert_eq!(later.rows[0].days_this_week, 0);
    assert_eq!(later.suggested().count(), 0);

    // presences are recomputed, not cached
    assert_eq!(presences_from_days(&days).len(), 10);
}
