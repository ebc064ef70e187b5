mod common;
use common::{init_db, init_db_with_data, rsb, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_summary_csv() {
    let db_path = setup_test_db("export_summary_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_summary_csv", "csv");

    rsb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--date", "2024-06-05",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some("driverId,driverName,daysLastWeek,daysThisWeek,days14d,suggestDayOff,reasons")
    );
    assert_eq!(
        lines.next(),
        Some("1234567,Ana Silva,4,5,9,YES,too many days this week; too many days in 14 days")
    );
    assert_eq!(lines.next(), Some("7654321,Bruno Costa,0,3,3,NO,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_summary_json() {
    let db_path = setup_test_db("export_summary_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_summary_json", "json");

    rsb()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--date", "2024-06-05",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(v["windows"]["thisWeekStart"], "2024-06-03");
    assert_eq!(v["windows"]["lastWeekStart"], "2024-05-27");
    assert_eq!(v["maxDaysThisWeek"], 5);
    assert_eq!(v["maxDays14d"], 9);

    let ana = &v["rows"][0];
    assert_eq!(ana["driverId"], "1234567");
    assert_eq!(ana["days14d"], 9);
    assert_eq!(ana["suggest"], true);
    assert_eq!(ana["reasons"][0], "too many days this week");
    assert_eq!(ana["reasons"][1], "too many days in 14 days");

    assert_eq!(v["rows"][1]["suggest"], false);
}

#[test]
fn test_export_summary_xlsx() {
    let db_path = setup_test_db("export_summary_xlsx");
    init_db_with_data(&db_path);

    let out = temp_out("export_summary_xlsx", "xlsx");

    rsb()
        .args([
            "--db", &db_path, "export", "--format", "xlsx", "--file", &out, "--date", "2024-06-05",
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);

    // xlsx is a zip container
    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_days_json_range_and_import() {
    let db_path = setup_test_db("export_days_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_days_json", "json");

    rsb()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--days", "--range",
            "2024-06",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"amScheduled\""));
    assert!(content.contains("2024-06-03"));
    assert!(!content.contains("2024-05-27"));

    // the dump imports back into an empty database
    let other_db = setup_test_db("export_days_json_reimport");
    init_db(&other_db);

    rsb()
        .args(["--db", &other_db, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("5 day(s) imported"));

    rsb()
        .args(["--db", &other_db, "summary", "--date", "2024-06-05"])
        .assert()
        .success()
        .stdout(contains("too many days this week"));
}

#[test]
fn test_export_days_rejects_non_json() {
    let db_path = setup_test_db("export_days_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_days_csv", "csv");

    rsb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--days",
        ])
        .assert()
        .failure()
        .stderr(contains("Export format not supported"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_relative_path_fails() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rsb()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative_summary.csv",
        ])
        .assert()
        .failure();

    assert!(!std::path::Path::new("relative_summary.csv").exists());
}

#[test]
fn test_export_overwrite_requires_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "old content").unwrap();

    // declined prompt keeps the old file
    rsb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--date", "2024-06-05",
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "old content");

    // --force overwrites without asking
    rsb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--date", "2024-06-05",
            "--force",
        ])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("driverId,"));
}

#[test]
fn test_export_overwrite_confirmed() {
    let db_path = setup_test_db("export_overwrite_yes");
    init_db_with_data(&db_path);

    let out = temp_out("export_overwrite_yes", "json");
    fs::write(&out, "{}").unwrap();

    rsb()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--date", "2024-06-05",
        ])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().contains("\"rows\""));
}

#[test]
fn test_export_empty_db_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    rsb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}
