use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn rw_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rw").expect("Failed to find rw binary");
    cmd.arg("--no-color");
    cmd
}

/// Command bound to a database inside `temp_dir`
fn rw_with_db(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = rw_cmd();
    cmd.args(["--database-file", db_path.to_str().unwrap()]);
    cmd
}

const BOOKING: &[&str] = &[
    "reservation",
    "create",
    "--vehicle-id",
    "suv-7",
    "--daily-rate",
    "120",
    "--pickup-date",
    "2024-06-01",
    "--pickup-time",
    "10:00",
    "--return-date",
    "2024-06-04",
    "--return-time",
    "10:00",
    "--insurance",
    "standard",
    "--add-on",
    "gps-unit",
    "--first-name",
    "Ada",
    "--last-name",
    "Lovelace",
    "--email",
    "ada@example.com",
    "--phone",
    "555-0100",
];

#[test]
fn test_cli_quote() {
    let temp_dir = create_cli_test_environment();

    rw_with_db(&temp_dir)
        .args([
            "quote",
            "--daily-rate",
            "120",
            "--pickup-date",
            "2024-06-01",
            "--return-date",
            "2024-06-04",
            "--insurance",
            "standard",
            "--add-on",
            "gps",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Vehicle: 3 days x 120.00 = 360.00"))
        .stdout(predicate::str::contains("- **Subtotal**: 450.00"))
        .stdout(predicate::str::contains("- **Total**: 531.00"));
}

#[test]
fn test_cli_quote_rejects_return_before_pickup() {
    let temp_dir = create_cli_test_environment();

    rw_with_db(&temp_dir)
        .args([
            "quote",
            "--daily-rate",
            "50",
            "--pickup-date",
            "2024-06-04",
            "--return-date",
            "2024-06-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("return_date"));
}

#[test]
fn test_cli_quote_with_pricing_file() {
    let temp_dir = create_cli_test_environment();
    let pricing_path = temp_dir.path().join("pricing.json");
    std::fs::write(&pricing_path, r#"{"tax_rate": 0.0}"#).unwrap();

    rw_with_db(&temp_dir)
        .args([
            "--pricing-file",
            pricing_path.to_str().unwrap(),
            "quote",
            "--daily-rate",
            "100",
            "--pickup-date",
            "2024-06-01",
            "--return-date",
            "2024-06-02",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Total**: 115.00"));
}

#[test]
fn test_cli_create_reservation_success() {
    let temp_dir = create_cli_test_environment();

    rw_with_db(&temp_dir)
        .args(BOOKING)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created reservation with ID: 1"))
        .stdout(predicate::str::contains("Ada Lovelace <ada@example.com>"))
        .stdout(predicate::str::contains("Pending"))
        .stdout(predicate::str::contains("- **Total**: 531.00"));
}

#[test]
fn test_cli_create_reservation_reports_incomplete_step() {
    let temp_dir = create_cli_test_environment();

    rw_with_db(&temp_dir)
        .args([
            "reservation",
            "create",
            "--vehicle-id",
            "suv-7",
            "--daily-rate",
            "120",
            "--pickup-date",
            "2024-06-01",
            "--return-date",
            "2024-06-04",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pickup_time"))
        .stderr(predicate::str::contains("return_time"));

    rw_with_db(&temp_dir)
        .args(["reservation", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reservations found."));
}

#[test]
fn test_cli_list_empty_reservations() {
    let temp_dir = create_cli_test_environment();

    rw_with_db(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No reservations found."));
}

#[test]
fn test_cli_show_reservation() {
    let temp_dir = create_cli_test_environment();
    rw_with_db(&temp_dir).args(BOOKING).assert().success();

    rw_with_db(&temp_dir)
        .args(["reservation", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Reservation 1"))
        .stdout(predicate::str::contains("- Progress: 0%"))
        .stdout(predicate::str::contains("## Price"));
}

#[test]
fn test_cli_show_missing_reservation() {
    let temp_dir = create_cli_test_environment();

    rw_with_db(&temp_dir)
        .args(["reservation", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Reservation with ID 42 not found"));
}

#[test]
fn test_cli_status_transitions() {
    let temp_dir = create_cli_test_environment();
    rw_with_db(&temp_dir).args(BOOKING).assert().success();

    rw_with_db(&temp_dir)
        .args(["reservation", "status", "1", "confirmed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status set to confirmed"));

    rw_with_db(&temp_dir)
        .args(["reservation", "status", "1", "in-transit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status set to in_transit"));

    rw_with_db(&temp_dir)
        .args(["reservation", "list", "--status", "in-transit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. Ada Lovelace"));
}

#[test]
fn test_cli_invalid_transition() {
    let temp_dir = create_cli_test_environment();
    rw_with_db(&temp_dir).args(BOOKING).assert().success();

    rw_with_db(&temp_dir)
        .args(["reservation", "status", "1", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot move from 'pending' to 'completed'",
        ));
}

#[test]
fn test_cli_progress() {
    let temp_dir = create_cli_test_environment();
    rw_with_db(&temp_dir).args(BOOKING).assert().success();

    rw_with_db(&temp_dir)
        .args(["reservation", "progress", "1", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress set to 60%"));

    rw_with_db(&temp_dir)
        .args(["reservation", "progress", "1", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("progress"));

    rw_with_db(&temp_dir)
        .args(["reservation", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 60%"));
}
