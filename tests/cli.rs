use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("exactage").unwrap()
}

#[test]
fn computes_age_against_a_fixed_reference_date() {
    cmd()
        .args(["1990-05-15", "--today", "2024-01-10"])
        .assert()
        .success()
        .stdout(contains("Your exact age is: 33 Years, 7 Months, and 26 Days."));
}

#[test]
fn singular_units_are_printed_without_an_s() {
    cmd()
        .args(["2022-12-09", "--today", "2024-01-10"])
        .assert()
        .success()
        .stdout(contains("1 Year, 1 Month, and 1 Day"));
}

#[test]
fn missing_date_shows_error_and_placeholder() {
    cmd()
        .args(["--today", "2024-01-10"])
        .assert()
        .failure()
        .stderr(contains("please select a date of birth"))
        .stdout(contains("Enter a date of birth"));
}

#[test]
fn future_date_is_rejected() {
    cmd()
        .args(["2999-01-01", "--today", "2024-01-10"])
        .assert()
        .failure()
        .stderr(contains("cannot be in the future"));
}

#[test]
fn malformed_date_is_a_usage_error() {
    cmd()
        .arg("not-a-date")
        .assert()
        .failure()
        .stderr(contains("not a valid YYYY-MM-DD date"));
}
