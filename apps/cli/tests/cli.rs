//! End-to-end tests for the `signup` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Test Helpers
// =============================================================================

fn signup() -> Command {
    let mut cmd = Command::cargo_bin("signup").unwrap();
    cmd.env_remove("SIGNUP_LOG")
        .env_remove("RUST_LOG")
        .env_remove("SIGNUP_PASSWORD")
        .env_remove("SIGNUP_CONFIRM_PASSWORD")
        .arg("--today")
        .arg("2024-06-15");
    cmd
}

const JANE: [&str; 16] = [
    "--full-name",
    "Jane Doe",
    "--contact-number",
    "123-456-7890",
    "--email",
    "jane@example.com",
    "--password",
    "Passw0rd",
    "--confirm-password",
    "Passw0rd",
    "--day",
    "10",
    "--month",
    "Mar",
    "--year",
    "1990",
];

// =============================================================================
// validate
// =============================================================================

#[test]
fn test_validate_prints_normalized_record() {
    let output = signup().arg("validate").args(JANE).output().unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["full_name"], "Jane Doe");
    assert_eq!(record["day"], 10);
    assert_eq!(record["month"], "Mar");
    assert_eq!(record["year"], 1990);
}

#[test]
fn test_validate_reports_field_errors() {
    signup()
        .arg("validate")
        .args(JANE)
        .args(["--confirm-password", "Passw0rD", "--full-name", "John!"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("confirmPassword: Sorry, Passwords are not matched"))
        .stderr(predicate::str::contains("fullName: Sorry, Symbol is not allowed"));
}

#[test]
fn test_validate_json_errors() {
    signup()
        .args(["validate", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"fullName\": \"Full Name field is required\""))
        .stdout(predicate::str::contains("\"year\"").not());
}

#[test]
fn test_future_birth_date_rejected() {
    signup()
        .arg("validate")
        .args(JANE)
        .args(["--day", "16", "--month", "Jun", "--year", "2024"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("birthday: Sorry, Birthday cannot be in the future"));
}

// =============================================================================
// pickers
// =============================================================================

#[test]
fn test_days_in_leap_february() {
    signup()
        .args(["days", "--year", "2024", "--month", "Feb"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("28 29\n"));
}

#[test]
fn test_days_clamps_selected_day() {
    signup()
        .args(["days", "--year", "2023", "--month", "Feb", "--day", "31"])
        .assert()
        .success()
        .stdout("28\n");
}

#[test]
fn test_days_rejects_unknown_month() {
    signup()
        .args(["days", "--year", "2023", "--month", "feb"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid --month"));
}

#[test]
fn test_years_newest_first() {
    let output = signup().arg("years").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let years: Vec<&str> = stdout.lines().collect();
    assert_eq!(years.first(), Some(&"2024"));
    assert_eq!(years.last(), Some(&"1900"));
    assert_eq!(years.len(), 125);
}

// =============================================================================
// submit
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_submit_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/create"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = format!("{}/api/users/create", server.uri());
    tokio::task::spawn_blocking(move || {
        signup()
            .args(["submit", "--endpoint", &endpoint])
            .args(JANE)
            .assert()
            .success()
            .stdout(predicate::str::contains("User account successfully created."));
    })
    .await
    .unwrap();
}

#[test]
fn test_submit_rejected_never_posts() {
    signup()
        .args(["submit", "--endpoint", "http://127.0.0.1:9/unused"])
        .args(JANE)
        .args(["--email", "jane@"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("email: Sorry, Type Email Format"));
}

#[test]
fn test_submit_transport_failure_shows_generic_message() {
    signup()
        .args(["submit", "--endpoint", "http://127.0.0.1:9/api", "--timeout-secs", "2"])
        .args(JANE)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("There was an error creating the account"));
}

#[test]
fn test_missing_config_file() {
    signup()
        .args(["--config", "/nonexistent/signup.toml", "years"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}
