use assert_cmd::Command;
use predicates::prelude::*;

fn educarenda(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("educarenda").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn calc_reports_surplus() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args([
            "calc",
            "--fixed",
            "Rent=1200",
            "--variable",
            "Groceries=500",
            "--salary",
            "2000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 1,700.00"))
        .stdout(predicate::str::contains("R$ 300.00 (surplus)"))
        .stdout(predicate::str::contains("Fixed-income investments"));
}

#[test]
fn calc_reports_deficit() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args([
            "calc",
            "--fixed",
            "Rent=1200",
            "--variable",
            "Groceries=500",
            "--salary",
            "1000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(deficit)"))
        .stdout(predicate::str::contains("You are R$ 700.00 in deficit"));
}

#[test]
fn calc_without_salary_only_totals() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args(["calc", "--preset", "Electricity bill", "--preset", "transportation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 250.00"))
        .stdout(predicate::str::contains("No salary given"));
}

#[test]
fn calc_json_summary() {
    let home = tempfile::tempdir().unwrap();
    let output = educarenda(&home)
        .args([
            "calc",
            "--fixed",
            "Rent=1200",
            "--variable",
            "Groceries=500",
            "--salary",
            "1700",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_expenses"], "1700");
    assert_eq!(summary["remaining"], "0");
    assert_eq!(summary["balance"], "Surplus");
    assert_eq!(summary["entries"][1]["id"], 2);
    assert_eq!(summary["entries"][1]["category"], "Variable");
}

#[test]
fn calc_cent_amounts_balancing_salary_is_surplus() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args([
            "calc",
            "--fixed",
            "Water=0,10",
            "--variable",
            "Coffee=0,20",
            "--salary",
            "0,30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 0.00 (surplus)"))
        .stdout(predicate::str::contains("in deficit").not());
}

#[test]
fn calc_rejects_empty_label() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args(["calc", "--fixed", "=50"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Missing field: label"));
}

#[test]
fn calc_rejects_non_numeric_salary() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args(["calc", "--fixed", "Rent=1200", "--salary", "NaN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid amount: NaN"));
}

#[test]
fn calc_accepts_negative_salary() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args(["calc", "--salary", "-100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(deficit)"));
}

#[test]
fn presets_lists_catalog() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Electricity bill"))
        .stdout(predicate::str::contains("Monthly groceries"))
        .stdout(predicate::str::contains("R$ 1,200.00"));
}

#[test]
fn about_prints_description() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("About EducaRenda"))
        .stdout(predicate::str::contains("UNEX"));
}

#[test]
fn open_unknown_route_fails() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args(["open", "settings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown route: settings"));
}

#[test]
fn settings_currency_is_used_by_calc() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args(["settings", "--currency", "$", "--name", "Ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved settings"));

    educarenda(&home)
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("User:       Ana"))
        .stdout(predicate::str::contains("Currency:   $"));

    educarenda(&home)
        .args(["calc", "--fixed", "Rent=1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$ 1,200.00"))
        .stdout(predicate::str::contains("R$").not());
}

#[test]
fn settings_rejects_bad_log_level() {
    let home = tempfile::tempdir().unwrap();
    educarenda(&home)
        .args(["settings", "--log-level", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid log level"));
}
