use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn dashboard_defaults_to_base_overview() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.arg("dashboard");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scenario: Base"))
        .stdout(predicate::str::contains("[Revenue]  Costs  Materials  Products  Monthly"))
        .stdout(predicate::str::contains("Peak Month: $20.4K (Nov '26)"));
}

#[test]
fn dashboard_monthly_tab_shows_totals() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args(["dashboard", "--tab", "monthly"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "2-YEAR TOTAL | | $2.18M | $1.57M | $610.6K | 27% avg",
        ))
        .stdout(predicate::str::contains(
            "Month 1 Advantage: free kitchen rent and $4.0K net profit.",
        ));
}

#[test]
fn dashboard_reads_config_and_flags_override_it() {
    let config = assert_fs::NamedTempFile::new("report.yaml").unwrap();
    config
        .write_str("scenario: conservative\ntab: materials\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args(["dashboard", "-c", config.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scenario: Conservative"))
        .stdout(predicate::str::contains("TOTAL PER ORDER | $5.18 | $6.92 | $9.45 |"));

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args([
        "dashboard",
        "-c",
        config.path().to_str().unwrap(),
        "-s",
        "optimistic",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scenario: Optimistic"));
}

#[test]
fn dashboard_fails_on_bad_config() {
    let config = assert_fs::NamedTempFile::new("report.yaml").unwrap();
    config.write_str("scenario: aggressive\n").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args(["dashboard", "-c", config.path().to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse report config"));
}
