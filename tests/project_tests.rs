use predicates::prelude::*;
use std::fs;

#[test]
fn project_writes_yaml_and_prints_report() {
    let output_file = assert_fs::NamedTempFile::new("projection.yaml").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args(["project", "--output", output_file.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Projection Report"))
        .stdout(predicate::str::contains("Total revenue: $2.18M"))
        .stdout(predicate::str::contains("Projection for Base scenario written to"));

    let yaml = fs::read_to_string(output_file.path()).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(value["summary"]["scenario"].as_str(), Some("base"));
    assert_eq!(value["summary"]["year_one"]["revenue"].as_i64(), Some(689213));
    assert_eq!(value["months"].as_sequence().map(|m| m.len()), Some(24));
    assert_eq!(value["months"][0]["month"].as_str(), Some("Mar '26"));
    assert_eq!(value["months"][0]["revenue"].as_i64(), Some(20064));
    assert_eq!(value["months"][0]["is_rent_free"].as_bool(), Some(true));
}

#[test]
fn project_writes_json_for_selected_scenario() {
    let output_file = assert_fs::NamedTempFile::new("projection.json").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args([
        "project",
        "-s",
        "optimistic",
        "-f",
        "json",
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Projection for Optimistic scenario written to"));

    let json = fs::read_to_string(output_file.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["scenario"], "optimistic");
    assert_eq!(value["summary"]["year_one"]["revenue"], 841546);
    assert_eq!(value["months"][0]["orders"], 37);
    assert_eq!(value["months"][0]["margin_percent"], 21);
}

#[test]
fn project_rejects_unknown_scenario() {
    let output_file = assert_fs::NamedTempFile::new("projection.yaml").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args([
        "project",
        "-s",
        "aggressive",
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("aggressive"));
    assert!(!output_file.path().exists());
}

#[test]
fn project_reports_unwritable_output() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.path().join("missing").join("projection.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("projections");
    cmd.args(["project", "-o", output.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to write output file"));
}
