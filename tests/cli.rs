use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const SAMPLE: &str = "\
Country Name,Country Code,2020,2021,2022
United States,USA,21000000000000,23000000000000,
Germany,DEU,3.9e12,4.3e12,4.1e12
";

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("gdps").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("gdps"));
}

#[test]
fn build_prints_series_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gdp_data.csv");
    std::fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("gdps").unwrap();
    cmd.args([
        "build",
        "--input",
        input.to_str().unwrap(),
        "--country",
        "Germany",
        "--date",
        "2020:2022",
        "--stats",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2021"))
        .stdout(predicate::str::contains("GrowthRate"));
}

#[test]
fn build_fails_for_unknown_country() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gdp_data.csv");
    std::fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("gdps").unwrap();
    cmd.args([
        "build",
        "--input",
        input.to_str().unwrap(),
        "--country",
        "Atlantis",
        "--date",
        "2020:2022",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn build_rejects_bad_date() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("gdp_data.csv");
    std::fs::write(&input, SAMPLE).unwrap();

    let mut cmd = Command::cargo_bin("gdps").unwrap();
    cmd.args([
        "build",
        "--input",
        input.to_str().unwrap(),
        "--country",
        "Germany",
        "--date",
        "twenty:20",
    ]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid --date"));
}
