//! Command-line contract: report on stdout, exit codes, and the
//! `NPCHART_REQUEST` fallback.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_np-chart"));
    cmd.env_remove("NPCHART_REQUEST").env_remove("RUST_LOG");
    cmd
}

fn write_request(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write request");
    file
}

const IN_CONTROL: &str = r#"
sample_size = 100
defect_rate = 0.05
defectives = "5, 7"
"#;

const OUT_OF_CONTROL: &str = r#"
sample_size = 50
defect_rate = 0.08
defectives = "3, 9, 11, 4"
"#;

#[test]
fn test_no_request_exits_with_usage() {
    cli().assert().code(2).stdout(predicate::str::is_empty());
}

#[test]
fn test_valid_request_prints_report() {
    let file = write_request(IN_CONTROL);
    cli()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CL    = n * p = 5.00"))
        .stdout(predicate::str::contains("sigma = sqrt(n * p * (1 - p)) = 2.179"))
        .stdout(predicate::str::contains("UCL   = CL + 3 sigma = 11.54"))
        .stdout(predicate::str::contains("(clamped)"))
        .stdout(predicate::str::contains("observations = [5, 7]"))
        .stdout(predicate::str::contains("all points are within control limits"));
}

#[test]
fn test_report_survives_error_log_filter() {
    let file = write_request(OUT_OF_CONTROL);
    cli()
        .env("RUST_LOG", "error")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CL    = n * p = 4.00"))
        .stdout(predicate::str::contains("UCL   = CL + 3 sigma = 9.75"))
        .stdout(predicate::str::contains(
            "out-of-control points at sample(s) [3] with value(s) [11]",
        ));
}

#[test]
fn test_bad_token_exits_with_failure() {
    let file = write_request(
        r#"
sample_size = 50
defect_rate = 0.08
defectives = "3, abc"
"#,
    );
    cli()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("abc"));
}

#[test]
fn test_missing_file_exits_with_failure() {
    let dir = tempfile::tempdir().expect("temp dir");
    cli().arg(dir.path().join("absent.toml")).assert().code(1);
}

#[test]
fn test_request_path_from_environment() {
    let file = write_request(IN_CONTROL);
    cli()
        .env("NPCHART_REQUEST", file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("UCL   = CL + 3 sigma = 11.54"));
}
