//! End-to-end tests for the s10gen binary.

mod common;

use common::{lines, Sandbox};
use predicates::prelude::*;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_no_count_prints_help_and_succeeds() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--count"));
}

#[test]
fn test_help_ignores_broken_settings() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .env("S10GEN_CONFIG", "/nonexistent/x.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));

    sandbox
        .s10gen()
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_subcommand() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("s10gen "));
}

// ============================================================================
// Generation
// ============================================================================

#[test]
fn test_sequential_generation() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .s10gen()
        .args(["-s", "10", "-n", "3", "--indicator", "RA"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        lines(&output),
        vec!["RA000000102US", "RA000000116US", "RA000000120US"]
    );
}

#[test]
fn test_random_generation_shape() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .s10gen()
        .args(["-n", "25"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let ids = lines(&output);
    assert_eq!(ids.len(), 25);
    for id in &ids {
        assert_eq!(id.len(), 13);
        assert!(id.starts_with("RA") || id.starts_with("EA"), "{id}");
        assert!(id.ends_with("US"), "{id}");
        assert!(s10_id::validate(id).unwrap(), "{id}");
    }
}

#[test]
fn test_seed_is_reproducible() {
    let sandbox = Sandbox::new();
    let run = || {
        sandbox
            .s10gen()
            .args(["-n", "5", "--seed", "1234"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_country_flag_and_env() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .args(["-s", "0", "-n", "1", "--country", "GB", "--indicator", "EA"])
        .assert()
        .success()
        .stdout("EA000000005GB\n");

    sandbox
        .s10gen()
        .env("S10GEN_COUNTRY", "DE")
        .args(["-s", "0", "-n", "1", "--indicator", "EA"])
        .assert()
        .success()
        .stdout("EA000000005DE\n");
}

#[test]
fn test_sequential_overflow_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .args(["-s", "99999999", "-n", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("exceeds the 8-digit capacity"));
}

#[test]
fn test_bad_country_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .args(["-n", "1", "--country", "usa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("country"));
}

#[test]
fn test_json_output() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .s10gen()
        .args(["-s", "10", "-n", "2", "--indicator", "RA", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["schemaVersion"], "s10gen.cli.v1");
    assert_eq!(value["data"]["mode"], "sequential");
    assert_eq!(
        value["data"]["identifiers"],
        serde_json::json!(["RA000000102US", "RA000000116US"])
    );
}

// ============================================================================
// Config file
// ============================================================================

#[test]
fn test_config_file_settings() {
    let sandbox = Sandbox::new();
    let path = sandbox.write_config(r#"{ "country": "GB", "indicators": ["RR"] }"#);
    sandbox
        .s10gen()
        .arg("--config")
        .arg(&path)
        .args(["-s", "47312482", "-n", "1"])
        .assert()
        .success()
        .stdout("RR473124829GB\n");
}

#[test]
fn test_missing_config_file_fails() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .args(["--config", "/nonexistent/s10gen.json", "-n", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_with_unknown_key_fails() {
    let sandbox = Sandbox::new();
    let path = sandbox.write_config(r#"{ "contry": "GB" }"#);
    sandbox
        .s10gen()
        .arg("--config")
        .arg(&path)
        .args(["-n", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

// ============================================================================
// Validate and checksum
// ============================================================================

#[test]
fn test_validate_valid_identifiers() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .args(["validate", "RA000000102US", "RR473124829GB"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"))
        .stdout(predicate::str::contains("invalid").not());
}

#[test]
fn test_validate_reports_failures() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .args(["validate", "RA000000102US", "RA000000103US", "RA12"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid"))
        .stdout(predicate::str::contains("malformed"))
        .stderr(predicate::str::contains("2 of 3 identifiers failed validation"));
}

#[test]
fn test_validate_json() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .s10gen()
        .args(["validate", "--format", "json", "RA000000103US"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let row = &value["data"][0];
    assert_eq!(row["status"], "invalid");
    assert_eq!(row["expectedCheckDigit"], 2);
}

#[test]
fn test_checksum_subcommand() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .args(["checksum", "00000010", "02000000", "00000000"])
        .assert()
        .success()
        .stdout("00000010 2\n02000000 0\n00000000 5\n");
}

#[test]
fn test_checksum_rejects_bad_serial() {
    let sandbox = Sandbox::new();
    sandbox
        .s10gen()
        .args(["checksum", "1234567"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 8 digits"));
}
