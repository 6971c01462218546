//! Integration tests for output formatting
//!
//! These tests run the `homefix` binary and check its JSON output and exit codes.

use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const ENV_KEYS: [&str; 7] = [
    "HOMEFIX_RADIUS_KM",
    "HOMEFIX_MAX_RESULTS",
    "HOMEFIX_REMOTE_CLASSIFIER_URL",
    "HOMEFIX_REMOTE_TIMEOUT_MS",
    "HOMEFIX_FALLBACK_LAT",
    "HOMEFIX_FALLBACK_LNG",
    "HOMEFIX_GEOCODER_URL",
];

fn homefix(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_homefix"));
    for key in ENV_KEYS {
        command.env_remove(key);
    }
    command.env("RUST_LOG", "off").args(args).output().expect("Failed to execute command")
}

fn json_stdout(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

fn candidates_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "mid", "display_name": "Beto", "discipline": "plumbing",
              "location": {{"lat": 19.45, "lng": -99.13}}}},
            {{"id": "near", "display_name": "Ana", "discipline": "plumbing",
              "location": {{"lat": 19.44, "lng": -99.13}}, "rating_average": 4.5}},
            {{"id": "sparky", "display_name": "Carla", "discipline": "electrical",
              "location": {{"lat": 19.44, "lng": -99.13}}}},
            {{"id": "far", "display_name": "Dario", "discipline": "plumbing",
              "location": {{"lat": 20.67, "lng": -103.35}}}}
        ]"#
    )
    .unwrap();
    file
}

#[test]
fn test_classify_json_output_is_valid() {
    let output = homefix(&["classify", "se me poncho un cable, necesito un electricista urgente", "--json"]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["discipline"], "electrical");
    assert_eq!(parsed["data"]["urgency"], 8);
    assert_eq!(parsed["data"]["source"], "local");
    assert!(parsed["data"].get("scores").is_none());
}

#[test]
fn test_classify_explain_lists_hits() {
    let output = homefix(&["classify", "tengo una fuga en la tuberia", "--explain", "--json"]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let scores = parsed["data"]["scores"].as_array().unwrap();
    assert!(scores.iter().any(|s| s["discipline"] == "plumbing"));
}

#[test]
fn test_unknown_discipline_fails() {
    let output = homefix(&["classify", "hola", "-d", "astrology"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("astrology"));
}

#[test]
fn test_match_orders_by_distance() {
    let candidates = candidates_file();
    let path = candidates.path().to_str().unwrap();

    let output = homefix(&[
        "match", "--lat", "19.43", "--lng", "-99.13", "-d", "plumbing", "--candidates", path,
        "--json",
    ]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    let ids: Vec<&str> = parsed["data"]["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["candidate"]["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["near", "mid"]);
    assert_eq!(parsed["data"]["radius_km"], 10.0);
}

#[test]
fn test_match_geojson_output() {
    let candidates = candidates_file();
    let path = candidates.path().to_str().unwrap();

    let output = homefix(&[
        "match", "--lat", "19.43", "--lng", "-99.13", "-n", "1", "--candidates", path, "--geojson",
    ]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    assert_eq!(parsed["type"], "FeatureCollection");
    assert_eq!(parsed["features"].as_array().unwrap().len(), 1);
}

#[test]
fn test_lead_without_phone_fails() {
    let output = homefix(&["lead", "--text", "fuga de agua", "--lat", "19.43", "--lng", "-99.13"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("contact.phone"));
}

#[test]
fn test_lead_unknown_address_is_approximate() {
    let output = homefix(&[
        "lead", "--phone", "5512345678", "--address", "Calle Falsa 123", "--text",
        "no prende el refrigerador", "--priority", "--json",
    ]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    assert_eq!(parsed["data"]["location_approximate"], true);
    assert_eq!(parsed["data"]["priority_boost"], true);
}

#[test]
fn test_config_reports_cli_source() {
    let output = homefix(&["config", "--timeout-ms", "900", "--json"]);
    assert!(output.status.success());

    let parsed = json_stdout(&output);
    assert_eq!(parsed["data"]["remote_timeout_ms"]["value"], "900");
    assert_eq!(parsed["data"]["remote_timeout_ms"]["source"], "Cli");
    assert_eq!(parsed["data"]["radius_km"]["source"], "Default");
}
