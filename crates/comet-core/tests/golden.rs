use std::fs;
use std::path::{Path, PathBuf};

use comet_core::{CallerId, decode};

fn golden_dir(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(dir)
}

fn load_expected_record(dir: &str) -> CallerId {
    let expected_path = golden_dir(dir).join("expected_record.json");
    let expected_json =
        fs::read_to_string(&expected_path).expect("read expected_record.json");
    serde_json::from_str(&expected_json).expect("parse expected record")
}

fn run_golden(dir: &str) {
    let input = fs::read(golden_dir(dir).join("input.bin")).expect("read input.bin");
    let expected = load_expected_record(dir);

    let actual = decode(&input).expect("decode message");

    let actual_value = serde_json::to_value(&actual).expect("serialize actual");
    let expected_value = serde_json::to_value(&expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
    assert_eq!(actual, expected, "golden record mismatch in {dir}");
}

#[test]
fn golden_caller_id() {
    run_golden("tests/golden/caller_id");
}

#[test]
fn golden_trailing_bytes() {
    run_golden("tests/golden/trailing_bytes");
}

#[test]
fn golden_withheld_number() {
    run_golden("tests/golden/withheld_number");
}

#[test]
fn golden_unavailable_message_waiting() {
    run_golden("tests/golden/unavailable_message_waiting");
}

#[test]
fn golden_empty_body() {
    run_golden("tests/golden/empty_body");
}

#[test]
fn golden_empty_body_has_no_fields() {
    let record = load_expected_record("tests/golden/empty_body");
    assert!(record.is_empty());
}

#[test]
fn golden_trailing_bytes_decode_like_caller_id() {
    let plain = fs::read(golden_dir("tests/golden/caller_id").join("input.bin"))
        .expect("read caller_id input");
    let trailing = fs::read(golden_dir("tests/golden/trailing_bytes").join("input.bin"))
        .expect("read trailing_bytes input");
    assert!(trailing.len() > plain.len());
    assert_eq!(
        decode(&plain).expect("decode caller_id"),
        decode(&trailing).expect("decode trailing_bytes")
    );
}
