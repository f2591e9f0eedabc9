//! Test helpers for writing CLI fixtures to disk.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use wardrobe_core::Garment;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn temp_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Current 45°F with a 50/40 forecast for 2026-12-03.
pub(super) fn cold_weather() -> Value {
    json!({
        "current": { "temperature": 45.0, "condition": "Cloudy" },
        "forecast": [{
            "date": "2026-12-03",
            "temperature": { "high": 50.0, "low": 40.0 },
            "condition": "Showers",
            "precipitationProbability": 0.1
        }]
    })
}

pub(super) fn score_request(selected: &[Garment], candidates: &[Garment]) -> Value {
    let mut request = cold_weather();
    request["selected"] = serde_json::to_value(selected).expect("serialize selection");
    request["candidates"] = serde_json::to_value(candidates).expect("serialize candidates");
    request
}

pub(super) fn write_json(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_string_pretty(value).expect("serialize fixture");
    write_utf8(path, payload.as_bytes());
}

pub(super) fn parse_output(buffer: &[u8]) -> Value {
    let text = std::str::from_utf8(buffer).expect("stdout utf-8");
    serde_json::from_str(text).expect("output should be JSON")
}
