//! Shared test utilities for the docguard workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `docguard-types` would not suffice.

use serde_json::Value;
use std::path::PathBuf;

/// Placeholder written over every timestamp.
pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
/// Placeholder written over the envelope's `tool.version`.
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Repo-level `tests/fixtures` directory.
pub fn fixtures_dir() -> PathBuf {
    // crates/docguard-test-util -> crates -> repo root
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced only when the *root* object is a report envelope
/// (has `schema`, `tool`, `started_at`, `verdict` and `findings`), so finding
/// payloads that happen to carry a `tool` key are left alone. `started_at` and
/// `finished_at` are replaced at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "started_at", "verdict", "findings"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(ts) = map.get_mut(key) {
                    *ts = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
