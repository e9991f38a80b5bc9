//! Tool-name extraction from a manifest value.

use serde_json::Value;
use std::collections::BTreeSet;

/// Keys checked on each descriptor, in priority order.
pub const NAME_KEYS: [&str; 3] = ["name", "tool", "id"];

/// Extract the deduplicated, sorted tool names declared by a manifest.
///
/// The manifest is either a bare array of descriptors or an object with a `tools` array.
/// Anything else yields no names. Each descriptor contributes the first of [`NAME_KEYS`]
/// whose value is a string that is non-empty once trimmed.
pub fn extract_tool_names(manifest: &Value) -> Vec<String> {
    let entries: &[Value] = match manifest {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("tools") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };

    entries
        .iter()
        .filter_map(descriptor_name)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn descriptor_name(entry: &Value) -> Option<String> {
    let map = entry.as_object()?;
    NAME_KEYS.iter().find_map(|key| {
        map.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    })
}
