//! Fuzz target for tool-name extraction from manifest JSON.
//!
//! Goal: extraction should **never panic** on any JSON document, and its output
//! must always be sorted and free of duplicates.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_manifest_extraction
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit input size to avoid OOM and keep fuzzing fast
    if data.len() > 64 * 1024 {
        return;
    }

    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let names = docguard_domain::extract_tool_names(&value);
    assert!(names.windows(2).all(|w| w[0] < w[1]));
});
