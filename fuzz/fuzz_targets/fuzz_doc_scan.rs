//! Fuzz target for the coverage check and banned-domain scan.
//!
//! Goal: arbitrary tool names and document text should **never panic**.
//! Pattern compilation may fail for pathological names, but escaping means it
//! never should for short ones.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_doc_scan
//! ```

#![no_main]

use arbitrary::Arbitrary;
use docguard_domain::model::DocFile;
use docguard_types::RepoPath;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ScanInput {
    tools: Vec<String>,
    text: String,
}

fuzz_target!(|input: ScanInput| {
    if input.tools.len() > 20 || input.text.len() > 16 * 1024 {
        return;
    }

    let tools: Vec<String> = input
        .tools
        .into_iter()
        .filter(|t| !t.is_empty() && t.len() <= 64)
        .collect();

    let docs = vec![DocFile::new("tools/fuzz.mdx", input.text.clone())];
    if let Ok(missing) = docguard_domain::missing_tools(&tools, &docs) {
        assert!(missing.len() <= tools.len());
    }

    for hit in docguard_domain::scan_text(&RepoPath::new("fuzz.md"), &input.text) {
        assert!(hit.line >= 1);
        assert!(hit.text.contains(hit.domain.as_str()));
    }
});
