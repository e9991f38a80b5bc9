//! Banned-domain scanning.

use crate::model::DocFile;
use docguard_types::RepoPath;

/// Internal hosts that must never appear in published documentation.
pub const BANNED_DOMAINS: [&str; 3] = [
    "docs.adsgateway.io",
    "internal.adsgateway.io",
    "staging.adsgateway.io",
];

/// One banned domain found on one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHit {
    pub path: RepoPath,
    /// 1-indexed.
    pub line: u32,
    pub domain: String,
    /// The line with surrounding whitespace and any byte-order mark trimmed.
    pub text: String,
}

/// Scan one file's text. LF and CRLF line endings are both accepted.
///
/// Every (line, domain) pair produces its own hit, in line order and then
/// [`BANNED_DOMAINS`] order.
pub fn scan_text(path: &RepoPath, text: &str) -> Vec<FileHit> {
    let mut hits = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        for domain in BANNED_DOMAINS {
            if line.contains(domain) {
                hits.push(FileHit {
                    path: path.clone(),
                    line: u32::try_from(idx + 1).unwrap_or(u32::MAX),
                    domain: domain.to_string(),
                    text: line
                        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                        .to_string(),
                });
            }
        }
    }
    hits
}

/// Scan every doc, preserving the docs' order.
pub fn scan_docs(docs: &[DocFile]) -> Vec<FileHit> {
    docs.iter()
        .flat_map(|doc| scan_text(&doc.path, &doc.text))
        .collect()
}
