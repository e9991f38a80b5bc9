use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - path (repo-relative), if any
/// - line, if any
/// - subject (tool name or banned domain)
pub fn fingerprint_for(
    check_id: &str,
    code: &str,
    path: Option<&str>,
    line: Option<u32>,
    subject: &str,
) -> String {
    let line = line.map(|l| l.to_string()).unwrap_or_default();
    let canonical = [check_id, code, path.unwrap_or(""), &line, subject].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
