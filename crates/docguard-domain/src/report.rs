use crate::banned::FileHit;
use docguard_types::{DocguardData, Finding, Verdict};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// Undocumented tools, in extraction (sorted) order.
    pub missing_tools: Vec<String>,
    pub hits: Vec<FileHit>,
    pub findings: Vec<Finding>,
    /// Summary counts. Manifest source fields are left for the caller to fill.
    pub data: DocguardData,
}

impl DomainReport {
    pub fn is_clean(&self) -> bool {
        self.missing_tools.is_empty() && self.hits.is_empty()
    }
}
