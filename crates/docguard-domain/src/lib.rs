//! Pure guardrail evaluation (no IO).
//!
//! Input: a docs model and a manifest value loaded elsewhere.
//! Output: missing tools, banned-domain hits, findings, verdict.

#![forbid(unsafe_code)]

pub mod banned;
pub mod coverage;
pub mod model;
pub mod report;
pub mod tools;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;

pub use banned::{scan_docs, scan_text, FileHit, BANNED_DOMAINS};
pub use coverage::missing_tools;
pub use engine::evaluate;
pub use tools::extract_tool_names;
