//! Tool documentation coverage.

use crate::model::DocFile;
use regex::Regex;

/// Whole-word, case-insensitive matcher for a tool name.
pub fn tool_pattern(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name)))
}

/// Return the tools (in input order) that no doc mentions.
///
/// Each pattern is matched against the whole text of a document, so a mention can
/// sit anywhere in the file.
pub fn missing_tools(tool_names: &[String], docs: &[DocFile]) -> Result<Vec<String>, regex::Error> {
    let mut missing = Vec::new();
    for name in tool_names {
        let pattern = tool_pattern(name)?;
        if !docs.iter().any(|doc| pattern.is_match(&doc.text)) {
            missing.push(name.clone());
        }
    }
    Ok(missing)
}
