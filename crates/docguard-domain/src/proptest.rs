//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Tool-name extraction determinism and deduplication
//! - Coverage results for mentioned and absent tools
//! - Banned-domain line numbers and trimmed text

use crate::banned::{scan_text, BANNED_DOMAINS};
use crate::coverage::missing_tools;
use crate::engine::evaluate;
use crate::model::{DocFile, DocsModel};
use crate::tools::extract_tool_names;
use docguard_types::RepoPath;
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Tool names shaped like real MCP tool identifiers.
fn arb_tool_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,15}").unwrap()
}

/// A manifest descriptor exposing `name` under one of the recognised keys.
fn arb_descriptor() -> impl Strategy<Value = Value> {
    (arb_tool_name(), 0usize..3).prop_map(|(name, key)| match key {
        0 => json!({ "name": name }),
        1 => json!({ "tool": name }),
        _ => json!({ "id": name }),
    })
}

/// A line of prose that never contains a banned domain.
fn arb_clean_line() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 ,:/._-]{0,40}")
        .unwrap()
        .prop_filter("must not contain a banned domain", |s| {
            !BANNED_DOMAINS.iter().any(|d| s.contains(d))
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn extraction_is_sorted_and_unique(descriptors in prop::collection::vec(arb_descriptor(), 0..20)) {
        let names = extract_tool_names(&Value::Array(descriptors.clone()));

        let mut expected = names.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(&names, &expected);

        // Same input, same output; wrapping in `{tools: [...]}` is equivalent.
        prop_assert_eq!(&names, &extract_tool_names(&Value::Array(descriptors.clone())));
        prop_assert_eq!(&names, &extract_tool_names(&json!({ "tools": descriptors })));
    }

    #[test]
    fn mentioned_tools_are_never_missing(tools in prop::collection::btree_set(arb_tool_name(), 1..10)) {
        let tools: Vec<String> = tools.into_iter().collect();
        let text = tools.iter().map(|t| format!("- `{t}`")).collect::<Vec<_>>().join("\n");
        let docs = vec![DocFile::new("tools/index.mdx", text)];
        prop_assert!(missing_tools(&tools, &docs).unwrap().is_empty());
    }

    #[test]
    fn absent_tools_are_always_missing(tools in prop::collection::btree_set(arb_tool_name(), 1..10)) {
        let tools: Vec<String> = tools.into_iter().collect();
        // Digits-only prose cannot contain a name that starts with a letter.
        let docs = vec![DocFile::new("tools/index.mdx", "0123 4567 89")];
        prop_assert_eq!(missing_tools(&tools, &docs).unwrap(), tools);
    }

    #[test]
    fn banned_hit_reports_line_and_trimmed_text(
        before in prop::collection::vec(arb_clean_line(), 0..10),
        after in prop::collection::vec(arb_clean_line(), 0..10),
        domain_idx in 0usize..BANNED_DOMAINS.len(),
        crlf in any::<bool>(),
    ) {
        let domain = BANNED_DOMAINS[domain_idx];
        let offending = format!("  see https://{domain}/path  ");
        let mut lines = before.clone();
        lines.push(offending.clone());
        lines.extend(after);
        let text = lines.join(if crlf { "\r\n" } else { "\n" });

        let hits = scan_text(&RepoPath::new("page.mdx"), &text);
        prop_assert_eq!(hits.len(), 1);
        prop_assert_eq!(hits[0].line as usize, before.len() + 1);
        prop_assert_eq!(hits[0].domain.as_str(), domain);
        prop_assert_eq!(hits[0].text.as_str(), offending.trim());
    }

    #[test]
    fn clean_files_have_no_hits(lines in prop::collection::vec(arb_clean_line(), 0..20)) {
        let text = lines.join("\n");
        prop_assert!(scan_text(&RepoPath::new("page.md"), &text).is_empty());
    }

    #[test]
    fn evaluate_is_deterministic(
        tools in prop::collection::btree_set(arb_tool_name(), 0..8),
        lines in prop::collection::vec(arb_clean_line(), 0..8),
    ) {
        let tools: Vec<String> = tools.into_iter().collect();
        let mut text = lines.join("\n");
        text.push_str("\ninternal.adsgateway.io\n");
        let model = DocsModel {
            tool_docs: vec![DocFile::new("tools/a.mdx", text.clone())],
            scanned_docs: vec![DocFile::new("tools/a.mdx", text)],
        };

        let first = evaluate(&model, &tools).unwrap();
        let second = evaluate(&model, &tools).unwrap();
        prop_assert_eq!(first.findings, second.findings);
        prop_assert_eq!(first.missing_tools, second.missing_tools);
    }
}
