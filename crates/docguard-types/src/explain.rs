//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Fence language for both snippets (`mdx`, `json`, ...).
    pub lang: &'static str,
    /// Content that would trigger a finding.
    pub before: &'static str,
    /// Content that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_DOCS_TOOL_COVERAGE => Some(explain_tool_coverage()),
        ids::CHECK_DOCS_BANNED_DOMAINS => Some(explain_banned_domains()),

        ids::CODE_TOOL_UNDOCUMENTED => Some(explain_tool_undocumented()),
        ids::CODE_BANNED_DOMAIN => Some(explain_banned_domain()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[ids::CHECK_DOCS_TOOL_COVERAGE, ids::CHECK_DOCS_BANNED_DOMAINS]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_TOOL_UNDOCUMENTED, ids::CODE_BANNED_DOMAIN]
}

// --- Check-level explanations ---

fn explain_tool_coverage() -> Explanation {
    Explanation {
        title: "Tool Documentation Coverage",
        description: "\
Verifies that every tool declared in the tool manifest is mentioned in at least one
`.mdx` page under the `tools/` documentation directory.

A tool counts as documented when its name appears as a whole word anywhere in a page,
ignoring case. `search_ads` matches `Search_Ads` but not `search_ads_v2`.",
        remediation: "\
Add or extend a page under `tools/` that names the tool. A reference table row or a
heading is enough; the check only needs one whole-word mention in any page.",
        examples: ExamplePair {
            lang: "mdx",
            before: "\
# Campaign tools

Use `search_ads` to find ads.",
            after: "\
# Campaign tools

Use `search_ads` to find ads and `list_campaigns` to enumerate campaigns.",
        },
    }
}

fn explain_banned_domains() -> Explanation {
    Explanation {
        title: "No Banned Domains",
        description: "\
Scans every `.md`, `.mdx`, and `docs.json` file in the repository for internal host names
that must never be published. Matching is a plain substring check per line, so the domain
is flagged inside URLs, code blocks, and prose alike.

Banned domains: `docs.adsgateway.io`, `internal.adsgateway.io`, `staging.adsgateway.io`.",
        remediation: "\
Replace the internal link with its public equivalent, or remove the reference. The list of
banned domains is fixed policy and cannot be suppressed per file.",
        examples: ExamplePair {
            lang: "mdx",
            before: "See https://docs.adsgateway.io/guide for more.",
            after: "See the [setup guide](/guides/setup) for more.",
        },
    }
}

// --- Code-level explanations ---

fn explain_tool_undocumented() -> Explanation {
    Explanation {
        title: "Undocumented Tool",
        description: "\
A tool name from the manifest was not found as a whole word in any `.mdx` file under
`tools/`. The finding has no file location; the tool name is in the finding data.",
        remediation: "\
Mention the tool by its exact manifest name on a page under `tools/`. If the tool was
renamed, update the docs to the new name rather than keeping the old one.",
        examples: ExamplePair {
            lang: "json",
            before: r#"[{"name": "search_ads"}, {"id": "list_campaigns"}]"#,
            after: r#"[{"name": "search_ads"}]"#,
        },
    }
}

fn explain_banned_domain() -> Explanation {
    Explanation {
        title: "Banned Domain Reference",
        description: "\
A line in a documentation file contains one of the banned internal domains. One finding
is emitted per (line, domain) pair, pointing at the 1-indexed line.",
        remediation: "\
Edit the reported line to drop or replace the internal domain.",
        examples: ExamplePair {
            lang: "json",
            before: r#"{ "href": "https://internal.adsgateway.io/status" }"#,
            after: r#"{ "href": "/status" }"#,
        },
    }
}
