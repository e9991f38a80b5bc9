//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_DOCS_TOOL_COVERAGE: &str = "docs.tool_coverage";
pub const CHECK_DOCS_BANNED_DOMAINS: &str = "docs.banned_domains";

// Codes: docs.tool_coverage
pub const CODE_TOOL_UNDOCUMENTED: &str = "tool_undocumented";

// Codes: docs.banned_domains
pub const CODE_BANNED_DOMAIN: &str = "banned_domain";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
