//! The `explain` use case: look up guardrail documentation by check_id or code.

use docguard_types::explain::{self, Explanation};
use std::fmt::Write as _;

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; carries every identifier that would have resolved.
    NotFound {
        identifier: String,
        available_check_ids: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_check_ids: explain::all_check_ids(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();
    let fence = exp.examples.lang;

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", exp.title);
    let _ = writeln!(out, "{}\n", "=".repeat(exp.title.len()));
    let _ = writeln!(out, "{}\n", exp.description);
    let _ = writeln!(out, "Remediation\n-----------");
    let _ = writeln!(out, "{}\n", exp.remediation);
    let _ = writeln!(out, "Examples\n--------\n");
    let _ = writeln!(out, "Before (violation):\n```{fence}\n{}\n```\n", exp.examples.before);
    let _ = writeln!(out, "After (fixed):\n```{fence}\n{}\n```", exp.examples.after);

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    check_ids: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n\n");

    out.push_str("Available check_ids:\n");
    for id in check_ids {
        let _ = writeln!(out, "  - {id}");
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        let _ = writeln!(out, "  - {code}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docguard_types::ids;

    fn unwrap_found(output: ExplainOutput) -> Explanation {
        match output {
            ExplainOutput::Found(exp) => exp,
            _ => panic!("expected Found"),
        }
    }

    #[test]
    fn explain_known_check_id() {
        let output = run_explain(ids::CHECK_DOCS_TOOL_COVERAGE);
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_known_code() {
        let output = run_explain(ids::CODE_BANNED_DOMAIN);
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown_lists_alternatives() {
        match run_explain("docs.spelling") {
            ExplainOutput::NotFound {
                identifier,
                available_check_ids,
                available_codes,
            } => {
                assert_eq!(identifier, "docs.spelling");
                assert!(available_check_ids.contains(&ids::CHECK_DOCS_BANNED_DOMAINS));
                assert!(available_codes.contains(&ids::CODE_TOOL_UNDOCUMENTED));
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn examples_are_fenced_with_their_language() {
        let mdx = format_explanation(&unwrap_found(run_explain(ids::CHECK_DOCS_TOOL_COVERAGE)));
        assert!(mdx.contains("Remediation"));
        assert!(mdx.contains("Examples"));
        assert!(mdx.contains("```mdx\n"));

        let json = format_explanation(&unwrap_found(run_explain(ids::CODE_TOOL_UNDOCUMENTED)));
        assert!(json.contains("```json\n"));
    }

    #[test]
    fn title_is_underlined_to_its_length() {
        let exp = unwrap_found(run_explain(ids::CODE_BANNED_DOMAIN));
        let formatted = format_explanation(&exp);
        let mut lines = formatted.lines();
        assert_eq!(lines.next(), Some(exp.title));
        assert_eq!(lines.next().map(str::len), Some(exp.title.len()));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["check.one", "check.two"], &["code.one"]);
        assert!(formatted.starts_with("Unknown check_id or code: missing\n\n"));
        assert!(formatted.contains("Available check_ids:\n  - check.one\n  - check.two\n"));
        assert!(formatted.contains("\nAvailable codes:\n  - code.one\n"));
    }
}
