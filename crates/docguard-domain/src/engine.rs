use crate::banned::{scan_docs, FileHit};
use crate::coverage::missing_tools;
use crate::fingerprint::fingerprint_for;
use crate::model::DocsModel;
use crate::report::DomainReport;
use docguard_types::{ids, DocguardData, Finding, Location, Severity, Verdict};
use serde_json::json;

/// Run both guardrails over the model.
///
/// `tool_names` must already be deduplicated and sorted (see
/// [`crate::extract_tool_names`]). Every violation is collected; nothing short-circuits.
pub fn evaluate(model: &DocsModel, tool_names: &[String]) -> Result<DomainReport, regex::Error> {
    let missing = missing_tools(tool_names, &model.tool_docs)?;
    let hits = scan_docs(&model.scanned_docs);

    let mut findings: Vec<Finding> = missing.iter().map(|t| undocumented_tool(t)).collect();
    findings.extend(hits.iter().map(banned_domain));

    // Deterministic ordering.
    findings.sort_by(compare_findings);

    let verdict = if findings.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let data = DocguardData {
        tools_declared: count(tool_names.len()),
        tools_covered: count(tool_names.len() - missing.len()),
        tool_docs_scanned: count(model.tool_docs.len()),
        docs_scanned: count(model.scanned_docs.len()),
        missing_tools: missing.clone(),
        banned_hits: count(hits.len()),
        ..DocguardData::default()
    };

    Ok(DomainReport {
        verdict,
        missing_tools: missing,
        hits,
        findings,
        data,
    })
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn undocumented_tool(tool: &str) -> Finding {
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_DOCS_TOOL_COVERAGE.to_string(),
        code: ids::CODE_TOOL_UNDOCUMENTED.to_string(),
        message: format!("tool `{tool}` is not mentioned in any .mdx file under tools/"),
        location: None,
        help: Some(format!(
            "Mention `{tool}` by name on a page under tools/ (whole word, any case)."
        )),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_DOCS_TOOL_COVERAGE,
            ids::CODE_TOOL_UNDOCUMENTED,
            None,
            None,
            tool,
        )),
        data: json!({ "tool": tool }),
    }
}

fn banned_domain(hit: &FileHit) -> Finding {
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_DOCS_BANNED_DOMAINS.to_string(),
        code: ids::CODE_BANNED_DOMAIN.to_string(),
        message: format!("banned domain `{}` referenced: {}", hit.domain, hit.text),
        location: Some(Location {
            path: hit.path.clone(),
            line: Some(hit.line),
        }),
        help: Some("Replace the internal link with a public one or remove it.".to_string()),
        fingerprint: Some(fingerprint_for(
            ids::CHECK_DOCS_BANNED_DOMAINS,
            ids::CODE_BANNED_DOMAIN,
            Some(hit.path.as_str()),
            Some(hit.line),
            &hit.domain,
        )),
        data: json!({ "domain": hit.domain, "line_text": hit.text }),
    }
}

/// Tool name or domain carried in the finding payload.
fn subject(f: &Finding) -> &str {
    f.data
        .get("tool")
        .or_else(|| f.data.get("domain"))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) location.path (missing last)
    // 2) location.line (missing last)
    // 3) check_id
    // 4) code
    // 5) subject
    // 6) message
    let key = |f: &Finding| match &f.location {
        Some(l) => (0u8, l.path.as_str().to_string(), l.line.unwrap_or(u32::MAX)),
        None => (1u8, String::new(), u32::MAX),
    };

    key(a)
        .cmp(&key(b))
        .then_with(|| a.check_id.cmp(&b.check_id))
        .then_with(|| a.code.cmp(&b.code))
        .then_with(|| subject(a).cmp(subject(b)))
        .then_with(|| a.message.cmp(&b.message))
}
