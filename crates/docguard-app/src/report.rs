use anyhow::Context;
use docguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use docguard_types::{
    ids, DocguardData, DocguardReport, Finding, Severity, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<DocguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse docguard report")
}

pub fn serialize_report(report: &DocguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &DocguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            manifest_source: report.data.manifest_source.clone(),
            tools_declared: report.data.tools_declared,
            tools_covered: report.data.tools_covered,
            missing_tools: report.data.missing_tools.clone(),
            banned_hits: report.data.banned_hits,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    let data_str = |key: &str| f.data.get(key).and_then(|v| v.as_str()).map(str::to_string);

    RenderableFinding {
        severity: match f.severity {
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: Some(f.check_id.clone()),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            path: loc.path.as_str().to_string(),
            line: loc.line,
        }),
        subject: data_str("tool").or_else(|| data_str("domain")),
        excerpt: data_str("line_text"),
        help: f.help.clone(),
    }
}

/// Report written when the run aborts before evaluation (no manifest, unreadable docs, ...).
pub fn runtime_error_report(message: &str) -> DocguardReport {
    let now = OffsetDateTime::now_utc();

    DocguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "docguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the error and re-run docguard.".to_string()),
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: DocguardData {
            manifest_source: "none".to_string(),
            ..DocguardData::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docguard_types::{Location, RepoPath};
    use serde_json::json;

    fn failing_report() -> DocguardReport {
        let now = OffsetDateTime::UNIX_EPOCH;
        DocguardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "docguard".to_string(),
                version: "0.0.0".to_string(),
            },
            started_at: now,
            finished_at: now,
            verdict: Verdict::Fail,
            findings: vec![
                Finding {
                    severity: Severity::Error,
                    check_id: ids::CHECK_DOCS_BANNED_DOMAINS.to_string(),
                    code: ids::CODE_BANNED_DOMAIN.to_string(),
                    message: "banned".to_string(),
                    location: Some(Location {
                        path: RepoPath::new("overview.mdx"),
                        line: Some(3),
                    }),
                    help: None,
                            fingerprint: None,
                    data: json!({ "domain": "docs.adsgateway.io", "line_text": "See it" }),
                },
                Finding {
                    severity: Severity::Error,
                    check_id: ids::CHECK_DOCS_TOOL_COVERAGE.to_string(),
                    code: ids::CODE_TOOL_UNDOCUMENTED.to_string(),
                    message: "missing".to_string(),
                    location: None,
                    help: None,
                            fingerprint: None,
                    data: json!({ "tool": "list_campaigns" }),
                },
            ],
            data: DocguardData {
                manifest_source: "vendored".to_string(),
                tools_declared: 2,
                tools_covered: 1,
                missing_tools: vec!["list_campaigns".to_string()],
                banned_hits: 1,
                ..DocguardData::default()
            },
        }
    }

    #[test]
    fn serialized_report_parses_back() {
        let report = failing_report();
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed, report);
    }

    #[test]
    fn parse_rejects_foreign_schema() {
        let err = parse_report_json(r#"{"schema":"other.report.v1"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown report schema"));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = parse_report_json("{not json").unwrap_err();
        assert!(err.to_string().contains("parse report json"));
    }

    #[test]
    fn renderable_carries_subject_and_excerpt() {
        let renderable = to_renderable(&failing_report());
        assert_eq!(renderable.verdict, RenderableVerdictStatus::Fail);

        let banned = &renderable.findings[0];
        assert_eq!(banned.subject.as_deref(), Some("docs.adsgateway.io"));
        assert_eq!(banned.excerpt.as_deref(), Some("See it"));
        assert_eq!(
            banned.location,
            Some(RenderableLocation {
                path: "overview.mdx".to_string(),
                line: Some(3),
            })
        );

        let tool = &renderable.findings[1];
        assert_eq!(tool.subject.as_deref(), Some("list_campaigns"));
        assert_eq!(tool.excerpt, None);
        assert_eq!(renderable.data.missing_tools, vec!["list_campaigns"]);
    }

    #[test]
    fn runtime_error_report_fails_with_single_finding() {
        let report = runtime_error_report("boom");
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.data.manifest_source, "none");
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].check_id, ids::CHECK_TOOL_RUNTIME);
        assert_eq!(report.findings[0].code, ids::CODE_RUNTIME_ERROR);
        assert_eq!(report.findings[0].message, "boom");
    }
}
