//! The `check` use case: resolve the manifest, load the docs, evaluate, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use docguard_repo::ResolvedManifest;
use docguard_settings::ResolvedSettings;
use docguard_types::{DocguardReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Repository root: holds `tools/`, the vendored manifest, and every scanned doc.
    pub repo_root: &'a Utf8Path,
    /// Manifest location and fetch settings.
    pub settings: ResolvedSettings,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: DocguardReport,
    /// Tool names in report order.
    pub tool_names: Vec<String>,
    pub manifest: ResolvedManifest,
}

/// Run the check use case.
///
/// Manifest resolution, I/O, and pattern failures are errors. Guardrail violations are
/// not: they are collected into the report and decided by its verdict.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let manifest = docguard_repo::resolve_manifest(input.repo_root, &input.settings)
        .context("resolve tool manifest")?;
    let tool_names = docguard_domain::extract_tool_names(&manifest.value);
    tracing::info!(tools = tool_names.len(), "extracted tool names");

    let model = docguard_repo::build_docs_model(input.repo_root).context("load documentation")?;

    let domain_report =
        docguard_domain::evaluate(&model, &tool_names).context("build tool name patterns")?;

    let mut data = domain_report.data;
    data.manifest_source = manifest.source.as_str().to_string();
    data.manifest_origin = manifest.origin.clone();

    tracing::info!(
        verdict = ?domain_report.verdict,
        missing_tools = data.missing_tools.len(),
        banned_hits = data.banned_hits,
        "evaluation finished"
    );

    let report = DocguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "docguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data,
    };

    Ok(CheckOutput {
        report,
        tool_names,
        manifest,
    })
}

/// Map verdict to exit code: 0 = pass, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
