use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Docguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Tools covered: {} / {}\n- Banned domain hits: {}\n",
        verdict, report.data.tools_covered, report.data.tools_declared, report.data.banned_hits
    ));
    if !report.data.manifest_source.is_empty() {
        out.push_str(&format!(
            "- Manifest source: `{}`\n",
            report.data.manifest_source
        ));
    }
    out.push('\n');

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Error => "ERROR",
        };

        let mut line = format!(
            "- [{}] `{}` / `{}`: {}",
            sev,
            f.check_id.as_deref().unwrap_or(""),
            f.code,
            f.message
        );
        if let Some(loc) = &f.location {
            line.push_str(&format!(" (`{}`:{})", loc.path, loc.line.unwrap_or(0)));
        }
        out.push_str(&line);
        out.push('\n');

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
    }

    out
}
