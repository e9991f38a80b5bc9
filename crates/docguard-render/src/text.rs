use crate::{RenderableReport, RenderableVerdictStatus};
use docguard_types::ids;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// What the CLI prints at the end of a check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleMessage {
    pub stream: ConsoleStream,
    pub text: String,
}

/// Render the end-of-run console output.
///
/// A passing run is a single summary line on stdout. A failing run lists every
/// undocumented tool and every banned-domain hit on stderr, one section per kind.
pub fn render_console(report: &RenderableReport) -> ConsoleMessage {
    if report.verdict == RenderableVerdictStatus::Pass {
        return ConsoleMessage {
            stream: ConsoleStream::Stdout,
            text: format!(
                "docguard: OK - {} tools covered under tools/; no banned domains found.\n",
                report.data.tools_covered
            ),
        };
    }

    let mut out = String::new();

    let missing = &report.data.missing_tools;
    if !missing.is_empty() {
        out.push_str(&format!(
            "docguard: tools missing documentation coverage under tools/ ({}):\n",
            missing.len()
        ));
        for tool in missing {
            out.push_str(&format!("  - {}\n", tool));
        }
    }

    let hits: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.code == ids::CODE_BANNED_DOMAIN)
        .collect();
    if !hits.is_empty() {
        out.push_str(&format!(
            "docguard: banned domain references ({}):\n",
            hits.len()
        ));
        for f in hits {
            let (path, line) = f
                .location
                .as_ref()
                .map(|l| (l.path.as_str(), l.line.unwrap_or(0)))
                .unwrap_or(("?", 0));
            out.push_str(&format!(
                "  - {}:{} [{}] {}\n",
                path,
                line,
                f.subject.as_deref().unwrap_or(""),
                f.excerpt.as_deref().unwrap_or("")
            ));
        }
    }

    ConsoleMessage {
        stream: ConsoleStream::Stderr,
        text: out,
    }
}
