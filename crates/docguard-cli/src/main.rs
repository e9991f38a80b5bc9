//! CLI entry point for docguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `docguard-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use docguard_app::{
    format_explanation, format_not_found, parse_report_json, render_annotations, render_console,
    render_markdown, run_check, run_explain, runtime_error_report, serialize_report,
    to_renderable, verdict_exit_code, CheckInput, ExplainOutput,
};
use docguard_render::ConsoleStream;
use docguard_settings::Overrides;
use docguard_types::DocguardReport;

#[derive(Parser, Debug)]
#[command(
    name = "docguard",
    version,
    about = "Documentation guardrails: tool coverage and banned domains"
)]
struct Cli {
    /// Repository root (directory containing `tools/`).
    #[arg(long, global = true, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Defaults to `check` when omitted.
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check tool documentation coverage and banned domains.
    Check(CheckArgs),

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/docguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/docguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g. "docs.tool_coverage") or code (e.g. "banned_domain").
        identifier: String,
    },
}

#[derive(Args, Debug, Default)]
struct CheckArgs {
    /// Explicit manifest file, relative to the repo root (overrides TOOLS_MANIFEST_PATH).
    #[arg(long)]
    manifest_path: Option<Utf8PathBuf>,

    /// Manifest URL (overrides TOOLS_MANIFEST_URL).
    #[arg(long)]
    manifest_url: Option<String>,

    /// Timeout for the manifest fetch. No timeout when omitted.
    #[arg(long)]
    fetch_timeout_secs: Option<u64>,

    /// Where to write the JSON report.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Where to write a Markdown summary.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.cmd {
        None => cmd_check(&cli.repo_root, CheckArgs::default()),
        Some(Commands::Check(args)) => cmd_check(&cli.repo_root, args),
        Some(Commands::Md { report, output }) => cmd_md(report, output),
        Some(Commands::Annotations { report, max }) => cmd_annotations(report, max),
        Some(Commands::Explain { identifier }) => cmd_explain(&identifier),
    }
}

fn cmd_check(repo_root: &Utf8Path, args: CheckArgs) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.is_dir() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }

        let overrides = Overrides {
            manifest_path: args.manifest_path.clone(),
            manifest_url: args.manifest_url.clone(),
            fetch_timeout_secs: args.fetch_timeout_secs,
        };
        let settings =
            docguard_settings::resolve_settings(|name| std::env::var(name).ok(), overrides)
                .context("resolve settings")?;
        tracing::debug!(?settings, "resolved settings");

        let output = run_check(CheckInput {
            repo_root,
            settings,
        })?;

        let renderable = to_renderable(&output.report);

        if let Some(path) = &args.report_out {
            write_report_file(path, &output.report).context("write report json")?;
        }
        if let Some(path) = &args.markdown_out {
            write_text_file(path, &render_markdown(&renderable)).context("write markdown")?;
        }

        let message = render_console(&renderable);
        match message.stream {
            ConsoleStream::Stdout => print!("{}", message.text),
            ConsoleStream::Stderr => eprint!("{}", message.text),
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if let Some(path) = &args.report_out {
                let report = runtime_error_report(&format!("{err:#}"));
                let _ = write_report_file(path, &report);
            }
            eprintln!("docguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &DocguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_bytes(path, &data).with_context(|| format!("write report: {}", path))
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes()).with_context(|| format!("write text: {}", path))
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

fn read_report(report_path: &Utf8Path) -> anyhow::Result<DocguardReport> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    parse_report_json(&report_text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
