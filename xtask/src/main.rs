//! Developer tasks (schema generation, golden report conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use docguard_test_util::normalize_nondeterministic;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(docguard_types::DocguardReport)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![SchemaSpec {
        filename: "docguard.report.v1.json",
        generate: generate_report_schema,
    }]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Check that a report path is clean: repo-relative, no `..`, forward slashes only.
fn is_clean_path(path: &str) -> bool {
    !(path.starts_with('/')
        || path.contains("..")
        || path.contains('\\')
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

/// Golden report files under tests/fixtures, sorted by fixture name.
fn golden_reports() -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(fixtures_dir()).context("Failed to read tests/fixtures/")? {
        let golden = entry?.path().join("expected.report.json");
        if golden.is_file() {
            out.push(golden);
        }
    }
    out.sort();
    Ok(out)
}

/// Validate golden reports against the generated schema.
///
/// This checks:
/// 1. Schema validation against `docguard.report.v1`
/// 2. Goldens are already normalized (placeholders, not real timestamps/versions)
/// 3. Path hygiene for finding locations and the manifest origin
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("serialize schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let mut errors = Vec::new();
    let goldens = golden_reports()?;

    for path in &goldens {
        let name = path.display().to_string();
        let text = fs::read_to_string(path).with_context(|| format!("Failed to read {name}"))?;
        let report: serde_json::Value =
            serde_json::from_str(&text).with_context(|| format!("Failed to parse {name}"))?;

        for err in validator.iter_errors(&report) {
            errors.push(format!("{name}: schema: {err}"));
        }

        if normalize_nondeterministic(report.clone()) != report {
            errors.push(format!("{name}: timestamps or tool.version are not placeholders"));
        }

        let origin = report["data"]["manifest_origin"].as_str().unwrap_or("");
        if !origin.contains("://") && !is_clean_path(origin) {
            errors.push(format!("{name}: manifest_origin is not repo-relative: {origin}"));
        }
        let findings = report["findings"].as_array().map(Vec::as_slice).unwrap_or(&[]);
        for finding in findings {
            if let Some(p) = finding["location"]["path"].as_str()
                && !is_clean_path(p)
            {
                errors.push(format!("{name}: unclean location path: {p}"));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} golden report(s) conform", goldens.len());
        return Ok(());
    }

    for err in &errors {
        eprintln!("  ✗ {err}");
    }
    bail!("{} conformance error(s)", errors.len())
}

/// Validate that all check IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    use docguard_types::explain::{all_check_ids, all_codes, lookup_explanation};

    let mut missing = Vec::new();
    for id in all_check_ids().iter().chain(all_codes()) {
        match lookup_explanation(id) {
            Some(exp) if !exp.title.is_empty() && !exp.remediation.is_empty() => {
                println!("  ✓ {id}");
            }
            _ => missing.push(*id),
        }
    }

    if missing.is_empty() {
        println!("All check IDs and codes are explained.");
        Ok(())
    } else {
        bail!("missing or empty explanations: {}", missing.join(", "))
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden reports against the report schema");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());

    match cmd.as_str() {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
}
