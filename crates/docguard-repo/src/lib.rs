//! Repository adapters: discover documentation files, resolve the tool manifest.
//!
//! This crate is allowed to do filesystem and network IO. Everything it returns is
//! plain data handed to the pure `docguard-domain` evaluation.

#![forbid(unsafe_code)]

mod discover;
mod error;
mod fetch;
mod manifest;

use anyhow::Context;
use camino::Utf8Path;
use docguard_domain::model::{DocFile, DocsModel};
use docguard_types::RepoPath;

pub use discover::{is_mdx, is_scanned_doc, walk_files};
pub use error::ManifestError;
pub use fetch::{fetch_manifest, USER_AGENT};
pub use manifest::{
    resolve_manifest, ManifestSource, ResolvedManifest, SIBLING_MANIFEST, VENDORED_MANIFEST,
};

/// Documentation directory whose `.mdx` pages must cover every tool.
pub const TOOLS_DIR: &str = "tools";

/// Load every file the guardrails look at.
///
/// Fails before reading anything if `tools/` is missing under `repo_root`.
pub fn build_docs_model(repo_root: &Utf8Path) -> anyhow::Result<DocsModel> {
    let tools_root = repo_root.join(TOOLS_DIR);
    if !tools_root.is_dir() {
        anyhow::bail!("tools directory not found: {}", tools_root);
    }

    let tool_paths =
        walk_files(repo_root, Utf8Path::new(TOOLS_DIR), is_mdx).context("walk tools directory")?;
    let scanned_paths =
        walk_files(repo_root, Utf8Path::new(""), is_scanned_doc).context("walk repository")?;

    let model = DocsModel {
        tool_docs: read_docs(repo_root, tool_paths)?,
        scanned_docs: read_docs(repo_root, scanned_paths)?,
    };

    tracing::info!(
        tool_docs = model.tool_docs.len(),
        scanned_docs = model.scanned_docs.len(),
        "loaded documentation files"
    );

    Ok(model)
}

fn read_docs(repo_root: &Utf8Path, paths: Vec<RepoPath>) -> anyhow::Result<Vec<DocFile>> {
    paths
        .into_iter()
        .map(|path| {
            let abs = repo_root.join(path.as_str());
            let bytes = std::fs::read(&abs).with_context(|| format!("read {}", abs))?;
            Ok(DocFile {
                path,
                text: String::from_utf8_lossy(&bytes).into_owned(),
            })
        })
        .collect()
}
