//! Tool manifest resolution: explicit path, sibling checkout, URL, vendored copy.

use crate::error::ManifestError;
use crate::fetch::fetch_manifest;
use camino::{Utf8Path, Utf8PathBuf};
use docguard_settings::ResolvedSettings;
use serde_json::Value;

/// Manifest in a sibling checkout of the tool server, relative to the repo root.
pub const SIBLING_MANIFEST: &str = "../ads-mcp-server/tools-manifest.json";

/// Copy committed to this repository, used when nothing else is available.
pub const VENDORED_MANIFEST: &str = "scripts/vendor/tools-manifest.json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManifestSource {
    /// Explicit path from settings.
    Path,
    Sibling,
    Url,
    Vendored,
}

impl ManifestSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestSource::Path => "path",
            ManifestSource::Sibling => "sibling",
            ManifestSource::Url => "url",
            ManifestSource::Vendored => "vendored",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedManifest {
    pub source: ManifestSource,
    /// URL, or file path relative to the repo root when it lives under (or beside) it.
    pub origin: String,
    pub value: Value,
}

/// Produce the tool manifest from the first available source.
///
/// Priority: explicit path, sibling checkout (only if the file exists), URL, vendored
/// copy. The first source that applies is final: an unreadable or malformed manifest
/// there is an error, not a reason to try the next one.
pub fn resolve_manifest(
    repo_root: &Utf8Path,
    settings: &ResolvedSettings,
) -> Result<ResolvedManifest, ManifestError> {
    if let Some(path) = &settings.manifest_path {
        let path = if path.is_absolute() {
            path.clone()
        } else {
            repo_root.join(path)
        };
        return from_file(repo_root, ManifestSource::Path, path);
    }

    let sibling = repo_root.join(SIBLING_MANIFEST);
    if sibling.is_file() {
        return from_file(repo_root, ManifestSource::Sibling, sibling);
    }

    if let Some(url) = &settings.manifest_url {
        let value = fetch_manifest(url, settings.token.as_deref(), settings.fetch_timeout)?;
        return Ok(resolved(ManifestSource::Url, url.clone(), value));
    }

    let vendored = repo_root.join(VENDORED_MANIFEST);
    if vendored.is_file() {
        return from_file(repo_root, ManifestSource::Vendored, vendored);
    }

    Err(ManifestError::NotFound)
}

fn from_file(
    repo_root: &Utf8Path,
    source: ManifestSource,
    path: Utf8PathBuf,
) -> Result<ResolvedManifest, ManifestError> {
    let text = std::fs::read_to_string(&path).map_err(|source| ManifestError::Read {
        path: path.clone(),
        source,
    })?;
    let origin = path
        .strip_prefix(repo_root)
        .map(|rel| rel.to_string())
        .unwrap_or_else(|_| path.to_string());
    let value = serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
        origin: origin.clone(),
        source,
    })?;
    Ok(resolved(source, origin, value))
}

fn resolved(source: ManifestSource, origin: String, value: Value) -> ResolvedManifest {
    tracing::info!(source = source.as_str(), origin = %origin, "resolved tool manifest");
    ResolvedManifest {
        source,
        origin,
        value,
    }
}
