use crate::model::{Overrides, ResolvedSettings};
use camino::Utf8PathBuf;
use std::time::Duration;

pub const ENV_MANIFEST_PATH: &str = "TOOLS_MANIFEST_PATH";
pub const ENV_MANIFEST_URL: &str = "TOOLS_MANIFEST_URL";
pub const ENV_MANIFEST_TOKEN: &str = "TOOLS_MANIFEST_TOKEN";
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Token variables in lookup order; the first non-empty one wins.
pub const TOKEN_VARS: [&str; 2] = [ENV_MANIFEST_TOKEN, ENV_GITHUB_TOKEN];

/// Resolve effective settings from configuration variables and CLI overrides.
///
/// Empty or whitespace-only values count as unset.
pub fn resolve_settings<F>(lookup: F, overrides: Overrides) -> anyhow::Result<ResolvedSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| non_empty(lookup(name));

    let manifest_path = overrides
        .manifest_path
        .filter(|p| !p.as_str().trim().is_empty())
        .or_else(|| var(ENV_MANIFEST_PATH).map(Utf8PathBuf::from));

    let manifest_url = non_empty(overrides.manifest_url).or_else(|| var(ENV_MANIFEST_URL));

    let token = TOKEN_VARS.iter().find_map(|&name| var(name));

    let fetch_timeout = match overrides.fetch_timeout_secs {
        Some(0) => anyhow::bail!("fetch timeout must be at least 1 second"),
        Some(secs) => Some(Duration::from_secs(secs)),
        None => None,
    };

    Ok(ResolvedSettings {
        manifest_path,
        manifest_url,
        token,
        fetch_timeout,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
