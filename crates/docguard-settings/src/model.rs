use camino::Utf8PathBuf;
use std::time::Duration;

/// Values supplied on the command line. They win over configuration variables.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub manifest_path: Option<Utf8PathBuf>,
    pub manifest_url: Option<String>,
    pub fetch_timeout_secs: Option<u64>,
}

/// Effective settings for one run.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Explicit manifest file. Relative paths are resolved against the repo root by the caller.
    pub manifest_path: Option<Utf8PathBuf>,
    pub manifest_url: Option<String>,
    /// Bearer token sent with the manifest fetch.
    pub token: Option<String>,
    /// `None` waits for the fetch indefinitely.
    pub fetch_timeout: Option<Duration>,
}

// Hand-written so the token never ends up in logs.
impl std::fmt::Debug for ResolvedSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedSettings")
            .field("manifest_path", &self.manifest_path)
            .field("manifest_url", &self.manifest_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("fetch_timeout", &self.fetch_timeout)
            .finish()
    }
}
