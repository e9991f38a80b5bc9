use camino::Utf8PathBuf;
use docguard_settings::{ENV_MANIFEST_PATH, ENV_MANIFEST_URL};

use crate::manifest::VENDORED_MANIFEST;

/// Why the tool manifest could not be produced. Every variant is fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error(
        "no tool manifest found: set {} or {}, or add {}",
        ENV_MANIFEST_PATH,
        ENV_MANIFEST_URL,
        VENDORED_MANIFEST
    )]
    NotFound,

    #[error("read tool manifest {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse tool manifest JSON from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("refusing to fetch tool manifest over plain http from non-loopback host: {url}")]
    InsecureUrl { url: String },

    #[error("build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("fetch tool manifest from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetch tool manifest from {url}: HTTP {status}")]
    Status { url: String, status: u16 },
}
