//! Remote manifest fetch.

use crate::error::ManifestError;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::net::IpAddr;
use std::time::Duration;

/// Sent with every manifest request.
pub const USER_AGENT: &str = "docguard-guardrails";

/// GET `url` and parse the body as JSON.
///
/// Any status >= 400 is an error. There is no retry, and with `timeout` unset the
/// request may wait indefinitely.
pub fn fetch_manifest(
    url: &str,
    token: Option<&str>,
    timeout: Option<Duration>,
) -> Result<Value, ManifestError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ManifestError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    check_transport(&parsed)?;

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(ManifestError::Client)?;

    let mut request = client.get(parsed).header(ACCEPT, "application/json");
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    tracing::debug!(url, authenticated = token.is_some(), "fetching tool manifest");

    let response = request.send().map_err(|source| ManifestError::Fetch {
        url: url.to_string(),
        source,
    })?;

    let status = response.status().as_u16();
    tracing::debug!(url, status, "manifest response");
    if status >= 400 {
        return Err(ManifestError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(|source| ManifestError::Fetch {
        url: url.to_string(),
        source,
    })?;

    serde_json::from_str(&body).map_err(|source| ManifestError::Parse {
        origin: url.to_string(),
        source,
    })
}

/// `https` anywhere; plain `http` only for loopback hosts.
fn check_transport(url: &reqwest::Url) -> Result<(), ManifestError> {
    match url.scheme() {
        "https" => Ok(()),
        "http" if is_loopback(url.host_str().unwrap_or("")) => Ok(()),
        "http" => Err(ManifestError::InsecureUrl {
            url: url.to_string(),
        }),
        other => Err(ManifestError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme `{other}`"),
        }),
    }
}

fn is_loopback(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    if host == "localhost" {
        return true;
    }
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .map(|ip| ip.is_loopback())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> reqwest::Url {
        reqwest::Url::parse(s).expect("valid url")
    }

    #[test]
    fn https_is_always_allowed() {
        assert!(check_transport(&url("https://example.com/tools.json")).is_ok());
    }

    #[test]
    fn http_only_for_loopback() {
        assert!(check_transport(&url("http://127.0.0.1:8080/tools.json")).is_ok());
        assert!(check_transport(&url("http://localhost/tools.json")).is_ok());
        assert!(check_transport(&url("http://[::1]/tools.json")).is_ok());
        assert!(matches!(
            check_transport(&url("http://example.com/tools.json")),
            Err(ManifestError::InsecureUrl { .. })
        ));
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert!(matches!(
            check_transport(&url("ftp://example.com/tools.json")),
            Err(ManifestError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn unparseable_url_is_rejected_before_any_request() {
        let err = fetch_manifest("not a url", None, None).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidUrl { .. }));
        assert!(err.to_string().contains("not a url"));
    }
}
