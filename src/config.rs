//! Client configuration defaults and base URL resolution.

use std::time::Duration;

/// Base URL of the public HashiCorp Releases API.
pub const DEFAULT_API_URL: &str = "https://api.releases.hashicorp.com/v1";

/// Environment variable that overrides [`DEFAULT_API_URL`].
pub const RELEASES_URL_ENV: &str = "RELEASES_URL";

/// Whole-request timeout applied to every call made by the client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Number of releases requested when the caller does not set a limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size the service accepts. Not enforced locally.
pub const MAX_LIMIT: u32 = 20;

/// Picks the base URL to talk to.
///
/// `None` and empty strings fall back to [`DEFAULT_API_URL`]. A trailing
/// slash is dropped so endpoint paths can be appended uniformly.
pub fn resolve_api_url(api_url: Option<String>) -> String {
    match api_url {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

/// Reads the base URL override from the process environment.
pub fn api_url_from_env() -> Option<String> {
    std::env::var(RELEASES_URL_ENV).ok()
}
