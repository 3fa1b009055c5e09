//! Releases API endpoints.
//!
//! [`ReleasesClient`] maps the three read-only endpoints of the HashiCorp
//! Releases API onto typed async methods. Every call is one request and one
//! response; nothing is cached or retried.

mod options;
mod types;

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::{DEFAULT_TIMEOUT, RELEASES_URL_ENV, api_url_from_env, resolve_api_url};
use crate::http::{ApiError, HttpClient};

pub use options::{ReleaseOptions, encode_release_options};
pub use types::{
    Build, LicenseClass, ProductResponse, Release, ReleaseMetadataResponse, ReleasesResponse,
    Status,
};

/// Operations offered by the Releases API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleasesApi: Send + Sync {
    /// Base URL requests are sent to.
    fn api_url(&self) -> &str;

    /// Lists every product name.
    async fn get_products(&self) -> Result<ProductResponse>;

    /// Lists one page of releases for `product`, newest first.
    async fn get_releases(
        &self,
        product: &str,
        options: &ReleaseOptions,
    ) -> Result<ReleasesResponse>;

    /// Fetches metadata for a single release.
    async fn get_release_metadata(
        &self,
        product: &str,
        version: &str,
    ) -> Result<ReleaseMetadataResponse>;
}

/// HTTP client for the Releases API.
#[derive(Clone, Debug)]
pub struct ReleasesClient {
    http_client: HttpClient,
    api_url: String,
}

impl ReleasesClient {
    /// Creates a client for `api_url`, or for the public API when it is
    /// `None` or empty. Requests time out after one minute.
    #[tracing::instrument]
    pub fn new(api_url: Option<String>) -> Result<Self> {
        Ok(Self::with_http_client(build_client(DEFAULT_TIMEOUT)?, api_url))
    }

    /// Creates a client using the base URL from `RELEASES_URL`, if set.
    pub fn from_env() -> Result<Self> {
        let api_url = api_url_from_env();
        debug!("{} = {:?}", RELEASES_URL_ENV, api_url);
        Self::new(api_url)
    }

    /// Creates a client on top of an already configured reqwest Client.
    pub fn with_http_client(client: Client, api_url: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(client),
            api_url: resolve_api_url(api_url),
        }
    }

    /// Builds `{api_url}/{segments...}`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let invalid = |reason: String| ApiError::InvalidUrl {
            url: format!("{}/{}", self.api_url, segments.join("/")),
            reason,
        };

        let mut url = Url::parse(&self.api_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Transport used by [`ReleasesClient::new`]: the whole request, body
/// included, must finish within `timeout`.
fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(concat!("hcreleases/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?)
}

#[async_trait]
impl ReleasesApi for ReleasesClient {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    #[tracing::instrument(skip(self))]
    async fn get_products(&self) -> Result<ProductResponse> {
        let url = self.endpoint(&["products"])?;
        debug!("Fetching products from {}...", url);
        Ok(self.http_client.get_json(url).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn get_releases(
        &self,
        product: &str,
        options: &ReleaseOptions,
    ) -> Result<ReleasesResponse> {
        let url = encode_release_options(self.endpoint(&["releases", product])?, options);
        debug!("Fetching releases of {} from {}...", product, url);
        Ok(self.http_client.get_json(url).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn get_release_metadata(
        &self,
        product: &str,
        version: &str,
    ) -> Result<ReleaseMetadataResponse> {
        let url = self.endpoint(&["releases", product, version])?;
        debug!("Fetching release {} {} from {}...", product, version, url);
        Ok(self.http_client.get_json(url).await?)
    }
}
