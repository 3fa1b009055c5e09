//! JSON request executor shared by every endpoint.

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::error::{ApiError, classify_failure};

/// Media type sent in both `Content-Type` and `Accept`.
pub const JSON_MEDIA_TYPE: &str = "application/json; charset=utf-8";

/// Thin wrapper over a configured reqwest Client.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes a 200 JSON response into `T`.
    ///
    /// Any other status is turned into [`ApiError::Remote`] or
    /// [`ApiError::UnknownStatus`] depending on whether the body is a JSON
    /// error object. Nothing is retried.
    #[tracing::instrument(skip(self, url), fields(url = %url))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET JSON from {}...", url);

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Received status {} ({} bytes)", status.as_u16(), body.len());

        if status != StatusCode::OK {
            return Err(classify_failure(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}
