use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Url;

use super::types::LicenseClass;
use crate::config::DEFAULT_LIMIT;

/// Pagination and filter parameters for listing releases.
///
/// `ReleaseOptions::default()` requests the first page: the newest
/// [`DEFAULT_LIMIT`] releases created before now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseOptions {
    /// Page size. The service caps it at 20. `None` or `0` means 10.
    pub limit: Option<u32>,
    /// RFC3339 cursor. Only releases created strictly before it are
    /// returned. To fetch the next page, pass the `timestamp_created` of the
    /// oldest release on the current one. `None` or empty means now.
    pub after: Option<String>,
    /// Restrict results to one edition.
    pub license_class: Option<LicenseClass>,
}

impl ReleaseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn license_class(mut self, license_class: LicenseClass) -> Self {
        self.license_class = Some(license_class);
        self
    }

    fn effective_limit(&self) -> u32 {
        match self.limit {
            Some(limit) if limit != 0 => limit,
            _ => DEFAULT_LIMIT,
        }
    }

    fn effective_after(&self) -> String {
        match self.after.as_deref() {
            Some(after) if !after.is_empty() => after.to_string(),
            _ => format_cursor(Utc::now()),
        }
    }
}

fn format_cursor(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Appends `limit`, `after` and, when set, `license_class` to `url`.
pub fn encode_release_options(mut url: Url, options: &ReleaseOptions) -> Url {
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("limit", &options.effective_limit().to_string());
        query.append_pair("after", &options.effective_after());
        if let Some(license_class) = options.license_class {
            query.append_pair("license_class", license_class.as_str());
        }
    }
    url
}
