use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names of every product known to the service.
pub type ProductResponse = Vec<String>;

/// Releases of one product, newest first as returned by the service.
pub type ReleasesResponse = Vec<Release>;

/// Metadata for a single product release.
pub type ReleaseMetadataResponse = Release;

/// Product edition a release belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseClass {
    Enterprise,
    Oss,
}

impl LicenseClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseClass::Enterprise => "enterprise",
            LicenseClass::Oss => "oss",
        }
    }
}

impl fmt::Display for LicenseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enterprise" => Ok(LicenseClass::Enterprise),
            "oss" => Ok(LicenseClass::Oss),
            _ => anyhow::bail!("Unknown license class: {}. Expected oss or enterprise.", s),
        }
    }
}

/// Decodes `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single product release and its metadata.
///
/// Only `name` and `version` are required. Every other key may be missing
/// or `null` and decodes to its empty value.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Release {
    #[serde(default, deserialize_with = "null_as_default")]
    pub builds: Vec<Build>,
    /// Docker image name and tag in the form `name:tag`.
    #[serde(default)]
    pub docker_name_tag: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_prerelease: bool,
    /// `enterprise` or `oss`, kept as sent by the service.
    #[serde(default, deserialize_with = "null_as_default")]
    pub license_class: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
    /// RFC3339 creation time. Also the `after` cursor for the next page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp_created: String,
    /// RFC3339 time of the last metadata change. Status transitions are
    /// tracked in [`Status::timestamp_updated`] instead.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp_updated: String,
    /// Announcement post. Patch releases usually point at their parent.
    #[serde(default)]
    pub url_blogpost: Option<String>,
    #[serde(default)]
    pub url_changelog: Option<String>,
    #[serde(default)]
    pub url_docker_registry_dockerhub: Option<String>,
    #[serde(default)]
    pub url_docker_registry_ecr: Option<String>,
    #[serde(default)]
    pub url_license: Option<String>,
    #[serde(default)]
    pub url_project_website: Option<String>,
    #[serde(default)]
    pub url_release_notes: Option<String>,
    /// Checksums of every build artifact in this release.
    #[serde(default)]
    pub url_shasums: Option<String>,
    /// Detached signatures of the checksums file.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_shasums_signatures: Vec<String>,
    /// Empty for enterprise products.
    #[serde(default)]
    pub url_source_repository: Option<String>,
    pub version: String,
}

/// One released artifact for an os/arch combination.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Build {
    #[serde(default, deserialize_with = "null_as_default")]
    pub arch: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub os: String,
    /// Built for convenience but not officially supported.
    #[serde(default, deserialize_with = "null_as_default")]
    pub unsupported: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

/// Lifecycle state of a release.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Status {
    /// Explains the most recent change. Always present for withdrawn releases.
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default)]
    pub timestamp_updated: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE_JSON: &str = r#"{
        "builds": [
            {"arch": "amd64", "os": "linux", "unsupported": false, "url": "https://releases.hashicorp.com/vault/1.2.3/vault_1.2.3_linux_amd64.zip"},
            {"arch": "arm", "os": "freebsd", "unsupported": true, "url": "https://releases.hashicorp.com/vault/1.2.3/vault_1.2.3_freebsd_arm.zip"}
        ],
        "docker_name_tag": "vault:1.2.3",
        "is_prerelease": false,
        "license_class": "oss",
        "name": "vault",
        "status": {"state": "supported", "timestamp_updated": "2019-09-09T18:40:45.000Z"},
        "timestamp_created": "2019-09-09T18:40:45.000Z",
        "timestamp_updated": "2019-09-09T18:40:45.000Z",
        "url_changelog": "https://github.com/hashicorp/vault/blob/main/CHANGELOG.md",
        "url_license": "https://github.com/hashicorp/vault/blob/main/LICENSE",
        "url_shasums": "https://releases.hashicorp.com/vault/1.2.3/vault_1.2.3_SHA256SUMS",
        "url_shasums_signatures": [
            "https://releases.hashicorp.com/vault/1.2.3/vault_1.2.3_SHA256SUMS.sig"
        ],
        "url_source_repository": "https://github.com/hashicorp/vault",
        "version": "1.2.3"
    }"#;

    #[test]
    fn test_release_decodes_all_fields() {
        let release: Release = serde_json::from_str(RELEASE_JSON).unwrap();

        assert_eq!(release.name, "vault");
        assert_eq!(release.version, "1.2.3");
        assert_eq!(release.license_class, "oss");
        assert!(!release.is_prerelease);
        assert_eq!(release.docker_name_tag.as_deref(), Some("vault:1.2.3"));
        assert_eq!(release.status.state, "supported");
        assert_eq!(release.status.message, None);
        assert_eq!(release.timestamp_created, "2019-09-09T18:40:45.000Z");
        assert_eq!(release.builds.len(), 2);
        assert_eq!(release.builds[0].os, "linux");
        assert_eq!(release.builds[0].arch, "amd64");
        assert!(release.builds[1].unsupported);
        assert_eq!(release.url_shasums_signatures.len(), 1);
        assert_eq!(
            release.url_source_repository.as_deref(),
            Some("https://github.com/hashicorp/vault")
        );
        assert_eq!(release.url_blogpost, None);
        assert_eq!(release.url_docker_registry_ecr, None);
    }

    #[test]
    fn test_release_reencodes_to_same_json() {
        let release: Release = serde_json::from_str(RELEASE_JSON).unwrap();
        let value = serde_json::to_value(&release).unwrap();
        let again: Release = serde_json::from_value(value).unwrap();
        assert_eq!(release, again);
    }

    #[test]
    fn test_withdrawn_status_carries_message() {
        let status: Status = serde_json::from_str(
            r#"{"state": "withdrawn", "message": "security issue", "timestamp_updated": "2021-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(status.state, "withdrawn");
        assert_eq!(status.message.as_deref(), Some("security issue"));
        assert_eq!(
            status.timestamp_updated.map(|t| t.to_rfc3339()).as_deref(),
            Some("2021-01-01T00:00:00+00:00")
        );
    }

    #[test]
    fn test_release_tolerates_null_collections() {
        let release: Release = serde_json::from_str(
            r#"{
                "builds": null,
                "name": "vault",
                "url_shasums_signatures": null,
                "version": "1.2.3"
            }"#,
        )
        .unwrap();
        assert!(release.builds.is_empty());
        assert!(release.url_shasums_signatures.is_empty());
    }

    #[test]
    fn test_release_with_only_identity_fields() {
        let release: Release =
            serde_json::from_str(r#"{"name": "consul", "version": "1.0.0"}"#).unwrap();
        assert_eq!(release.name, "consul");
        assert_eq!(release.version, "1.0.0");
        assert!(!release.is_prerelease);
        assert_eq!(release.license_class, "");
        assert_eq!(release.timestamp_created, "");
        assert_eq!(release.status, Status::default());
    }

    #[test]
    fn test_release_null_scalars_decode_empty() {
        let release: Release = serde_json::from_str(
            r#"{
                "builds": [{"arch": "amd64", "os": null, "unsupported": null, "url": "https://example.com/a.zip"}],
                "is_prerelease": null,
                "license_class": null,
                "name": "nomad",
                "status": null,
                "timestamp_created": null,
                "version": "1.7.0"
            }"#,
        )
        .unwrap();
        assert_eq!(release.builds[0].os, "");
        assert!(!release.builds[0].unsupported);
        assert!(!release.is_prerelease);
        assert_eq!(release.license_class, "");
        assert_eq!(release.status.state, "");
    }

    #[test]
    fn test_status_without_timestamp() {
        let status: Status = serde_json::from_str(r#"{"state": "supported"}"#).unwrap();
        assert_eq!(status.state, "supported");
        assert_eq!(status.timestamp_updated, None);
    }

    #[test]
    fn test_release_missing_version_is_rejected() {
        assert!(serde_json::from_str::<Release>(r#"{"name": "vault"}"#).is_err());
    }

    #[test]
    fn test_license_class_parse() {
        assert_eq!("oss".parse::<LicenseClass>().unwrap(), LicenseClass::Oss);
        assert_eq!("OSS".parse::<LicenseClass>().unwrap(), LicenseClass::Oss);
        assert_eq!(
            "enterprise".parse::<LicenseClass>().unwrap(),
            LicenseClass::Enterprise
        );
        assert!("community".parse::<LicenseClass>().is_err());
    }

    #[test]
    fn test_license_class_display() {
        assert_eq!(LicenseClass::Oss.to_string(), "oss");
        assert_eq!(LicenseClass::Enterprise.to_string(), "enterprise");
    }
}
