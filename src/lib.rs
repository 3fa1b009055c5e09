//! Client for the HashiCorp Releases API.
//!
//! ```no_run
//! use hcreleases::{ReleaseOptions, ReleasesApi, ReleasesClient};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = ReleasesClient::from_env()?;
//! let releases = client
//!     .get_releases("vault", &ReleaseOptions::new().limit(5))
//!     .await?;
//! for release in releases {
//!     println!("{} {}", release.version, release.timestamp_created);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod http;

pub use api::{
    Build, LicenseClass, ProductResponse, Release, ReleaseMetadataResponse, ReleaseOptions,
    ReleasesApi, ReleasesClient, ReleasesResponse, Status,
};
pub use http::ApiError;
