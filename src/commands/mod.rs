//! Command implementations behind the `hcreleases` binary.
//!
//! Each command talks to the service through [`ReleasesApi`] and writes its
//! report to the given writer, so tests can run them against a mock.
//!
//! [`ReleasesApi`]: crate::api::ReleasesApi

mod products;
mod releases;
mod show;

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

pub use products::products;
pub use releases::releases;
pub use show::show;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// Pretty-printed JSON of the decoded response
    Json,
}

pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("Failed to serialize response")?;
    writeln!(out)?;
    Ok(())
}
