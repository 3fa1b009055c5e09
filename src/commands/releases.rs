use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::api::{Release, ReleaseOptions, ReleasesApi};

use super::{OutputFormat, write_json};

/// List one page of releases for a product, newest first
#[tracing::instrument(skip(api, out))]
pub async fn releases<A, W>(
    api: &A,
    product: &str,
    options: &ReleaseOptions,
    format: OutputFormat,
    out: &mut W,
) -> Result<()>
where
    A: ReleasesApi + ?Sized,
    W: Write,
{
    let releases = api
        .get_releases(product, options)
        .await
        .with_context(|| format!("Failed to list releases of {}", product))?;
    debug!("Found {} release(s) of {}", releases.len(), product);

    if format == OutputFormat::Json {
        return write_json(out, &releases);
    }

    if releases.is_empty() {
        writeln!(out, "No releases found for {}.", product)?;
        return Ok(());
    }

    let width = releases.iter().map(|r| r.version.len()).max().unwrap_or(0);
    for release in &releases {
        writeln!(out, "{}", summary_line(release, width))?;
    }

    // The oldest entry's creation time is the cursor for the next page.
    if let Some(last) = releases.last() {
        debug!("Next page cursor: {}", last.timestamp_created);
    }

    Ok(())
}

fn summary_line(release: &Release, width: usize) -> String {
    let mut line = format!(
        "{:<width$}  {}  {}  {}",
        release.version,
        release.timestamp_created,
        release.license_class,
        release.status.state,
        width = width
    );
    if release.is_prerelease {
        line.push_str(" (prerelease)");
    }
    line
}
