use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::api::{Release, ReleasesApi};

use super::{OutputFormat, write_json};

/// Show detailed metadata for one release
#[tracing::instrument(skip(api, out))]
pub async fn show<A, W>(
    api: &A,
    product: &str,
    version: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()>
where
    A: ReleasesApi + ?Sized,
    W: Write,
{
    debug!("Showing {} {}", product, version);
    let release = api
        .get_release_metadata(product, version)
        .await
        .with_context(|| format!("Failed to fetch release {} {}", product, version))?;

    match format {
        OutputFormat::Json => write_json(out, &release),
        OutputFormat::Text => print_release(&release, out),
    }
}

fn print_release<W: Write>(release: &Release, out: &mut W) -> Result<()> {
    writeln!(out, "Product: {}", release.name)?;
    writeln!(out, "Version: {}", release.version)?;
    writeln!(out, "License class: {}", release.license_class)?;
    if release.is_prerelease {
        writeln!(out, "Prerelease: yes")?;
    }
    match release.status.timestamp_updated {
        Some(updated) => writeln!(
            out,
            "Status: {} (updated {})",
            release.status.state,
            updated.to_rfc3339()
        )?,
        None => writeln!(out, "Status: {}", release.status.state)?,
    }
    if let Some(ref message) = release.status.message {
        writeln!(out, "Status message: {}", message)?;
    }
    writeln!(out, "Created: {}", release.timestamp_created)?;

    let links = [
        ("Changelog", &release.url_changelog),
        ("Release notes", &release.url_release_notes),
        ("Source", &release.url_source_repository),
        ("Checksums", &release.url_shasums),
    ];
    for (label, url) in links {
        if let Some(url) = url {
            writeln!(out, "{}: {}", label, url)?;
        }
    }
    if let Some(ref tag) = release.docker_name_tag {
        writeln!(out, "Docker image: {}", tag)?;
    }

    if release.builds.is_empty() {
        writeln!(out, "\nNo builds.")?;
        return Ok(());
    }

    writeln!(out, "\nBuilds:")?;
    for build in &release.builds {
        let marker = if build.unsupported { " (unsupported)" } else { "" };
        writeln!(out, "  {}/{}  {}{}", build.os, build.arch, build.url, marker)?;
    }

    Ok(())
}
