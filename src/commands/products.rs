use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::api::ReleasesApi;

use super::{OutputFormat, write_json};

/// List every product known to the service
#[tracing::instrument(skip(api, out))]
pub async fn products<A, W>(api: &A, format: OutputFormat, out: &mut W) -> Result<()>
where
    A: ReleasesApi + ?Sized,
    W: Write,
{
    let products = api
        .get_products()
        .await
        .with_context(|| format!("Failed to list products from {}", api.api_url()))?;
    debug!("Found {} product(s)", products.len());

    if format == OutputFormat::Json {
        return write_json(out, &products);
    }

    if products.is_empty() {
        writeln!(out, "No products found.")?;
        return Ok(());
    }

    for product in &products {
        writeln!(out, "{}", product)?;
    }
    Ok(())
}
