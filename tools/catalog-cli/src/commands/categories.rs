//! List product categories.

use anyhow::{Context as _, Result};
use catalog_data::CatalogGateway;

use crate::context::Context;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let gateway = ctx.gateway()?;
    let categories = gateway
        .list_categories()
        .await
        .context("Failed to load categories")?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    let widths = [28, 0];
    ctx.output.table_row(&["SLUG", "LABEL"], &widths);
    for category in &categories {
        ctx.output
            .table_row(&[category.slug.as_str(), category.label().as_str()], &widths);
    }
    ctx.output.info(&format!("{} categories", categories.len()));

    Ok(())
}
