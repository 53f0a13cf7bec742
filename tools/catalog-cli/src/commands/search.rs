//! Server-side product search.

use anyhow::{Context as _, Result};
use catalog_data::CatalogGateway;

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let gateway = ctx.gateway()?;

    let spinner = ctx.output.spinner(&format!("Searching for \"{}\"...", args.query));
    let result = gateway.search_products(&args.query).await;
    spinner.finish_and_clear();
    let response =
        result.with_context(|| format!("Failed to search products for \"{}\"", args.query))?;

    if ctx.output.is_json() {
        ctx.output.json(&response.products);
        return Ok(());
    }

    ctx.output.header(&format!("Results for \"{}\"", args.query));
    if response.products.is_empty() {
        ctx.output.info("No products found. Try adjusting your search");
        return Ok(());
    }

    let products: Vec<_> = response.products.iter().collect();
    ctx.output.product_table(&products);
    ctx.output.info(&format!(
        "Showing {} of {} products",
        response.products.len(),
        response.total
    ));

    Ok(())
}
