//! List a page of products.

use anyhow::{Context as _, Result};
use catalog_core::ProductFilter;
use catalog_data::{CatalogGateway, PageRequest};

use super::ListArgs;
use crate::context::Context;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let gateway = ctx.gateway()?;
    let page = PageRequest::new(args.limit.unwrap_or(ctx.config.catalog.page_size), args.skip);

    let spinner = ctx.output.spinner("Loading products...");
    let result = gateway.list_products(page).await;
    spinner.finish_and_clear();
    let response = result.context("Failed to load products")?;

    let filter = ProductFilter::new(args.filter.as_deref().unwrap_or_default());
    let visible = filter.apply(&response.products);

    if ctx.output.is_json() {
        ctx.output.json(&visible);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products {}-{} of {}",
        response.skip + 1,
        response.skip + response.products.len() as u64,
        response.total
    ));
    if !visible.is_empty() {
        ctx.output.product_table(&visible);
    }
    ctx.output
        .info(&filter.summarize(&response.products).message());

    Ok(())
}
