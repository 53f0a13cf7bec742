//! Show one product.

use anyhow::{Context as _, Result};
use catalog_data::CatalogGateway;

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let gateway = ctx.gateway()?;
    let product = gateway
        .get_product(args.id)
        .await
        .with_context(|| format!("Failed to load product {}", args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.product_details(&product);

    Ok(())
}
