//! Edit a product.

use anyhow::{Context as _, Result};
use catalog_app::ProductForm;
use catalog_core::FormField;
use catalog_data::CatalogGateway;

use super::EditArgs;
use crate::context::Context;
use crate::prompt;

/// Run the edit command.
pub async fn run(args: EditArgs, ctx: &Context) -> Result<()> {
    let controller = ctx.controller(false)?;
    let interactive = ctx.is_interactive();

    let spinner = ctx.output.spinner("Loading product...");
    let product = controller.gateway().get_product(args.id).await;
    let product = match product {
        Ok(product) => product,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e).with_context(|| format!("Failed to load product {}", args.id));
        }
    };
    let form = ProductForm::mount(controller.gateway(), Some(&product)).await;
    spinner.finish_and_clear();

    ctx.output.header(&format!("{}: {}", form.heading(), product.title));

    let mut input = form.defaults().clone();
    if args.fields.is_empty() && interactive {
        // No flags: walk every field with the current values pre-filled.
        input = prompt::prompt_fields(&form, input, &FormField::ALL).await?;
    } else {
        args.fields.overlay(&mut input);
    }
    let data = prompt::validate(&form, input, interactive, &ctx.output).await?;

    let updated = controller.update(&product, data).await?;

    if ctx.output.is_json() {
        ctx.output.json(&updated);
    } else {
        ctx.output.product_details(&updated);
    }

    Ok(())
}
