//! Create a product.

use anyhow::Result;
use catalog_app::ProductForm;

use super::CreateArgs;
use crate::context::Context;
use crate::prompt;

/// Run the create command.
pub async fn run(args: CreateArgs, ctx: &Context) -> Result<()> {
    let controller = ctx.controller(false)?;
    let interactive = ctx.is_interactive();

    let spinner = ctx.output.spinner("Loading categories...");
    let form = ProductForm::mount(controller.gateway(), None).await;
    spinner.finish_and_clear();

    ctx.output.header(form.heading());

    let mut input = form.defaults().clone();
    let missing = args.fields.overlay(&mut input);
    if interactive && !missing.is_empty() {
        input = prompt::prompt_fields(&form, input, &missing).await?;
    }
    let data = prompt::validate(&form, input, interactive, &ctx.output).await?;

    ctx.output.debug(form.submit_label(true));
    let product = controller.create(data).await?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
    } else {
        ctx.output.product_details(&product);
    }

    Ok(())
}
