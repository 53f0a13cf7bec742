//! Delete a product.

use anyhow::{bail, Context as _, Result};
use catalog_app::DeleteOutcome;
use catalog_data::CatalogGateway;

use super::DeleteArgs;
use crate::context::Context;

/// Run the delete command.
pub async fn run(args: DeleteArgs, ctx: &Context) -> Result<()> {
    check_confirmable(args.yes, ctx.is_interactive())?;
    let controller = ctx.controller(args.yes)?;

    let product = controller
        .gateway()
        .get_product(args.id)
        .await
        .with_context(|| format!("Failed to load product {}", args.id))?;

    match controller.delete(&product).await? {
        DeleteOutcome::Deleted => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "deleted": product.id }));
            }
        }
        DeleteOutcome::Declined => ctx.output.warn("Deletion cancelled"),
    }

    Ok(())
}

/// A delete needs either `--yes` or a terminal to ask on.
fn check_confirmable(assume_yes: bool, interactive: bool) -> Result<()> {
    if !assume_yes && !interactive {
        bail!("Deleting needs confirmation but no terminal is attached. Pass --yes to proceed.");
    }
    Ok(())
}
