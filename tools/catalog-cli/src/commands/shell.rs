//! Interactive catalog session.

use anyhow::{bail, Result};
use catalog_app::{CatalogState, ProductForm};
use catalog_core::{FormField, Product, ProductFilter};
use dialoguer::{Input, Select};
use tracing::debug;

use crate::context::{Context, Controller};
use crate::prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Filter,
    Create,
    Edit,
    Delete,
    Reload,
    Quit,
}

impl Action {
    fn label(&self, state: &CatalogState) -> &'static str {
        match self {
            Action::Filter => "Search products",
            Action::Create => "Add product",
            Action::Edit => "Edit product",
            Action::Delete => "Delete product",
            Action::Reload if state.error.is_some() => "Try again",
            Action::Reload => "Reload",
            Action::Quit => "Quit",
        }
    }
}

/// Run the shell command.
pub async fn run(ctx: &Context) -> Result<()> {
    if !ctx.is_interactive() {
        bail!("The shell needs an interactive terminal");
    }

    let controller = ctx.controller(false)?;

    let spinner = ctx.output.spinner("Loading products...");
    let loaded = controller.load().await;
    spinner.finish_and_clear();
    if let Err(e) = loaded {
        debug!(error = %e, "initial load failed");
    }

    let mut query = String::new();
    loop {
        let state = controller.state().await;
        let filter = ProductFilter::new(&query);
        let visible: Vec<Product> = filter.apply(&state.products).into_iter().cloned().collect();
        render(ctx, &state, &filter, &query);

        let actions = available_actions(&state, &visible);
        let labels: Vec<&'static str> = actions.iter().map(|a| a.label(&state)).collect();
        let choice = prompt::ask(move || {
            Select::new()
                .with_prompt("What next?")
                .items(&labels)
                .default(0)
                .interact()
        })
        .await?;

        match actions[choice] {
            Action::Filter => {
                let current = query.clone();
                query = prompt::ask(move || {
                    Input::<String>::new()
                        .with_prompt("Search products")
                        .with_initial_text(current)
                        .allow_empty(true)
                        .interact_text()
                })
                .await?;
            }
            Action::Create => create(ctx, &controller).await?,
            Action::Edit => {
                if let Some(product) = pick(&visible, "Edit which product?").await? {
                    edit(ctx, &controller, product).await?;
                }
            }
            Action::Delete => {
                if let Some(product) = pick(&visible, "Delete which product?").await? {
                    if let Err(e) = controller.delete(product).await {
                        debug!(error = %e, "delete did not commit");
                    }
                }
            }
            Action::Reload => {
                let spinner = ctx.output.spinner("Loading products...");
                let reloaded = controller.reload().await;
                spinner.finish_and_clear();
                if let Err(e) = reloaded {
                    debug!(error = %e, "reload failed");
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn available_actions(state: &CatalogState, visible: &[Product]) -> Vec<Action> {
    if state.error.is_some() && state.products.is_empty() {
        return vec![Action::Reload, Action::Quit];
    }
    let mut actions = vec![Action::Filter, Action::Create];
    if !visible.is_empty() {
        actions.push(Action::Edit);
        actions.push(Action::Delete);
    }
    actions.push(Action::Reload);
    actions.push(Action::Quit);
    actions
}

fn render(ctx: &Context, state: &CatalogState, filter: &ProductFilter, query: &str) {
    ctx.output.header("Product Catalog");

    if let Some(ref error) = state.error {
        if state.products.is_empty() {
            ctx.output.error(error);
            return;
        }
    }
    if !query.is_empty() {
        ctx.output.kv("Search", query);
    }

    let visible = filter.apply(&state.products);
    if !visible.is_empty() {
        ctx.output.product_table(&visible);
    }
    ctx.output.info(&filter.summarize(&state.products).message());
}

async fn pick<'a>(products: &'a [Product], title: &str) -> Result<Option<&'a Product>> {
    let mut items: Vec<String> = products
        .iter()
        .map(|p| format!("{}  {}", p.id, p.title))
        .collect();
    items.push("Cancel".to_string());

    let title = title.to_string();
    let choice = prompt::ask(move || {
        Select::new()
            .with_prompt(title)
            .items(&items)
            .default(0)
            .interact()
    })
    .await?;

    Ok(products.get(choice))
}

async fn create(ctx: &Context, controller: &Controller) -> Result<()> {
    let form = ProductForm::mount(controller.gateway(), None).await;
    ctx.output.header(form.heading());

    let input = prompt::prompt_fields(&form, form.defaults().clone(), &FormField::ALL).await?;
    let data = prompt::validate(&form, input, true, &ctx.output).await?;
    if let Err(e) = controller.submit(&form, data).await {
        debug!(error = %e, "create did not commit");
    }
    Ok(())
}

async fn edit(ctx: &Context, controller: &Controller, product: &Product) -> Result<()> {
    let form = ProductForm::mount(controller.gateway(), Some(product)).await;
    ctx.output.header(form.heading());

    let input = prompt::prompt_fields(&form, form.defaults().clone(), &FormField::ALL).await?;
    let data = prompt::validate(&form, input, true, &ctx.output).await?;
    if let Err(e) = controller.submit(&form, data).await {
        debug!(error = %e, "update did not commit");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ProductId;

    fn state(products: Vec<Product>, error: Option<&str>) -> CatalogState {
        CatalogState {
            products,
            error: error.map(str::to_string),
            ..Default::default()
        }
    }

    fn product() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Alpha Phone".to_string(),
            description: String::new(),
            price: 1.0,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 1,
            brand: "Acme".to_string(),
            category: "smartphones".to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_failed_load_offers_try_again() {
        let state = state(Vec::new(), Some("HTTP error! status: 500"));
        let actions = available_actions(&state, &[]);
        assert_eq!(actions, vec![Action::Reload, Action::Quit]);
        assert_eq!(actions[0].label(&state), "Try again");
    }

    #[test]
    fn test_edit_and_delete_need_visible_products() {
        let empty = state(Vec::new(), None);
        assert!(!available_actions(&empty, &[]).contains(&Action::Edit));

        let listed = state(vec![product()], None);
        let actions = available_actions(&listed, &listed.products);
        assert!(actions.contains(&Action::Edit));
        assert!(actions.contains(&Action::Delete));
        assert_eq!(Action::Reload.label(&listed), "Reload");
    }
}
