//! Product form lifecycle.

use catalog_core::{
    Category, FormInput, Product, ProductFormData, ProductSchema, ValidatedForm, ValidationErrors,
};
use catalog_data::CatalogGateway;
use tracing::warn;

/// A mounted create or edit form.
///
/// Mounting fetches the category list once. If that fails the form still
/// works, with an empty category list and no membership check.
#[derive(Debug, Clone)]
pub struct ProductForm {
    editing: Option<Product>,
    schema: ProductSchema,
    defaults: FormInput,
}

impl ProductForm {
    /// Mount a form; `editing` selects edit mode and pre-fills its values.
    pub async fn mount<G>(gateway: &G, editing: Option<&Product>) -> Self
    where
        G: CatalogGateway + ?Sized,
    {
        let categories = match gateway.list_categories().await {
            Ok(categories) => categories,
            Err(err) => {
                warn!(error = %err, "failed to load categories");
                Vec::new()
            }
        };
        Self::with_categories(editing, categories)
    }

    /// Build a form from an already known category list.
    pub fn with_categories(editing: Option<&Product>, categories: Vec<Category>) -> Self {
        let defaults = match editing {
            Some(product) => FormInput::from(&product.form_data()),
            None => FormInput::from(&ProductFormData::default()),
        };
        Self {
            editing: editing.cloned(),
            schema: ProductSchema::new().with_categories(categories),
            defaults,
        }
    }

    /// The product being edited, if in edit mode.
    pub fn editing(&self) -> Option<&Product> {
        self.editing.as_ref()
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit() {
            "Edit Product"
        } else {
            "Create New Product"
        }
    }

    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (submitting, self.is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Update Product",
            (false, false) => "Create Product",
        }
    }

    /// Initial values for every field.
    pub fn defaults(&self) -> &FormInput {
        &self.defaults
    }

    pub fn categories(&self) -> &[Category] {
        self.schema.categories()
    }

    pub fn schema(&self) -> &ProductSchema {
        &self.schema
    }

    /// Validate raw input. Nothing reaches the controller unless this passes.
    pub fn submit(&self, input: &FormInput) -> Result<ValidatedForm, ValidationErrors> {
        self.schema.parse(input)
    }
}
