//! Product catalog domain types.
//!
//! This crate provides:
//!
//! - **Products**: catalog records, list pages, speculative entries
//! - **Categories**: remote category listings coerced to one shape
//! - **Forms**: raw input, typed form data, partial patches
//! - **Validation**: the product form schema
//! - **Search**: client-side filtering of the in-memory list
//!
//! # Example
//!
//! ```rust
//! use catalog_core::prelude::*;
//!
//! let schema = ProductSchema::new();
//! let form = schema
//!     .validate(ProductFormData {
//!         title: "Alpha Phone".into(),
//!         description: "A dependable phone for everyday use".into(),
//!         price: 299.0,
//!         stock: 4,
//!         brand: "Acme".into(),
//!         category: "smartphones".into(),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! let product = Product::speculative(TempIdClock::new().next_id(), form.data());
//! assert!(ProductFilter::new("acme").matches(&product));
//! ```

pub mod category;
pub mod form;
pub mod ids;
pub mod product;
pub mod search;
pub mod validation;

pub use category::{Category, CategoryEntry};
pub use form::{FormField, FormInput, ProductFormData, ProductPatch};
pub use ids::{ProductId, TempIdClock};
pub use product::{Product, ProductsResponse, StockLevel, PLACEHOLDER_IMAGE};
pub use search::{ListSummary, ProductFilter};
pub use validation::{ProductSchema, ValidatedForm, ValidationErrors};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::category::{Category, CategoryEntry};
    pub use crate::form::{FormField, FormInput, ProductFormData, ProductPatch};
    pub use crate::ids::{ProductId, TempIdClock};
    pub use crate::product::{Product, ProductsResponse, StockLevel};
    pub use crate::search::{ListSummary, ProductFilter};
    pub use crate::validation::{ProductSchema, ValidatedForm, ValidationErrors};
}
