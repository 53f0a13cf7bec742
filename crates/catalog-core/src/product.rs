//! Product records and list pages.

use crate::form::ProductFormData;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Image shown for a product the server has not confirmed yet.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// A product in the catalog.
///
/// Remote payloads carry many more attributes; unknown fields are ignored and
/// missing ones fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier (temporary for speculative entries).
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    /// Discount in percent, 0 to 100.
    #[serde(default)]
    pub discount_percentage: f64,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub brand: String,
    /// Category slug.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Build a speculative product from form data.
    ///
    /// The product gets the given temporary id and placeholder media.
    pub fn speculative(id: ProductId, data: &ProductFormData) -> Self {
        Self {
            id,
            title: data.title.clone(),
            description: data.description.clone(),
            price: data.price,
            discount_percentage: data.discount_percentage,
            rating: data.rating,
            stock: data.stock,
            brand: data.brand.clone(),
            category: data.category.clone(),
            thumbnail: PLACEHOLDER_IMAGE.to_string(),
            images: vec![PLACEHOLDER_IMAGE.to_string()],
        }
    }

    /// Copy of this product with the form values overlaid.
    ///
    /// Id, thumbnail and images are kept.
    pub fn merged_with(&self, data: &ProductFormData) -> Self {
        Self {
            title: data.title.clone(),
            description: data.description.clone(),
            price: data.price,
            discount_percentage: data.discount_percentage,
            rating: data.rating,
            stock: data.stock,
            brand: data.brand.clone(),
            category: data.category.clone(),
            ..self.clone()
        }
    }

    /// Editable attributes of this product.
    pub fn form_data(&self) -> ProductFormData {
        ProductFormData {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            discount_percentage: self.discount_percentage,
            rating: self.rating,
            stock: self.stock,
            brand: self.brand.clone(),
            category: self.category.clone(),
        }
    }

    /// Check if the product is discounted.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }

    /// Stock level bucket for display.
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_units(self.stock)
    }
}

/// Stock level buckets used when rendering the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockLevel {
    /// More than 50 units.
    Plenty,
    /// 11 to 50 units.
    Limited,
    /// 10 units or fewer.
    Low,
}

impl StockLevel {
    pub fn from_units(units: i64) -> Self {
        if units > 50 {
            StockLevel::Plenty
        } else if units > 10 {
            StockLevel::Limited
        } else {
            StockLevel::Low
        }
    }
}

/// One page of products as returned by list and search requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}
