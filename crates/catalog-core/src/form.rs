//! Form payloads: raw input, typed form data and partial patches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editable product fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Title,
    Description,
    Price,
    DiscountPercentage,
    Stock,
    Rating,
    Brand,
    Category,
}

impl FormField {
    /// All fields in the order the form presents them.
    pub const ALL: [FormField; 8] = [
        FormField::Title,
        FormField::Description,
        FormField::Price,
        FormField::DiscountPercentage,
        FormField::Stock,
        FormField::Rating,
        FormField::Brand,
        FormField::Category,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Price => "price",
            FormField::DiscountPercentage => "discountPercentage",
            FormField::Stock => "stock",
            FormField::Rating => "rating",
            FormField::Brand => "brand",
            FormField::Category => "category",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Product Title",
            FormField::Description => "Description",
            FormField::Price => "Price",
            FormField::DiscountPercentage => "Discount %",
            FormField::Stock => "Stock",
            FormField::Rating => "Rating",
            FormField::Brand => "Brand",
            FormField::Category => "Category",
        }
    }

    /// Whether the form marks the field as required.
    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::DiscountPercentage | FormField::Rating)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed product attributes supplied by the form.
///
/// Excludes the id, thumbnail and images, which the form never edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductFormData {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: i64,
    pub brand: String,
    pub category: String,
}

impl Default for ProductFormData {
    /// Defaults for a new product: zero numbers, empty text.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: 0.0,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            brand: String::new(),
            category: String::new(),
        }
    }
}

/// Raw field values as typed by the user.
///
/// Every value is kept as text; numeric parsing happens in the schema so that
/// unparseable input is reported as a field violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    pub title: String,
    pub description: String,
    pub price: String,
    pub discount_percentage: String,
    pub rating: String,
    pub stock: String,
    pub brand: String,
    pub category: String,
}

impl FormInput {
    /// Get the raw value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
            FormField::DiscountPercentage => &self.discount_percentage,
            FormField::Stock => &self.stock,
            FormField::Rating => &self.rating,
            FormField::Brand => &self.brand,
            FormField::Category => &self.category,
        }
    }

    /// Set the raw value of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Price => self.price = value,
            FormField::DiscountPercentage => self.discount_percentage = value,
            FormField::Stock => self.stock = value,
            FormField::Rating => self.rating = value,
            FormField::Brand => self.brand = value,
            FormField::Category => self.category = value,
        }
    }

    /// Overlay the fields set in a patch.
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(ref title) = patch.title {
            self.title = title.clone();
        }
        if let Some(ref description) = patch.description {
            self.description = description.clone();
        }
        if let Some(price) = patch.price {
            self.price = price.to_string();
        }
        if let Some(discount) = patch.discount_percentage {
            self.discount_percentage = discount.to_string();
        }
        if let Some(rating) = patch.rating {
            self.rating = rating.to_string();
        }
        if let Some(stock) = patch.stock {
            self.stock = stock.to_string();
        }
        if let Some(ref brand) = patch.brand {
            self.brand = brand.clone();
        }
        if let Some(ref category) = patch.category {
            self.category = category.clone();
        }
    }
}

impl From<&ProductFormData> for FormInput {
    fn from(data: &ProductFormData) -> Self {
        Self {
            title: data.title.clone(),
            description: data.description.clone(),
            price: data.price.to_string(),
            discount_percentage: data.discount_percentage.to_string(),
            rating: data.rating.to_string(),
            stock: data.stock.to_string(),
            brand: data.brand.clone(),
            category: data.category.clone(),
        }
    }
}

/// Partial form data; absent fields are left out of the JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductPatch {
    /// Check whether the patch sets no field at all.
    pub fn is_empty(&self) -> bool {
        self == &ProductPatch::default()
    }
}

impl From<&ProductFormData> for ProductPatch {
    fn from(data: &ProductFormData) -> Self {
        Self {
            title: Some(data.title.clone()),
            description: Some(data.description.clone()),
            price: Some(data.price),
            discount_percentage: Some(data.discount_percentage),
            rating: Some(data.rating),
            stock: Some(data.stock),
            brand: Some(data.brand.clone()),
            category: Some(data.category.clone()),
        }
    }
}
