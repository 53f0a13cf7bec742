//! Product form schema.
//!
//! Validation is synchronous and pure. A successful run yields a
//! [`ValidatedForm`], the only way to hand form data to mutation code.

use std::collections::BTreeMap;
use std::fmt;

use crate::category::Category;
use crate::form::{FormField, FormInput, ProductFormData};

const TITLE_MIN_CHARS: usize = 3;
const TITLE_MAX_CHARS: usize = 100;
const DESCRIPTION_MIN_CHARS: usize = 10;
const BRAND_MIN_CHARS: usize = 2;
const MIN_PRICE: f64 = 0.01;
const MAX_DISCOUNT: f64 = 100.0;
const MAX_RATING: f64 = 5.0;

/// Field-keyed violation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless the field already has one.
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Message for a field, if it failed.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Check whether a field failed.
    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over violations in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        write!(f, "Invalid product: {}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Form data that passed the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm(ProductFormData);

impl ValidatedForm {
    /// Borrow the validated data.
    pub fn data(&self) -> &ProductFormData {
        &self.0
    }

    /// Unwrap the validated data.
    pub fn into_inner(self) -> ProductFormData {
        self.0
    }
}

impl AsRef<ProductFormData> for ValidatedForm {
    fn as_ref(&self) -> &ProductFormData {
        &self.0
    }
}

/// Constraints applied to product form data.
///
/// When a category list is known, the category must be one of its slugs.
/// With an empty list (e.g. the listing failed to load) only presence is
/// checked.
#[derive(Debug, Clone, Default)]
pub struct ProductSchema {
    categories: Vec<Category>,
}

impl ProductSchema {
    /// Create a schema without a known category list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the category field to the given list.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Known categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Validate typed form data.
    pub fn validate(&self, data: ProductFormData) -> Result<ValidatedForm, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.check_text(&data, &mut errors);
        check_numbers(&data, &mut errors);
        errors.into_result(ValidatedForm(data))
    }

    /// Parse raw input and validate it.
    ///
    /// Unparseable numbers are reported on their field alongside any other
    /// violations.
    pub fn parse(&self, input: &FormInput) -> Result<ValidatedForm, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let price = parse_number(input, FormField::Price, &mut errors);
        let discount = parse_number(input, FormField::DiscountPercentage, &mut errors);
        let rating = parse_number(input, FormField::Rating, &mut errors);
        let stock = parse_number(input, FormField::Stock, &mut errors).and_then(|stock| {
            if stock.fract() != 0.0 {
                errors.add(FormField::Stock, "Stock must be a whole number");
                None
            } else {
                Some(stock as i64)
            }
        });

        let data = ProductFormData {
            title: input.title.clone(),
            description: input.description.clone(),
            price: price.unwrap_or(0.0),
            discount_percentage: discount.unwrap_or(0.0),
            rating: rating.unwrap_or(0.0),
            stock: stock.unwrap_or(0),
            brand: input.brand.clone(),
            category: input.category.clone(),
        };

        // Violations recorded above win over range checks on placeholder values.
        self.check_text(&data, &mut errors);
        check_numbers(&data, &mut errors);
        errors.into_result(ValidatedForm(data))
    }

    fn check_text(&self, data: &ProductFormData, errors: &mut ValidationErrors) {
        let title_len = data.title.chars().count();
        if title_len < TITLE_MIN_CHARS {
            errors.add(FormField::Title, "Title must be at least 3 characters");
        } else if title_len > TITLE_MAX_CHARS {
            errors.add(FormField::Title, "Title is too long");
        }

        if data.description.chars().count() < DESCRIPTION_MIN_CHARS {
            errors.add(
                FormField::Description,
                "Description must be at least 10 characters",
            );
        }

        if data.brand.chars().count() < BRAND_MIN_CHARS {
            errors.add(FormField::Brand, "Brand must be at least 2 characters");
        }

        if data.category.is_empty() {
            errors.add(FormField::Category, "Please select a category");
        } else if !self.categories.is_empty()
            && !self.categories.iter().any(|c| c.slug == data.category)
        {
            errors.add(FormField::Category, "Please select a category from the list");
        }
    }
}

fn check_numbers(data: &ProductFormData, errors: &mut ValidationErrors) {
    if data.price.is_nan() || data.price < MIN_PRICE {
        errors.add(FormField::Price, "Price must be greater than 0");
    }

    if data.discount_percentage.is_nan() || data.discount_percentage < 0.0 {
        errors.add(FormField::DiscountPercentage, "Discount must be 0 or greater");
    } else if data.discount_percentage > MAX_DISCOUNT {
        errors.add(FormField::DiscountPercentage, "Discount cannot exceed 100%");
    }

    if data.rating.is_nan() || data.rating < 0.0 {
        errors.add(FormField::Rating, "Rating must be 0 or greater");
    } else if data.rating > MAX_RATING {
        errors.add(FormField::Rating, "Rating cannot exceed 5");
    }

    if data.stock < 0 {
        errors.add(FormField::Stock, "Stock cannot be negative");
    }
}

fn parse_number(input: &FormInput, field: FormField, errors: &mut ValidationErrors) -> Option<f64> {
    match input.get(field).trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.add(field, format!("{} must be a number", field.label()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_data() -> ProductFormData {
        ProductFormData {
            title: "Alpha Phone".into(),
            description: "A dependable phone for everyday use".into(),
            price: 299.99,
            discount_percentage: 10.0,
            rating: 4.5,
            stock: 25,
            brand: "Acme".into(),
            category: "smartphones".into(),
        }
    }

    #[test]
    fn test_valid_data_passes() {
        let validated = ProductSchema::new().validate(valid_data()).unwrap();
        assert_eq!(validated.data(), &valid_data());
    }

    #[test]
    fn test_every_text_rule() {
        let data = ProductFormData {
            title: "ab".into(),
            description: "too short".into(),
            brand: "A".into(),
            category: String::new(),
            ..valid_data()
        };
        let errors = ProductSchema::new().validate(data).unwrap_err();
        assert_eq!(errors.get(FormField::Title), Some("Title must be at least 3 characters"));
        assert_eq!(
            errors.get(FormField::Description),
            Some("Description must be at least 10 characters")
        );
        assert_eq!(errors.get(FormField::Brand), Some("Brand must be at least 2 characters"));
        assert_eq!(errors.get(FormField::Category), Some("Please select a category"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_title_bounds() {
        let schema = ProductSchema::new();
        let long = ProductFormData {
            title: "x".repeat(101),
            ..valid_data()
        };
        assert_eq!(
            schema.validate(long).unwrap_err().get(FormField::Title),
            Some("Title is too long")
        );
        let edge = ProductFormData {
            title: "x".repeat(100),
            ..valid_data()
        };
        assert!(schema.validate(edge).is_ok());
        let multibyte = ProductFormData {
            title: "äöü".into(),
            ..valid_data()
        };
        assert!(schema.validate(multibyte).is_ok());
    }

    #[test]
    fn test_numeric_bounds() {
        let schema = ProductSchema::new();
        let data = ProductFormData {
            price: 0.0,
            discount_percentage: 100.5,
            rating: -0.1,
            stock: -1,
            ..valid_data()
        };
        let errors = schema.validate(data).unwrap_err();
        assert_eq!(errors.get(FormField::Price), Some("Price must be greater than 0"));
        assert_eq!(
            errors.get(FormField::DiscountPercentage),
            Some("Discount cannot exceed 100%")
        );
        assert_eq!(errors.get(FormField::Rating), Some("Rating must be 0 or greater"));
        assert_eq!(errors.get(FormField::Stock), Some("Stock cannot be negative"));

        let edges = ProductFormData {
            price: 0.01,
            discount_percentage: 100.0,
            rating: 5.0,
            stock: 0,
            ..valid_data()
        };
        assert!(schema.validate(edges).is_ok());

        let high_rating = ProductFormData {
            rating: 5.1,
            discount_percentage: -1.0,
            ..valid_data()
        };
        let errors = schema.validate(high_rating).unwrap_err();
        assert_eq!(errors.get(FormField::Rating), Some("Rating cannot exceed 5"));
        assert_eq!(
            errors.get(FormField::DiscountPercentage),
            Some("Discount must be 0 or greater")
        );
    }

    #[test]
    fn test_nan_price_is_rejected() {
        let data = ProductFormData {
            price: f64::NAN,
            ..valid_data()
        };
        assert!(ProductSchema::new()
            .validate(data)
            .unwrap_err()
            .contains(FormField::Price));
    }

    #[test]
    fn test_category_must_be_listed_when_known() {
        let schema = ProductSchema::new()
            .with_categories(vec![Category::new("laptops"), Category::new("smartphones")]);
        assert!(schema.validate(valid_data()).is_ok());

        let unknown = ProductFormData {
            category: "spaceships".into(),
            ..valid_data()
        };
        assert_eq!(
            schema.validate(unknown).unwrap_err().get(FormField::Category),
            Some("Please select a category from the list")
        );
    }

    #[test]
    fn test_parse_input() {
        let input = FormInput::from(&valid_data());
        let validated = ProductSchema::new().parse(&input).unwrap();
        assert_eq!(validated.into_inner(), valid_data());
    }

    #[test]
    fn test_parse_reports_bad_numbers() {
        let input = FormInput {
            price: "cheap".into(),
            stock: "2.5".into(),
            rating: "".into(),
            ..FormInput::from(&valid_data())
        };
        let errors = ProductSchema::new().parse(&input).unwrap_err();
        assert_eq!(errors.get(FormField::Price), Some("Price must be a number"));
        assert_eq!(errors.get(FormField::Stock), Some("Stock must be a whole number"));
        assert_eq!(errors.get(FormField::Rating), Some("Rating must be a number"));
        assert!(!errors.contains(FormField::Title));
    }

    #[test]
    fn test_parse_accepts_surrounding_whitespace() {
        let input = FormInput {
            price: " 12.50 ".into(),
            stock: "7".into(),
            ..FormInput::from(&valid_data())
        };
        let data = ProductSchema::new().parse(&input).unwrap().into_inner();
        assert_eq!(data.price, 12.5);
        assert_eq!(data.stock, 7);
    }

    #[test]
    fn test_display_lists_fields() {
        let data = ProductFormData {
            title: "ab".into(),
            ..valid_data()
        };
        let errors = ProductSchema::new().validate(data).unwrap_err();
        assert_eq!(
            errors.to_string(),
            "Invalid product: title: Title must be at least 3 characters"
        );
    }
}
