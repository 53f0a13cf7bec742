//! Substring filter over the in-memory product list.

use crate::product::Product;

/// Case-insensitive substring filter on title, brand and category.
///
/// An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    needle: String,
}

impl ProductFilter {
    /// Create a filter for the given query.
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            needle: query.as_ref().to_lowercase(),
        }
    }

    /// Check whether the filter is a no-op.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check whether a product matches.
    pub fn matches(&self, product: &Product) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&product.title, &product.brand, &product.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Matching products, in list order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Summary line for a filtered list.
    pub fn summarize(&self, products: &[Product]) -> ListSummary {
        ListSummary {
            shown: products.iter().filter(|p| self.matches(p)).count(),
            total: products.len(),
            filtered: !self.is_empty(),
        }
    }
}

/// Counts describing what a filtered list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    pub shown: usize,
    pub total: usize,
    pub filtered: bool,
}

impl ListSummary {
    /// Footer or empty-state text for the list.
    pub fn message(&self) -> String {
        if self.shown > 0 {
            format!("Showing {} of {} products", self.shown, self.total)
        } else if self.filtered {
            "No products found. Try adjusting your search".to_string()
        } else {
            "No products found. Get started by adding your first product".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ProductFormData;
    use crate::ids::ProductId;

    fn product(id: i64, title: &str, brand: &str, category: &str) -> Product {
        Product::speculative(
            ProductId::new(id),
            &ProductFormData {
                title: title.into(),
                brand: brand.into(),
                category: category.into(),
                ..Default::default()
            },
        )
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Alpha Phone", "Acme", "electronics"),
            product(2, "Beta Shirt", "Zed", "clothing"),
        ]
    }

    fn titles(filter: &ProductFilter, products: &[Product]) -> Vec<String> {
        filter
            .apply(products)
            .into_iter()
            .map(|p| p.title.clone())
            .collect()
    }

    #[test]
    fn test_filter_by_brand() {
        assert_eq!(titles(&ProductFilter::new("acme"), &catalog()), vec!["Alpha Phone"]);
    }

    #[test]
    fn test_filter_by_title() {
        assert_eq!(titles(&ProductFilter::new("phone"), &catalog()), vec!["Alpha Phone"]);
    }

    #[test]
    fn test_filter_by_category() {
        assert_eq!(titles(&ProductFilter::new("CLOTH"), &catalog()), vec!["Beta Shirt"]);
    }

    #[test]
    fn test_filter_without_match() {
        assert!(ProductFilter::new("zzz").apply(&catalog()).is_empty());
    }

    #[test]
    fn test_empty_query_keeps_order() {
        assert_eq!(
            titles(&ProductFilter::default(), &catalog()),
            vec!["Alpha Phone", "Beta Shirt"]
        );
    }

    #[test]
    fn test_description_is_not_searched() {
        let mut products = catalog();
        products[1].description = "Pairs well with any phone".into();
        assert_eq!(titles(&ProductFilter::new("phone"), &products), vec!["Alpha Phone"]);
    }

    #[test]
    fn test_summary_messages() {
        let products = catalog();
        assert_eq!(
            ProductFilter::new("a").summarize(&products).message(),
            "Showing 2 of 2 products"
        );
        assert_eq!(
            ProductFilter::new("zzz").summarize(&products).message(),
            "No products found. Try adjusting your search"
        );
        assert_eq!(
            ProductFilter::default().summarize(&[]).message(),
            "No products found. Get started by adding your first product"
        );
    }
}
