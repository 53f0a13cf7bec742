//! Category types.
//!
//! The remote service lists categories either as bare slugs or as objects
//! carrying a `slug` and/or `name`. [`CategoryEntry`] captures both shapes so
//! the coercion happens once, where the payload is decoded.

use serde::{Deserialize, Serialize};

/// One element of a remote category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    /// A bare slug, e.g. `"smartphones"`.
    Slug(String),
    /// An object form, e.g. `{"slug": "smartphones", "name": "Smartphones"}`.
    Record {
        #[serde(default)]
        slug: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

/// A selectable product category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Value stored on products.
    pub slug: String,
    /// Name given by the service, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Category {
    /// Create a category from its slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: None,
        }
    }

    /// Coerce a listing entry; entries with neither slug nor name are dropped.
    pub fn from_entry(entry: CategoryEntry) -> Option<Self> {
        match entry {
            CategoryEntry::Slug(slug) => non_empty(slug).map(Category::new),
            CategoryEntry::Record { slug, name } => {
                let name = name.and_then(non_empty);
                match slug.and_then(non_empty) {
                    Some(slug) => Some(Self { slug, name }),
                    None => name.map(|name| Self {
                        slug: name.clone(),
                        name: Some(name),
                    }),
                }
            }
        }
    }

    /// Coerce a whole listing, preserving order.
    pub fn from_entries(entries: Vec<CategoryEntry>) -> Vec<Self> {
        entries.into_iter().filter_map(Category::from_entry).collect()
    }

    /// Display label: first letter upper-cased, hyphens shown as spaces.
    pub fn label(&self) -> String {
        let mut chars = self.slug.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars)
                .collect::<String>()
                .replace('-', " "),
            None => String::new(),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bare_strings() {
        let entries: Vec<CategoryEntry> =
            serde_json::from_str(r#"["beauty", "home-decoration"]"#).unwrap();
        let categories = Category::from_entries(entries);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].slug, "home-decoration");
        assert_eq!(categories[1].label(), "Home decoration");
    }

    #[test]
    fn test_decode_objects() {
        let json = r#"[
            {"slug": "beauty", "name": "Beauty", "url": "https://dummyjson.com/products/category/beauty"},
            {"name": "Fragrances"},
            {"url": "https://dummyjson.com/products/category/unknown"}
        ]"#;
        let entries: Vec<CategoryEntry> = serde_json::from_str(json).unwrap();
        let categories = Category::from_entries(entries);
        assert_eq!(
            categories,
            vec![
                Category {
                    slug: "beauty".into(),
                    name: Some("Beauty".into())
                },
                Category {
                    slug: "Fragrances".into(),
                    name: Some("Fragrances".into())
                },
            ]
        );
    }

    #[test]
    fn test_decode_mixed_listing() {
        let json = r#"["laptops", {"slug": "mens-shirts"}, ""]"#;
        let entries: Vec<CategoryEntry> = serde_json::from_str(json).unwrap();
        let slugs: Vec<String> = Category::from_entries(entries)
            .into_iter()
            .map(|c| c.slug)
            .collect();
        assert_eq!(slugs, vec!["laptops", "mens-shirts"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(Category::new("mens-watches").label(), "Mens watches");
        assert_eq!(Category::new("").label(), "");
    }
}
