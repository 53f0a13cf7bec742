//! Output formatting for the CLI.

use catalog_core::{Product, StockLevel};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

const TITLE_WIDTH: usize = 32;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print products as a table, stock last.
    pub fn product_table(&self, products: &[&Product]) {
        if self.json {
            return;
        }
        let widths = [14, TITLE_WIDTH, 14, 20, 16, 0];
        self.table_row(&["ID", "TITLE", "BRAND", "CATEGORY", "PRICE", "STOCK"], &widths);
        for product in products {
            let id = product.id.to_string();
            let title = truncate(&product.title, TITLE_WIDTH);
            let price = format_price(product);
            let stock = stock_badge(product.stock_level(), product.stock);
            self.table_row(
                &[
                    id.as_str(),
                    title.as_str(),
                    product.brand.as_str(),
                    product.category.as_str(),
                    price.as_str(),
                    stock.as_str(),
                ],
                &widths,
            );
        }
    }

    /// Print every attribute of a product.
    pub fn product_details(&self, product: &Product) {
        if self.json {
            return;
        }
        self.kv("ID", &product.id.to_string());
        self.kv("Title", &product.title);
        self.kv("Description", &product.description);
        self.kv("Brand", &product.brand);
        self.kv("Category", &product.category);
        self.kv("Price", &format_price(product));
        self.kv("Rating", &format!("{:.1} / 5", product.rating));
        self.kv("Stock", &stock_badge(product.stock_level(), product.stock));
        if !product.thumbnail.is_empty() {
            self.kv("Thumbnail", &product.thumbnail);
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Price with the discount, if any.
pub fn format_price(product: &Product) -> String {
    if product.has_discount() {
        format!("${:.2} (-{}%)", product.price, product.discount_percentage)
    } else {
        format!("${:.2}", product.price)
    }
}

/// Colored stock count.
pub fn stock_badge(level: StockLevel, units: i64) -> String {
    let text = format!("{} in stock", units);
    match level {
        StockLevel::Plenty => style(text).green().to_string(),
        StockLevel::Limited => style(text).yellow().to_string(),
        StockLevel::Low => style(text).red().to_string(),
    }
}

/// Shorten text to `max` characters, marking the cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ProductId;

    fn product(price: f64, discount: f64) -> Product {
        Product {
            id: ProductId::new(1),
            title: "Alpha Phone".to_string(),
            description: String::new(),
            price,
            discount_percentage: discount,
            rating: 4.0,
            stock: 5,
            brand: "Acme".to_string(),
            category: "smartphones".to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&product(299.0, 0.0)), "$299.00");
        assert_eq!(format_price(&product(19.5, 12.5)), "$19.50 (-12.5%)");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Lamp", 10), "Lamp");
        assert_eq!(truncate("Extraordinary Lamp", 8), "Extraor…");
    }
}
