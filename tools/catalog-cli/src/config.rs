//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use catalog_data::{HttpGateway, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Listing settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Check the values, returning errors and warnings.
    pub fn check(&self) -> ConfigReport {
        let mut report = ConfigReport::default();

        if self.api.base_url.trim().is_empty() {
            report.errors.push("api.base_url is required".to_string());
        } else if let Err(e) = HttpGateway::connect(&self.api.base_url) {
            report.errors.push(format!("api.base_url: {}", e));
        } else if !self.api.base_url.starts_with("https://") {
            report
                .warnings
                .push("api.base_url does not use https".to_string());
        }

        if self.catalog.page_size == 0 {
            report
                .errors
                .push("catalog.page_size must be at least 1".to_string());
        } else if self.catalog.page_size > 100 {
            report.warnings.push(format!(
                "catalog.page_size {} is large; responses may be slow",
                self.catalog.page_size
            ));
        }

        report
    }
}

/// Catalog service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address of the service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Listing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products fetched per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Result of [`CliConfig::check`].
#[derive(Debug, Default)]
pub struct ConfigReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Generate a default catalog.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Product catalog configuration
# Generated {generated}

[api]
base_url = "{base_url}"

[catalog]
page_size = {page_size}
"#,
        generated = chrono::Utc::now().format("%Y-%m-%d"),
        base_url = DEFAULT_BASE_URL,
        page_size = DEFAULT_PAGE_SIZE,
    )
}
