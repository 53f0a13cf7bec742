//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod shell;
pub mod show;

use catalog_core::{FormField, FormInput, ProductId};
use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Products per page (default: catalog.page_size).
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Products to skip.
    #[arg(short, long, default_value = "0")]
    pub skip: u32,

    /// Only show products whose title, brand or category contains this text.
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text.
    pub query: String,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: ProductId,
}

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub fields: ProductFields,
}

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Product id.
    pub id: ProductId,

    #[command(flatten)]
    pub fields: ProductFields,
}

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Product id.
    pub id: ProductId,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Product field values given as flags.
///
/// Values stay raw text so that bad numbers are reported by the form
/// schema like any other violation.
#[derive(Args, Default)]
pub struct ProductFields {
    /// Product title.
    #[arg(long)]
    pub title: Option<String>,

    /// Product description.
    #[arg(long)]
    pub description: Option<String>,

    /// Price.
    #[arg(long)]
    pub price: Option<String>,

    /// Discount in percent.
    #[arg(long = "discount")]
    pub discount_percentage: Option<String>,

    /// Rating from 0 to 5.
    #[arg(long)]
    pub rating: Option<String>,

    /// Units in stock.
    #[arg(long)]
    pub stock: Option<String>,

    /// Brand.
    #[arg(long)]
    pub brand: Option<String>,

    /// Category slug.
    #[arg(long)]
    pub category: Option<String>,
}

impl ProductFields {
    fn get(&self, field: FormField) -> Option<&String> {
        match field {
            FormField::Title => self.title.as_ref(),
            FormField::Description => self.description.as_ref(),
            FormField::Price => self.price.as_ref(),
            FormField::DiscountPercentage => self.discount_percentage.as_ref(),
            FormField::Stock => self.stock.as_ref(),
            FormField::Rating => self.rating.as_ref(),
            FormField::Brand => self.brand.as_ref(),
            FormField::Category => self.category.as_ref(),
        }
    }

    /// Write the given flags into `input`. Returns the fields not given.
    pub fn overlay(&self, input: &mut FormInput) -> Vec<FormField> {
        let mut missing = Vec::new();
        for field in FormField::ALL {
            match self.get(field) {
                Some(value) => input.set(field, value.as_str()),
                None => missing.push(field),
            }
        }
        missing
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
