//! Catalog CLI - Command line manager for the product catalog.
//!
//! Commands:
//! - `catalog list` - List a page of products
//! - `catalog search` - Search products on the service
//! - `catalog show` - Show one product
//! - `catalog categories` - List categories
//! - `catalog create` - Create a product
//! - `catalog edit` - Edit a product
//! - `catalog delete` - Delete a product
//! - `catalog shell` - Interactive catalog session
//! - `catalog config` - Manage configuration

mod commands;
mod config;
mod context;
mod dialogs;
mod logging;
mod output;
mod prompt;

use anyhow::Result;
use catalog_app::ControllerError;
use clap::{Parser, Subcommand};

use commands::{
    ConfigArgs, CreateArgs, DeleteArgs, EditArgs, ListArgs, SearchArgs, ShowArgs,
};
use logging::LogFormat;

/// Catalog CLI - Browse and manage the product catalog
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog service base address
    #[arg(long, global = true, env = "CATALOG_API_URL")]
    api_url: Option<String>,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a page of products
    List(ListArgs),

    /// Search products on the service
    Search(SearchArgs),

    /// Show a single product
    Show(ShowArgs),

    /// List product categories
    Categories,

    /// Create a product
    Create(CreateArgs),

    /// Edit a product
    Edit(EditArgs),

    /// Delete a product
    Delete(DeleteArgs),

    /// Start an interactive catalog session
    Shell,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_format)?;

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, cli.api_url, output)?;

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Create(args) => commands::create::run(args, &ctx).await,
        Commands::Edit(args) => commands::edit::run(args, &ctx).await,
        Commands::Delete(args) => commands::delete::run(args, &ctx).await,
        Commands::Shell => commands::shell::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        // Controller failures were already shown as notifications.
        if e.downcast_ref::<ControllerError>().is_none() {
            ctx.output.error(&format!("{:#}", e));
        }
        std::process::exit(1);
    }

    Ok(())
}
