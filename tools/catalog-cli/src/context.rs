//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use catalog_app::{CatalogController, ControllerConfig};
use catalog_data::HttpGateway;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::dialogs::TerminalDialogs;
use crate::output::Output;

/// Controller wired to the HTTP gateway and the terminal.
pub type Controller = CatalogController<HttpGateway, TerminalDialogs>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Base address given on the command line or in the environment.
    api_url: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, api_url: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            api_url,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(&config_path) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Effective service base address.
    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or(&self.config.api.base_url)
    }

    /// Gateway for the effective base address.
    pub fn gateway(&self) -> Result<HttpGateway> {
        self.output.debug(&format!("Using catalog service at {}", self.api_url()));
        HttpGateway::connect(self.api_url())
            .with_context(|| format!("Invalid catalog service address: {}", self.api_url()))
    }

    /// Controller over a fresh gateway.
    ///
    /// With `assume_yes` every confirmation is answered yes.
    pub fn controller(&self, assume_yes: bool) -> Result<Controller> {
        let dialogs = TerminalDialogs::new(self.output.clone(), self.is_interactive())
            .assume_yes(assume_yes);
        let config = ControllerConfig {
            page_size: self.config.catalog.page_size,
        };
        Ok(CatalogController::with_config(self.gateway()?, dialogs, config))
    }

    /// Check if prompts can be shown.
    pub fn is_interactive(&self) -> bool {
        !self.output.is_json() && console::Term::stdout().is_term()
    }

    /// Where `config init` writes.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_NAMES[0])
    }
}
