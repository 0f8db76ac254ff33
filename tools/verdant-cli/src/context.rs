//! CLI execution context.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};

use verdant_app::{SimulatedGateway, Storefront};
use verdant_store::Store;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// The storefront controller.
    pub storefront: Storefront,
}

impl Context {
    /// Load context from config file and open the storefront.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        };

        let store = Store::open(&config.storage.data_dir)
            .with_context(|| format!("Failed to open store at {}", config.storage.data_dir))?;
        let gateway = SimulatedGateway::new()
            .with_latency(Duration::from_millis(config.gateway.latency_ms))
            .with_failure_rate(config.gateway.failure_rate);
        let storefront =
            Storefront::open(store, Box::new(gateway)).context("Failed to open storefront")?;

        Ok(Self {
            config,
            output,
            storefront,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<CliConfig> {
        let config_names = ["verdant.toml", ".verdant.toml"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
