//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::config::PosConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: PosConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            PosConfig::load(path)?
        } else {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output })
    }

    /// Find config file in directory tree.
    fn find_config(start: &PathBuf) -> Option<PosConfig> {
        let config_names = ["pos.toml", ".pos.toml", "pos.json"];

        let mut current = start.clone();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = PosConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}
