//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// CLI configuration file (`pos.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosConfig {
    /// Backend base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Whether menu prices already include sales tax.
    #[serde(default)]
    pub tax_included_hint: bool,

    /// Charge size upgrades locally instead of leaving them to the
    /// backend.
    #[serde(default)]
    pub charge_size_delta: bool,

    /// Employee id sales are attributed to when `--cashier` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashier_id: Option<i64>,
}

fn default_api_base_url() -> String {
    "http://localhost:5001/api".to_string()
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            tax_included_hint: false,
            charge_size_delta: false,
            cashier_id: None,
        }
    }
}

impl PosConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}
