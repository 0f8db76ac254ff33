//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use verdant_app::{SIMULATED_FAILURE_RATE, SIMULATED_LATENCY_MS};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Device storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Simulated payment gateway configuration.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

impl CliConfig {
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

/// Where the storefront keeps its device storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the JSON key-value store.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Knobs for the simulated payment gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Simulated processing latency in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Fraction of charges that fail (0.0 to 1.0).
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            failure_rate: default_failure_rate(),
        }
    }
}

fn default_data_dir() -> String {
    ".verdant".to_string()
}

fn default_latency_ms() -> u64 {
    SIMULATED_LATENCY_MS
}

fn default_failure_rate() -> f64 {
    SIMULATED_FAILURE_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.storage.data_dir, ".verdant");
        assert_eq!(config.gateway.latency_ms, SIMULATED_LATENCY_MS);
        assert!((config.gateway.failure_rate - SIMULATED_FAILURE_RATE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [gateway]
            failure_rate = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.latency_ms, SIMULATED_LATENCY_MS);
        assert_eq!(config.gateway.failure_rate, 0.0);
        assert_eq!(config.storage.data_dir, ".verdant");
    }
}
