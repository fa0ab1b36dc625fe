//! Configuration module

use serde::{Deserialize, Serialize};

/// Environment variable naming the suite config file
pub const CONFIG_ENV: &str = "NUMBENCH_CONFIG";

/// Config file read when `NUMBENCH_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "numbench.json";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub factorial: FactorialConfig,
    pub fibonacci: FibonacciConfig,
    pub primes: PrimesConfig,
    pub sum: SumConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorialConfig {
    pub n: u64,
    pub iterations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FibonacciConfig {
    pub n: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimesConfig {
    pub limit: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SumConfig {
    pub n: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    pub json_output: bool,
}

impl Default for FactorialConfig {
    fn default() -> Self {
        Self {
            n: 20,
            iterations: 100_000,
        }
    }
}

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self { n: 35 }
    }
}

impl Default for PrimesConfig {
    fn default() -> Self {
        Self { limit: 10_000 }
    }
}

impl Default for SumConfig {
    fn default() -> Self {
        Self { n: 1_000_000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_output: false,
        }
    }
}

impl BenchConfig {
    /// Load config from environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        Self::load_or_default(&config_path)
    }

    /// Parse `path` as JSON if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(path).exists() {
            let content = std::fs::read_to_string(path)?;
            let config: BenchConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(BenchConfig::default())
        }
    }
}
