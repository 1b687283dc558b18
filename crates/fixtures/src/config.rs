use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub generator: GeneratorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible fixtures; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    pub products: u32,
    pub product_prefix: String,
    pub weeks: u32,
    pub output: String,
    pub shops: Vec<ShopConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShopConfig {
    pub name: String,
    /// Multiplier applied to the base weekly sales
    pub sales_factor: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("at least one shop must be configured")]
    NoShops,
    #[error("products must be greater than zero")]
    NoProducts,
    #[error("weeks must be greater than zero")]
    NoWeeks,
    #[error("shop '{0}' has a negative sales factor")]
    NegativeSalesFactor(String),
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[generator]
products = 50
product_prefix = "FRUIT"
weeks = 52
output = "crates/frontend/public/fixtures/fixtures.json"

[[generator.shops]]
name = "Nantes"
sales_factor = 1.0

[[generator.shops]]
name = "Paris"
sales_factor = 1.2

[[generator.shops]]
name = "Saint-herblain"
sales_factor = 0.8
"#;

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shops.is_empty() {
            return Err(ConfigError::NoShops);
        }
        if self.products == 0 {
            return Err(ConfigError::NoProducts);
        }
        if self.weeks == 0 {
            return Err(ConfigError::NoWeeks);
        }
        if let Some(shop) = self.shops.iter().find(|s| s.sales_factor < 0.0) {
            return Err(ConfigError::NegativeSalesFactor(shop.name.clone()));
        }
        Ok(())
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                config.generator.validate()?;
                return Ok(config);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

fn default_config() -> anyhow::Result<Config> {
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    config.generator.validate()?;
    Ok(config)
}

/// Resolve the output file: CLI override first, then the configured path.
/// Relative paths are taken from the current directory.
pub fn output_path(config: &GeneratorConfig, cli_override: Option<&str>) -> PathBuf {
    let raw = cli_override.unwrap_or(&config.output);
    Path::new(raw).to_path_buf()
}
