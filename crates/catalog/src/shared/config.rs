use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub sources: SourcesConfig,
}

/// Каталог с данными и имена файлов-источников.
#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    pub dir: String,
    pub base_products: String,
    pub tier_overrides: String,
    pub brand_tiers: String,
    pub variants: String,
    pub descriptions: String,
    pub meta: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[sources]
dir = "data"
base_products = "base_products.csv"
tier_overrides = "tier_overrides.csv"
brand_tiers = "brand_tiers.csv"
variants = "variants.csv"
descriptions = "descriptions.json"
meta = "meta.json"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the data directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn resolve_sources_dir(config: &Config) -> anyhow::Result<PathBuf> {
    let dir_str = &config.sources.dir;
    let dir = Path::new(dir_str);

    // If absolute path, use as is
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(dir));
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(dir_str))
}
