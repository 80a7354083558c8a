use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ORCHA_DIR: &str = ".orcha";
pub const API_KEY_ENV: &str = "PERPLEXITY_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            model: "sonar".to_string(),
            base_url: None,
            max_tokens: crate::model::DEFAULT_MAX_TOKENS,
            temperature: crate::model::DEFAULT_TEMPERATURE,
        }
    }
}

pub fn get_orcha_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(ORCHA_DIR)
}

pub fn get_config_path() -> PathBuf {
    get_orcha_dir().join("config.toml")
}

pub fn ensure_orcha_dir() -> Result<PathBuf> {
    let orcha_dir = get_orcha_dir();

    if !orcha_dir.exists() {
        std::fs::create_dir_all(&orcha_dir).with_context(|| {
            format!("Failed to create orcha directory at {}", orcha_dir.display())
        })?;
    }

    Ok(orcha_dir)
}

impl Config {
    /// Config file if present, defaults otherwise; an empty api_key is
    /// filled from the environment.
    pub fn load_or_init() -> Result<Self> {
        let mut config = if config_exists() {
            load_config()?
        } else {
            Config::default()
        };

        if config.api_key.is_empty()
            && let Ok(key) = std::env::var(API_KEY_ENV)
        {
            config.api_key = key;
        }

        Ok(config)
    }
}

pub fn load_config() -> Result<Config> {
    let config_path = get_config_path();

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    ensure_orcha_dir()?;

    let config_path = get_config_path();
    let content =
        toml::to_string_pretty(config).with_context(|| "Failed to serialize config to TOML")?;

    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(())
}

pub fn config_exists() -> bool {
    get_config_path().exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.model, "sonar");
        assert!(config.api_key.is_empty());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn toml_round_trip() {
        let config = Config {
            api_key: "pplx-test".to_string(),
            model: "sonar-pro".to_string(),
            base_url: Some("http://localhost:8080".to_string()),
            max_tokens: 512,
            temperature: 0.2,
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.api_key, "pplx-test");
        assert_eq!(parsed.model, "sonar-pro");
        assert_eq!(parsed.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(parsed.max_tokens, 512);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("model = \"sonar-reasoning\"\n").unwrap();
        assert_eq!(parsed.model, "sonar-reasoning");
        assert_eq!(parsed.max_tokens, crate::model::DEFAULT_MAX_TOKENS);
    }
}
