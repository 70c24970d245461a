use std::fs::File;

use anyhow::{Context, Result};
use course_client::DEFAULT_BASE;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use xdg::BaseDirectories;

/// Prefix for our config, cache and state directories
pub const XDG_PREFIX: &str = "course-tui";

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the course API lives
    pub base_url: String,

    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE.to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to the defaults if there isn't one
    pub fn load() -> Result<Self> {
        let Some(path) = BaseDirectories::with_prefix(XDG_PREFIX)?.find_config_file(CONFIG_FILE)
        else {
            return Ok(Self::default());
        };

        let file = File::open(&path).context("error opening config file")?;
        let config = serde_json::from_reader(&file).context("error deserialising config file")?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = BaseDirectories::with_prefix(XDG_PREFIX)?.place_config_file(CONFIG_FILE)?;

        let mut file = File::create(&path).context("error opening config file")?;
        serde_json::to_writer_pretty(&mut file, &self).context("error serialising config file")?;

        Ok(())
    }

    /// The configured log level. Unrecognised values mean `Debug`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"base_url": "https://courses.example"}"#)
            .unwrap();
        assert_eq!(
            config,
            Config {
                base_url: "https://courses.example".to_string(),
                log_level: "debug".to_string(),
            }
        );
    }

    #[test]
    fn test_level_filter() {
        let mut config = Config::default();
        assert_eq!(config.level_filter(), LevelFilter::Debug);

        config.log_level = "warn".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Warn);

        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }
}
