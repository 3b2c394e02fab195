//! # Configuration
//!
//! Game, scoring and logging settings, read from a TOML file. Every section
//! and every field carries a serde default, so a partial file (or an empty
//! one) is valid.
//!
//! ## Sections
//!
//! - [`GameConfig`] - console presentation and optional text overrides
//! - [`Rules`] - points table and the hazard lose policy
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use station_escape::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Prompt: {:?}", config.game.prompt);
//!     println!("Crystal points: {}", config.rules.crystal_points);
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```toml
//! [game]
//! prompt = "> "
//! show_banner = true
//! echo_status = true
//! text_file = "data/texts.json"
//!
//! [rules]
//! tool_points = 10
//! repair_points = 20
//! crystal_points = 50
//! win_bonus = 30
//! hazard_limit = 5
//!
//! [logging]
//! level = "warn"
//! file = "station-escape.log"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::game::Rules;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Printed before each line is read.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_true")]
    pub show_banner: bool,
    /// Append the status line to replies that change score or hazards.
    #[serde(default = "default_true")]
    pub echo_status: bool,
    /// JSON file whose entries replace built-in player-facing text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_file: Option<String>,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_banner: true,
            echo_status: true,
            text_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unrecognised names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .trim()
            .parse()
            .unwrap_or(log::LevelFilter::Warn)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub rules: Rules,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load `path` when it exists, otherwise fall back to defaults. The flag
    /// reports whether a file was read.
    pub async fn load_or_default(path: &str) -> Result<(Self, bool)> {
        if fs::metadata(path).await.is_ok() {
            Ok((Self::load(path).await?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Write the default configuration. An existing file is only replaced
    /// when `force` is set.
    pub async fn create_default(path: &str, force: bool) -> Result<()> {
        if !force && Path::new(path).exists() {
            return Err(anyhow!(
                "Config file {} already exists (use --force to overwrite)",
                path
            ));
        }
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.game.prompt, "> ");
        assert!(config.game.show_banner);
        assert!(config.game.echo_status);
        assert_eq!(config.game.text_file, None);
        assert_eq!(config.rules, Rules::default());
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
[game]
prompt = "station> "

[rules]
hazard_limit = 4

[logging]
level = "DEBUG"
"#,
        )
        .unwrap();
        assert_eq!(config.game.prompt, "station> ");
        assert!(config.game.echo_status);
        assert_eq!(config.rules.hazard_limit, Some(4));
        assert_eq!(config.rules.crystal_points, 50);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_bad_level_falls_back() {
        let logging = LoggingConfig {
            level: "loud".into(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("[rules]"));
        assert!(!text.contains("hazard_limit"));
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, Config::default());
    }
}
