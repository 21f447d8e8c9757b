//! Configuration management for the flag quiz

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GameResult, QuizError};
use crate::game::catalog::{Catalog, REFERENCE_ITEMS};
use crate::game::session::DEFAULT_MAX_ROUNDS;

/// Main configuration for a quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuizConfig {
    /// Game rules
    #[serde(default)]
    pub game: GameConfig,
    /// Items rounds are drawn from
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Game rule configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds per playthrough
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Catalog configuration as an ordered list of item names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub items: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items: REFERENCE_ITEMS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CatalogConfig {
    /// Build the validated catalog these names describe
    pub fn to_catalog(&self) -> GameResult<Catalog> {
        Catalog::new(&self.items)
    }
}

impl QuizConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| QuizError::Configuration {
            message: format!("Failed to read config file: {}", e),
            field: "config_file".to_string(),
        })?;

        let config = Self::from_toml(&content)?;
        tracing::debug!(
            max_rounds = config.game.max_rounds,
            catalog_size = config.catalog.items.len(),
            "Loaded quiz configuration"
        );
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> GameResult<Self> {
        let config: QuizConfig = toml::from_str(content).map_err(|e| QuizError::Configuration {
            message: format!("Failed to parse config file: {}", e),
            field: "config_format".to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| QuizError::Configuration {
            message: format!("Failed to serialize config: {}", e),
            field: "config_serialization".to_string(),
        })?;

        fs::write(path, content).map_err(|e| QuizError::Configuration {
            message: format!("Failed to write config file: {}", e),
            field: "config_write".to_string(),
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> GameResult<()> {
        if self.game.max_rounds == 0 {
            return Err(QuizError::Configuration {
                message: "Max rounds must be greater than 0".to_string(),
                field: "game.max_rounds".to_string(),
            });
        }

        self.catalog
            .to_catalog()
            .map_err(|e| QuizError::Configuration {
                message: e.to_string(),
                field: "catalog.items".to_string(),
            })?;

        Ok(())
    }

    /// A short three-round game
    pub fn quick() -> Self {
        Self {
            game: GameConfig { max_rounds: 3 },
            catalog: CatalogConfig::default(),
        }
    }
}
