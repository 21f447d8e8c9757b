use std::path::PathBuf;

use anyhow::{Context, Result};
use flagquiz::QuizConfig;

#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub config_file: Option<PathBuf>,
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Quiz configuration from the file (or defaults) with command line overrides applied
    pub fn quiz_config(&self) -> Result<QuizConfig> {
        let mut config = match &self.config_file {
            Some(path) => QuizConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => QuizConfig::default(),
        };

        if let Some(rounds) = self.rounds {
            config.game.max_rounds = rounds;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "flag> ".to_string(),
            history_file: Some(".guess_the_flag_history".to_string()),
        }
    }
}
