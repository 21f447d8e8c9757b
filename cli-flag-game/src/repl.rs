use anyhow::Result;
use colored::*;
use rustyline::{DefaultEditor, Result as RustylineResult};

use crate::config::ReplConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Zero-based index of the picked flag
    Answer { choice: usize },
    Continue,
    Restart,
    Status,
    Help,
    Quit,
}

pub struct ReplInterface {
    editor: DefaultEditor,
    config: ReplConfig,
}

impl ReplInterface {
    pub fn new(config: ReplConfig) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(history_file) = &config.history_file {
            let _ = editor.load_history(history_file);
        }

        Ok(Self { editor, config })
    }

    pub fn read_input(&mut self) -> RustylineResult<String> {
        let line = self.editor.readline(&self.config.prompt)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
        }
        Ok(line)
    }

    pub fn save_history(&mut self) {
        if let Some(history_file) = &self.config.history_file {
            if let Err(e) = self.editor.save_history(history_file) {
                tracing::debug!(error = %e, "Could not save command history");
            }
        }
    }

    pub fn display_help(&self) {
        println!("{}", "Commands:".bold());
        println!("  {}  tap a flag", "1, 2, 3".cyan());
        println!("  {}  dismiss the result (or press Enter)", "continue, c".cyan());
        println!("  {}  play again after the game is over", "restart, r".cyan());
        println!("  {}  show score and round", "status".cyan());
        println!("  {}  show this help", "help".cyan());
        println!("  {}  leave the game", "quit, exit".cyan());
    }
}

pub fn parse_command(input: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [number] if number.chars().all(|c| c.is_ascii_digit()) => {
            let number: usize = number.parse()?;
            if number == 0 {
                return Err(anyhow::anyhow!("Flags are numbered from 1"));
            }
            Ok(ReplCommand::Answer { choice: number - 1 })
        }
        ["continue"] | ["c"] => Ok(ReplCommand::Continue),
        ["restart"] | ["r"] => Ok(ReplCommand::Restart),
        ["status"] => Ok(ReplCommand::Status),
        ["help"] => Ok(ReplCommand::Help),
        ["quit"] | ["exit"] => Ok(ReplCommand::Quit),
        [] => Err(anyhow::anyhow!("Empty command")),
        _ => Err(anyhow::anyhow!(
            "Unknown command: '{}'. Type 'help' for available commands.",
            input.trim()
        )),
    }
}
