use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;

use flagquiz::{GameSession, Outcome, Phase, RandomSource, SeededRandom, ThreadRandom};

use crate::config::{CliConfig, ReplConfig};
use crate::flags::choice_label;
use crate::repl::{parse_command, ReplCommand, ReplInterface};

type Random = Box<dyn RandomSource + Send>;

/// Drives one game session from the terminal.
///
/// Which flag was tapped is display state only; the session never sees it.
pub struct GameApp {
    session: GameSession<Random>,
    repl: ReplInterface,
    selected: Option<usize>,
}

impl GameApp {
    pub fn new(config: CliConfig, repl_config: ReplConfig) -> Result<Self> {
        let quiz_config = config.quiz_config()?;

        let random: Random = match config.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom::new()),
        };

        let session = GameSession::from_config_with_random(&quiz_config, random)?;
        let repl = ReplInterface::new(repl_config)?;

        Ok(Self {
            session,
            repl,
            selected: None,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.display_welcome();
        self.display_round();

        loop {
            let input = match self.repl.read_input() {
                Ok(input) => input,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("\nGoodbye!");
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            // Enter dismisses the result prompt
            let command = if input.trim().is_empty() && self.session.phase() == Phase::AwaitingContinue {
                Ok(ReplCommand::Continue)
            } else if input.trim().is_empty() {
                continue;
            } else {
                parse_command(&input)
            };

            match command {
                Ok(ReplCommand::Quit) => {
                    println!("Goodbye!");
                    break;
                }
                Ok(command) => {
                    if let Err(e) = self.handle_command(command) {
                        eprintln!("{}", format!("Error: {}", e).red());
                    }
                }
                Err(e) => {
                    eprintln!("{}", format!("Error: {}", e).red());
                }
            }
        }

        self.repl.save_history();
        Ok(())
    }

    fn handle_command(&mut self, command: ReplCommand) -> Result<()> {
        match command {
            ReplCommand::Answer { choice } => {
                let outcome = self.session.submit_answer(choice)?;
                self.selected = Some(choice);
                self.display_outcome(&outcome);
            }
            ReplCommand::Continue => {
                self.session.continue_game()?;
                self.selected = None;
                if self.session.is_over() {
                    self.display_game_over();
                } else {
                    self.display_round();
                }
            }
            ReplCommand::Restart => {
                self.session.restart()?;
                self.display_round();
            }
            ReplCommand::Status => self.display_status(),
            ReplCommand::Help => self.repl.display_help(),
            ReplCommand::Quit => {}
        }
        Ok(())
    }

    fn display_welcome(&self) {
        println!("{}", "Guess the Flag".bright_blue().bold());
        println!(
            "{}",
            format!("{} rounds. Type 'help' for available commands", self.session.max_rounds()).dimmed()
        );
        println!();
    }

    fn display_round(&self) {
        let round = self.session.current_round();

        println!(
            "{}",
            format!("Round {}/{}", self.session.rounds_played() + 1, self.session.max_rounds()).dimmed()
        );
        println!("{}", "Tap the flag of".dimmed());
        println!("{}", round.target_item().to_string().bold());
        for (index, item) in round.choices().iter().enumerate() {
            let number = index + 1;
            println!("  [{}] {}", number.to_string().cyan(), choice_label(item, number));
        }
        println!("{}", format!("Score {}", self.session.score()).bold());
    }

    fn display_outcome(&self, outcome: &Outcome) {
        let title = if outcome.correct {
            outcome.title.green().bold()
        } else {
            outcome.title.red().bold()
        };
        println!("{}", title);
        println!("{}", outcome.message);

        if let Some(selected) = self.selected {
            let round = self.session.current_round();
            if selected != round.target() {
                println!(
                    "{}",
                    format!(
                        "{} was flag [{}]",
                        outcome.answer,
                        round.target() + 1
                    )
                    .dimmed()
                );
            }
        }
        println!("{}", "Press Enter to continue".dimmed());
    }

    fn display_game_over(&self) {
        println!("{}", flagquiz::game::GAME_OVER_TITLE.yellow().bold());
        if let Some(message) = self.session.final_message() {
            println!("{}", message);
        }
        println!("{}", "Type 'restart' to play again or 'quit' to leave".dimmed());
    }

    fn display_status(&self) {
        println!("Phase: {}", self.session.phase());
        println!(
            "Round: {}/{}",
            (self.session.rounds_played() + 1).min(self.session.max_rounds()),
            self.session.max_rounds()
        );
        println!("Score: {}", self.session.score().to_string().green());
    }
}
