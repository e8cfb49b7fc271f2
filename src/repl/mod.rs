//! Interactive search loop.
//!
//! Reads target readings from the terminal and prints the closest word-list
//! entries after each one. Input must be hiragana; anything else is rejected
//! with a hint instead of an error. Ctrl-C or Ctrl-D ends the loop.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use crate::cli::commands::print_matches;
use crate::corpus::WordList;
use crate::distance::Constraints;
use crate::mora::to_moras;
use crate::search::rank;

/// REPL configuration.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string.
    pub prompt: String,
    /// History file path.
    pub history_file: Option<std::path::PathBuf>,
    /// Maximum history entries.
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "mondegreen> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
                    .join(".mondegreen_history"),
            ),
            max_history: 1000,
        }
    }
}

/// Run the interactive loop until EOF or interrupt.
///
/// # Errors
///
/// Returns an error if the line editor cannot be initialized or fails while
/// reading.
pub fn run(
    words: &WordList,
    limit: usize,
    constraints: &Constraints,
    config: &ReplConfig,
) -> Result<()> {
    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .max_history_size(config.max_history)?
        .build();
    let mut editor: Editor<(), DefaultHistory> = Editor::with_config(rustyline_config)?;

    if let Some(history_path) = &config.history_file {
        if history_path.exists() {
            let _ = editor.load_history(history_path);
        }
    }

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                let target = line.trim();
                if target.is_empty() {
                    continue;
                }
                if let Err(e) = to_moras(target) {
                    println!("{}: {e}", "input must be a hiragana reading".yellow());
                    continue;
                }
                print_matches(&rank(words, target, constraints, limit));
                println!();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(history_path) = &config.history_file {
        let _ = editor.save_history(history_path);
    }
    Ok(())
}
