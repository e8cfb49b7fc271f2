//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::distance::Constraints;

/// Top-level command line.
#[derive(Parser)]
#[command(name = "mondegreen")]
#[command(about = "Rank Japanese readings by phonetic mishearing distance")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Score a word list against a single target reading
    Query {
        /// Target reading in hiragana
        target: String,

        /// Word list file (comma-separated name/reading columns)
        #[arg(short, long)]
        words: PathBuf,

        /// Number of results to show
        #[arg(short = 'n', long, default_value = "30")]
        limit: usize,

        /// Positional match constraints
        #[command(flatten)]
        constraints: ConstraintArgs,
    },

    /// Launch the interactive search loop
    Repl {
        /// Word list file (comma-separated name/reading columns)
        #[arg(short, long)]
        words: PathBuf,

        /// Number of results to show per query
        #[arg(short = 'n', long, default_value = "30")]
        limit: usize,

        /// Positional match constraints
        #[command(flatten)]
        constraints: ConstraintArgs,
    },
}

/// Positional match constraints, measured against the target reading.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct ConstraintArgs {
    /// Force the first N moras to rhyme (vowel match)
    #[arg(long, value_name = "N", default_value = "0")]
    pub first_vowels: usize,

    /// Force the last N moras to rhyme (vowel match)
    #[arg(long, value_name = "N", default_value = "0")]
    pub last_vowels: usize,

    /// Force the first N moras to match exactly
    #[arg(long, value_name = "N", default_value = "0")]
    pub first_moras: usize,

    /// Force the last N moras to match exactly
    #[arg(long, value_name = "N", default_value = "0")]
    pub last_moras: usize,
}

impl ConstraintArgs {
    /// Convert the flag values into engine constraints.
    pub fn to_constraints(self) -> Constraints {
        Constraints {
            same_first_n_vowels: self.first_vowels,
            same_last_n_vowels: self.last_vowels,
            same_first_n_moras: self.first_moras,
            same_last_n_moras: self.last_moras,
        }
    }
}
