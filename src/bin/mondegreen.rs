//! mondegreen - rank Japanese readings by phonetic mishearing distance.
//!
//! Provides a one-shot query command and an interactive search loop over a
//! word list of (name, reading) pairs.

use clap::Parser;
use colored::Colorize;
use std::process;

use mondegreen::cli::{commands, Cli, Commands};
use mondegreen::repl::{self, ReplConfig};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            target,
            words,
            limit,
            constraints,
        } => commands::query(&words, &target, limit, &constraints.to_constraints()),
        Commands::Repl {
            words,
            limit,
            constraints,
        } => {
            let constraints = constraints.to_constraints();
            commands::load_word_list(&words).and_then(|list| {
                commands::print_header(limit, &constraints);
                repl::run(&list, limit, &constraints, &ReplConfig::default())
            })
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {e:#}", "Error".red().bold());
        process::exit(1);
    }
}
