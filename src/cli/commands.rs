//! CLI command implementations

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::corpus::WordList;
use crate::distance::Constraints;
use crate::mora::to_moras;
use crate::search::{rank, Match};

/// One-shot query: load the word list, rank, print.
pub fn query(words: &Path, target: &str, limit: usize, constraints: &Constraints) -> Result<()> {
    let list = load_word_list(words)?;
    to_moras(target).with_context(|| format!("target reading {target:?} is not valid"))?;

    print_header(limit, constraints);
    let matches = rank(&list, target, constraints, limit);
    print_matches(&matches);
    Ok(())
}

/// Load a word list with a friendly error.
pub fn load_word_list(path: &Path) -> Result<WordList> {
    let list = WordList::load(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    anyhow::ensure!(!list.is_empty(), "word list {} is empty", path.display());
    Ok(list)
}

/// Print the active search configuration.
pub fn print_header(limit: usize, constraints: &Constraints) {
    println!("showing the top {limit} matches");
    println!("constraints");
    println!(
        "  first {} vowels must rhyme",
        constraints.same_first_n_vowels
    );
    println!(
        "  last {} vowels must rhyme",
        constraints.same_last_n_vowels
    );
    println!(
        "  first {} moras must match",
        constraints.same_first_n_moras
    );
    println!("  last {} moras must match", constraints.same_last_n_moras);
}

/// Print ranked matches, one `name: cost` line each.
pub fn print_matches(matches: &[Match]) {
    if matches.is_empty() {
        println!("{}", "no matches".yellow());
        return;
    }
    for m in matches {
        println!("{}: cost {:.3}", m.name.cyan(), m.cost);
    }
}
