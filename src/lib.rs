//! # mondegreen
//!
//! Phonetic "mishearing distance" between Japanese readings.
//!
//! A hiragana reading is segmented into moras (the timing units of Japanese
//! phonology), long-vowel markers are resolved into their preceding vowel,
//! and two mora sequences are aligned by a weighted edit distance whose
//! substitution costs come from a hand-built articulatory feature model.
//! Hard positional constraints can force prefix/suffix windows of the target
//! to match exactly, at the full-mora or vowel-only level, which turns the
//! metric into a rhyme-aware ranking score.
//!
//! The distance is neither symmetric in general (insertions and deletions
//! are priced differently, and constraints are measured against the target)
//! nor a metric: it does not satisfy the triangle inequality.
//!
//! ## Example
//!
//! ```rust
//! use mondegreen::prelude::*;
//!
//! let constraints = Constraints::default();
//! // ー stretches the previous vowel: both readings sound like ka-a-n.
//! assert_eq!(distance("かーん", "かあん", &constraints).unwrap(), 0.0);
//!
//! // Rhyme with the last two vowels of the target.
//! let rhyme = Constraints { same_last_n_vowels: 2, ..Constraints::default() };
//! assert!(distance("たら", "かさ", &rhyme).unwrap() < 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod cost;
pub mod distance;
pub mod error;
pub mod mora;
pub mod search;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Interactive search loop
#[cfg(feature = "cli")]
pub mod repl;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::corpus::{WordEntry, WordList};
    pub use crate::cost::{cost_model, CostModel};
    pub use crate::distance::{distance, mora_distance, Constraints};
    pub use crate::error::ReadingError;
    pub use crate::mora::{
        is_hiragana, resolve_long_vowels, segment, to_moras, Consonant, Mora, Semivowel,
        SpecialMora, Vowel, VowelKey,
    };
    pub use crate::search::{rank, Match};
}
