//! Error types for reading segmentation and distance computation.

use thiserror::Error;

/// Errors that can occur while turning a written reading into moras.
///
/// None of these are transient: the engine performs no I/O, so every failure
/// indicates malformed input data. Callers ranking a corpus are expected to
/// skip or report bad entries individually rather than abort the whole pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadingError {
    /// The input contains a code point outside the recognized hiragana set.
    ///
    /// Surfaced before segmentation begins.
    #[error("invalid character {0:?} in reading")]
    InvalidCharacter(char),

    /// No prefix of the remaining input matches any kana table entry.
    ///
    /// The payload is the unmatched remainder of the reading.
    #[error("unrecognized kana sequence starting at {0:?}")]
    UnrecognizedSequence(String),

    /// A long-vowel marker appears with no preceding vowel to copy.
    ///
    /// The payload is the mora index of the offending marker. This happens
    /// when the marker is the first token of a reading, or follows a nasal
    /// or geminate mora.
    #[error("long-vowel marker at mora {0} has no preceding vowel")]
    UnresolvableLongVowel(usize),
}

/// A specialized `Result` type for reading operations.
pub type Result<T> = std::result::Result<T, ReadingError>;
