//! Word-list loading.
//!
//! A word list pairs a display name with its hiragana reading. Two line
//! layouts are accepted: a plain `name,reading` pair, or the four-column
//! `id,name,text,reading` card export the interactive search was originally
//! fed (columns 1 and 3). Fields are split on commas without quoting
//! support. Lines with any other shape are skipped; readings are validated
//! later, per entry, by the ranking pass.

use std::fs::File;
use std::io::{BufRead, BufReader, Result};
use std::path::Path;

/// One display name with its hiragana reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Display form shown in results.
    pub name: String,
    /// Hiragana reading scored against the target.
    pub reading: String,
}

/// A loaded word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Load a word list from a comma-separated file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            let (name, reading) = match fields.as_slice() {
                [name, reading] => (name, reading),
                [_, name, _, reading] => (name, reading),
                _ => continue,
            };
            entries.push(WordEntry {
                name: name.trim().to_string(),
                reading: reading.trim().to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// Build a word list from entries already in memory.
    pub fn from_entries(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }
}
