//! The mora model: types, phonetic features and segmentation.
//!
//! A reading enters as a hiragana string and leaves as a sequence of
//! [`Mora`] values with every long-vowel marker resolved. The feature
//! predicates here feed the cost model and nothing else.

pub mod features;
pub mod segment;
pub mod types;

pub use features::ObstruentClass;
pub use segment::{is_hiragana, resolve_long_vowels, segment, to_moras};
pub use types::{Consonant, Mora, Semivowel, SpecialMora, Vowel, VowelKey};
