//! The constrained edit-distance engine.
//!
//! A weighted Levenshtein alignment over two mora sequences. Substitution
//! costs come from the precomputed cost model; insertions and deletions use
//! the per-mora indel tables. Positional constraints can force prefix or
//! suffix windows of the target to match exactly, at the full-mora or
//! vowel-only level, by pricing the forbidden cells at infinity.
//!
//! The result may not satisfy the triangle inequality, and with constraints
//! active it is not symmetric: constraint windows are measured against the
//! target.

use smallvec::{smallvec, SmallVec};

use crate::cost::cost_model;
use crate::error::Result;
use crate::mora::{to_moras, Mora, VowelKey};

/// Hard positional constraints on an alignment.
///
/// Each count constrains a prefix or suffix window of the *target*: within a
/// mora window the candidate mora must equal the target mora exactly, within
/// a vowel window only the vowel projections must match (special moras act
/// as their own vowel category, see [`Mora::vowel_key`]). Counts larger than
/// the target's mora count are clamped to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Force the first n target moras to rhyme (vowel match).
    pub same_first_n_vowels: usize,
    /// Force the last n target moras to rhyme (vowel match).
    pub same_last_n_vowels: usize,
    /// Force the first n target moras to match exactly.
    pub same_first_n_moras: usize,
    /// Force the last n target moras to match exactly.
    pub same_last_n_moras: usize,
}

/// Minimum-cost alignment between two resolved mora sequences.
///
/// `seq1` is the reference (candidate) reading, `seq2` the target; both must
/// already be free of long-vowel markers. Returns `+∞` when the constraints
/// leave no feasible alignment — callers treat that as "excluded", not as an
/// error.
pub fn mora_distance(seq1: &[Mora], seq2: &[Mora], constraints: &Constraints) -> f64 {
    let model = cost_model();
    let n1 = seq1.len();
    let n2 = seq2.len();

    let first_moras = constraints.same_first_n_moras.min(n2);
    let last_moras = constraints.same_last_n_moras.min(n2);
    let first_vowels = constraints.same_first_n_vowels.min(n2);
    let last_vowels = constraints.same_last_n_vowels.min(n2);
    // p is a 0-indexed position in the target.
    let hard = |p: usize| p < first_moras || n2 - p <= last_moras;
    let vowel_locked = |p: usize| p < first_vowels || n2 - p <= last_vowels;

    let keys1: SmallVec<[VowelKey; 16]> = seq1.iter().map(Mora::vowel_key).collect();
    let keys2: SmallVec<[VowelKey; 16]> = seq2.iter().map(Mora::vowel_key).collect();

    // Two-row DP; prev[j] holds the cost of turning the first i-1 reference
    // moras into the first j target moras.
    let mut prev: SmallVec<[f64; 32]> = smallvec![0.0; n2 + 1];
    let mut curr: SmallVec<[f64; 32]> = smallvec![0.0; n2 + 1];

    for j in 1..=n2 {
        // A hard-constrained target position cannot be bought with a plain
        // insertion even before any reference mora is consumed.
        let step = if hard(j - 1) {
            f64::INFINITY
        } else {
            model.insert_cost(seq2[j - 1])
        };
        prev[j] = prev[j - 1] + step;
    }

    for i in 1..=n1 {
        let delete = model.delete_cost(seq1[i - 1]);
        curr[0] = prev[0] + delete;
        for j in 1..=n2 {
            let p = j - 1;
            let (insert, substitute) = if hard(p) && seq1[i - 1] != seq2[j - 1] {
                (f64::INFINITY, f64::INFINITY)
            } else if vowel_locked(p) && keys1[i - 1] != keys2[j - 1] {
                (f64::INFINITY, f64::INFINITY)
            } else {
                (
                    model.insert_cost(seq2[j - 1]),
                    model.mora_cost(seq1[i - 1], seq2[j - 1]),
                )
            };
            curr[j] = (prev[j] + delete)
                .min(curr[j - 1] + insert)
                .min(prev[j - 1] + substitute);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n2]
}

/// Mishearing distance between two hiragana readings.
///
/// Validates, segments and long-vowel-resolves both readings, then aligns
/// them with [`mora_distance`]. `0.0` means the readings are phonetically
/// identical after resolution; larger values mean greater divergence; `+∞`
/// means the constraints exclude the pair.
///
/// # Example
///
/// ```
/// use mondegreen::distance::{distance, Constraints};
///
/// let constraints = Constraints::default();
/// assert_eq!(distance("かーん", "かあん", &constraints).unwrap(), 0.0);
/// assert!(distance("かん", "さん", &constraints).unwrap() > 0.0);
/// ```
///
/// # Errors
///
/// Any [`crate::error::ReadingError`] raised while turning either reading
/// into moras.
pub fn distance(reference: &str, target: &str, constraints: &Constraints) -> Result<f64> {
    let seq1 = to_moras(reference)?;
    let seq2 = to_moras(target)?;
    Ok(mora_distance(&seq1, &seq2, constraints))
}
