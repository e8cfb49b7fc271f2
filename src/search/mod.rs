//! Bounded top-K ranking over a word list.
//!
//! Scores every entry against one target with a single `distance` call each
//! and keeps only the K best in a size-capped max-heap. Entries whose
//! reading fails to segment, or whose distance is infinite (excluded by a
//! constraint), are skipped individually — a bad corpus entry never aborts a
//! ranking pass.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::corpus::WordList;
use crate::distance::{distance, Constraints};

/// One ranked result.
///
/// Ordered by cost (ties broken by name) so the ranking heap can evict its
/// current worst; costs are always finite here.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Display name of the matched word.
    pub name: String,
    /// Mishearing distance to the target.
    pub cost: f64,
}

impl Eq for Match {}

impl Ord for Match {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Match {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank the `limit` phonetically closest entries to `target`.
///
/// Returns at most `limit` matches sorted by ascending cost.
pub fn rank(words: &WordList, target: &str, constraints: &Constraints, limit: usize) -> Vec<Match> {
    if limit == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Match> = BinaryHeap::with_capacity(limit + 1);
    for entry in words.iter() {
        let Ok(cost) = distance(&entry.reading, target, constraints) else {
            continue;
        };
        if !cost.is_finite() {
            continue;
        }
        heap.push(Match {
            name: entry.name.clone(),
            cost,
        });
        if heap.len() > limit {
            heap.pop();
        }
    }

    heap.into_sorted_vec()
}
