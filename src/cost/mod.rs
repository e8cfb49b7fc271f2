//! The cost model: precomputed substitution and indel tables.
//!
//! Substitution costs decompose a mora into vowel, semivowel and consonant
//! components weighted 0.5 / 0.1 / 0.4, with the consonant share driven by
//! the phonetic feature classifier. The full mora×mora matrix is computed
//! once at first use, checked for symmetry and bounds, and read-only
//! afterwards; independent `distance` calls can share it across threads
//! without synchronization.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::mora::segment::vocabulary;
use crate::mora::{Consonant, Mora, SpecialMora, Vowel};

/// Deletion cost for an ordinary mora ("too many syllables").
const DELETE_DEFAULT: f64 = 5.0;
/// Nasal codas are optional length and cheap to drop.
const DELETE_NASAL: f64 = 0.5;
/// Geminate markers likewise.
const DELETE_GEMINATE: f64 = 0.3;
/// A long-vowel marker is barely length at all.
const DELETE_LONG_VOWEL: f64 = 0.1;

/// Insertion cost for an ordinary mora ("too few syllables").
const INSERT_DEFAULT: f64 = 20.0;
/// Stretching a vowel is nearly free.
const INSERT_LONG_VOWEL: f64 = 0.1;

/// Articulatory distance between distinct vowel pairs, scaled so the largest
/// pair (i–o) is 1.0.
const VOWEL_PAIRS: &[(Vowel, Vowel, f64)] = &[
    (Vowel::A, Vowel::I, 71.0 / 73.0),
    (Vowel::A, Vowel::U, 51.0 / 73.0),
    (Vowel::A, Vowel::E, 39.0 / 73.0),
    (Vowel::A, Vowel::O, 37.0 / 73.0),
    (Vowel::I, Vowel::U, 55.0 / 73.0),
    (Vowel::I, Vowel::E, 32.0 / 73.0),
    (Vowel::I, Vowel::O, 73.0 / 73.0),
    (Vowel::U, Vowel::E, 44.0 / 73.0),
    (Vowel::U, Vowel::O, 26.0 / 73.0),
    (Vowel::E, Vowel::O, 51.0 / 73.0),
];

/// Cost between obstruent sub-classes, indexed by rank
/// (plosive, affricate, fricative). Adjacency in that ordering is cheaper
/// than plosive vs. fricative.
const SUBCLASS_COST: [[f64; 3]; 3] = [
    [0.0, 0.1, 0.2],
    [0.1, 0.0, 0.1],
    [0.2, 0.1, 0.0],
];

fn vowel_matrix() -> [[f64; 5]; 5] {
    let mut matrix = [[0.0; 5]; 5];
    for &(v1, v2, cost) in VOWEL_PAIRS {
        matrix[v1.index()][v2.index()] = cost;
        matrix[v2.index()][v1.index()] = cost;
    }
    matrix
}

/// Replacement cost between two optional consonants, in [0, 1].
///
/// Identical consonants (including "both absent") cost 0; a present vs.
/// absent pair is a maximal mismatch. Otherwise a feature-difference
/// accumulator starts at 0.2 and adds 0.2 for each of voicing, nasality and
/// laterality mismatch, then 0.2 if exactly one side is an obstruent, or the
/// sub-class table value if both are.
fn consonant_cost(c1: Option<Consonant>, c2: Option<Consonant>) -> f64 {
    let (c1, c2) = match (c1, c2) {
        (a, b) if a == b => return 0.0,
        (Some(a), Some(b)) => (a, b),
        _ => return 1.0,
    };

    let mut cost = 0.2;
    if c1.is_voiced() != c2.is_voiced() {
        cost += 0.2;
    }
    if c1.is_nasal() != c2.is_nasal() {
        cost += 0.2;
    }
    if c1.is_lateral() != c2.is_lateral() {
        cost += 0.2;
    }
    match (c1.obstruent_class(), c2.obstruent_class()) {
        (Some(o1), Some(o2)) => cost += SUBCLASS_COST[o1.rank()][o2.rank()],
        (None, None) => {}
        _ => cost += 0.2,
    }
    cost
}

/// Replacement cost between two moras, in [0, 1].
fn compute_mora_cost(vowel_matrix: &[[f64; 5]; 5], m1: Mora, m2: Mora) -> f64 {
    match (m1, m2) {
        (Mora::Special(s1), Mora::Special(s2)) => {
            if s1 == s2 {
                0.0
            } else {
                1.0
            }
        }
        // TODO: decrease the replacing cost between the nasal coda and
        // voiced/nasal plain moras.
        (Mora::Special(_), _) | (_, Mora::Special(_)) => 1.0,
        (
            Mora::Plain {
                consonant: c1,
                semivowel: sv1,
                vowel: v1,
            },
            Mora::Plain {
                consonant: c2,
                semivowel: sv2,
                vowel: v2,
            },
        ) => {
            let vowel = vowel_matrix[v1.index()][v2.index()];
            let semivowel = if sv1 == sv2 { 0.0 } else { 1.0 };
            0.5 * vowel + 0.1 * semivowel + 0.4 * consonant_cost(c1, c2)
        }
    }
}

/// Precomputed cost tables over the closed mora vocabulary.
///
/// Built once (`O(|moras|²)`) behind [`cost_model`], immutable afterwards.
pub struct CostModel {
    vowel: [[f64; 5]; 5],
    moras: Vec<Mora>,
    index: FxHashMap<Mora, usize>,
    substitute: Vec<f64>,
    delete: Vec<f64>,
    insert: Vec<f64>,
}

impl CostModel {
    fn build() -> Self {
        let vowel = vowel_matrix();
        let moras = vocabulary().to_vec();
        let n = moras.len();

        let index: FxHashMap<Mora, usize> =
            moras.iter().enumerate().map(|(i, &m)| (m, i)).collect();

        let mut substitute = vec![0.0; n * n];
        for (i, &m1) in moras.iter().enumerate() {
            for (j, &m2) in moras.iter().enumerate() {
                substitute[i * n + j] = compute_mora_cost(&vowel, m1, m2);
            }
        }

        let delete = moras.iter().map(|&m| base_delete_cost(m)).collect();
        let insert = moras.iter().map(|&m| base_insert_cost(m)).collect();

        let model = CostModel {
            vowel,
            moras,
            index,
            substitute,
            delete,
            insert,
        };
        model.self_check();
        model
    }

    /// Symmetry and bound checks before the model is published.
    fn self_check(&self) {
        let n = self.moras.len();
        for v1 in Vowel::ALL {
            for v2 in Vowel::ALL {
                assert_eq!(
                    self.vowel[v1.index()][v2.index()],
                    self.vowel[v2.index()][v1.index()],
                    "vowel cost matrix must be symmetric"
                );
            }
            assert_eq!(self.vowel[v1.index()][v1.index()], 0.0);
        }
        for i in 0..n {
            assert_eq!(self.substitute[i * n + i], 0.0, "diagonal must be zero");
            for j in 0..n {
                let cost = self.substitute[i * n + j];
                assert!((0.0..=1.0).contains(&cost), "mora cost out of [0, 1]");
                assert_eq!(
                    cost,
                    self.substitute[j * n + i],
                    "mora cost matrix must be symmetric"
                );
            }
        }
    }

    /// The closed mora vocabulary backing the tables.
    pub fn moras(&self) -> &[Mora] {
        &self.moras
    }

    /// Articulatory distance between two vowels, in [0, 1].
    #[inline]
    pub fn vowel_cost(&self, v1: Vowel, v2: Vowel) -> f64 {
        self.vowel[v1.index()][v2.index()]
    }

    /// Replacement cost between two moras, in [0, 1].
    ///
    /// An O(1) table lookup for vocabulary moras; other (hand-built) moras
    /// fall back to direct computation.
    #[inline]
    pub fn mora_cost(&self, m1: Mora, m2: Mora) -> f64 {
        match (self.index.get(&m1), self.index.get(&m2)) {
            (Some(&i), Some(&j)) => self.substitute[i * self.moras.len() + j],
            _ => compute_mora_cost(&self.vowel, m1, m2),
        }
    }

    /// Cost of dropping a mora of the reference ("too many syllables").
    #[inline]
    pub fn delete_cost(&self, mora: Mora) -> f64 {
        match self.index.get(&mora) {
            Some(&i) => self.delete[i],
            None => base_delete_cost(mora),
        }
    }

    /// Cost of adding a mora of the target ("too few syllables").
    #[inline]
    pub fn insert_cost(&self, mora: Mora) -> f64 {
        match self.index.get(&mora) {
            Some(&i) => self.insert[i],
            None => base_insert_cost(mora),
        }
    }
}

fn base_delete_cost(mora: Mora) -> f64 {
    match mora {
        Mora::Special(SpecialMora::Nasal) => DELETE_NASAL,
        Mora::Special(SpecialMora::Geminate) => DELETE_GEMINATE,
        Mora::Special(SpecialMora::LongVowel) => DELETE_LONG_VOWEL,
        Mora::Plain { .. } => DELETE_DEFAULT,
    }
}

fn base_insert_cost(mora: Mora) -> f64 {
    match mora {
        Mora::Special(SpecialMora::LongVowel) => INSERT_LONG_VOWEL,
        _ => INSERT_DEFAULT,
    }
}

/// The process-wide cost model, built on first use.
pub fn cost_model() -> &'static CostModel {
    static MODEL: OnceLock<CostModel> = OnceLock::new();
    MODEL.get_or_init(CostModel::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mora::Semivowel;

    fn plain(c: Option<Consonant>, sv: Option<Semivowel>, v: Vowel) -> Mora {
        Mora::plain(c, sv, v)
    }

    #[test]
    fn test_consonant_cost_identical_short_circuits() {
        assert_eq!(consonant_cost(Some(Consonant::K), Some(Consonant::K)), 0.0);
        assert_eq!(consonant_cost(None, None), 0.0);
    }

    #[test]
    fn test_consonant_cost_presence_mismatch_is_maximal() {
        assert_eq!(consonant_cost(Some(Consonant::K), None), 1.0);
        assert_eq!(consonant_cost(None, Some(Consonant::V)), 1.0);
    }

    #[test]
    fn test_consonant_cost_feature_accumulation() {
        // k vs g: both plosives, voicing differs.
        assert_eq!(consonant_cost(Some(Consonant::K), Some(Consonant::G)), 0.4);
        // k vs s: both voiceless obstruents, plosive vs fricative.
        assert_eq!(consonant_cost(Some(Consonant::K), Some(Consonant::S)), 0.4);
        // t vs c: adjacency (plosive/affricate) is cheaper than t vs s.
        let t_c = consonant_cost(Some(Consonant::T), Some(Consonant::C));
        let t_s = consonant_cost(Some(Consonant::T), Some(Consonant::S));
        assert_eq!(t_c, 0.3);
        assert_eq!(t_s, 0.4);
        // n vs m: voiced nasals, only the base difference remains.
        assert_eq!(consonant_cost(Some(Consonant::N), Some(Consonant::M)), 0.2);
        // r vs k: laterality, voicing and obstruency all differ.
        assert_eq!(consonant_cost(Some(Consonant::R), Some(Consonant::K)), 1.0);
    }

    #[test]
    fn test_mora_cost_special_rules() {
        let model = cost_model();
        let nasal = Mora::Special(SpecialMora::Nasal);
        let geminate = Mora::Special(SpecialMora::Geminate);
        let ka = plain(Some(Consonant::K), None, Vowel::A);

        assert_eq!(model.mora_cost(nasal, nasal), 0.0);
        assert_eq!(model.mora_cost(nasal, geminate), 1.0);
        assert_eq!(model.mora_cost(nasal, ka), 1.0);
        assert_eq!(model.mora_cost(ka, geminate), 1.0);
    }

    #[test]
    fn test_mora_cost_component_weights() {
        let model = cost_model();
        let a = Mora::bare(Vowel::A);
        let ya = plain(None, Some(Semivowel::Y), Vowel::A);
        let ka = plain(Some(Consonant::K), None, Vowel::A);
        let ga = plain(Some(Consonant::G), None, Vowel::A);

        // Only the semivowel differs.
        assert!((model.mora_cost(a, ya) - 0.1).abs() < 1e-12);
        // Consonant present vs absent takes the full 0.4 share.
        assert!((model.mora_cost(a, ka) - 0.4).abs() < 1e-12);
        // k vs g costs 0.4 within the 0.4 consonant share.
        assert!((model.mora_cost(ka, ga) - 0.16).abs() < 1e-12);
        // Identical moras are free.
        assert_eq!(model.mora_cost(ka, ka), 0.0);
    }

    #[test]
    fn test_vowel_cost_symmetric_with_zero_diagonal() {
        let model = cost_model();
        for v1 in Vowel::ALL {
            assert_eq!(model.vowel_cost(v1, v1), 0.0);
            for v2 in Vowel::ALL {
                assert_eq!(model.vowel_cost(v1, v2), model.vowel_cost(v2, v1));
            }
        }
        // i–o is the most distant pair.
        assert_eq!(model.vowel_cost(Vowel::I, Vowel::O), 1.0);
        // u–o is the closest.
        assert!(model.vowel_cost(Vowel::U, Vowel::O) < model.vowel_cost(Vowel::A, Vowel::U));
    }

    #[test]
    fn test_indel_tables() {
        let model = cost_model();
        let su = plain(Some(Consonant::S), None, Vowel::U);
        assert_eq!(model.delete_cost(su), 5.0);
        assert_eq!(model.delete_cost(Mora::Special(SpecialMora::Nasal)), 0.5);
        assert_eq!(model.delete_cost(Mora::Special(SpecialMora::Geminate)), 0.3);
        assert_eq!(
            model.delete_cost(Mora::Special(SpecialMora::LongVowel)),
            0.1
        );

        assert_eq!(model.insert_cost(su), 20.0);
        assert_eq!(model.insert_cost(Mora::Special(SpecialMora::Nasal)), 20.0);
        assert_eq!(
            model.insert_cost(Mora::Special(SpecialMora::LongVowel)),
            0.1
        );

        // Substitution stays preferable to drop-and-add for plain moras.
        for &m1 in model.moras() {
            for &m2 in model.moras() {
                if !m1.is_special() && !m2.is_special() {
                    assert!(model.mora_cost(m1, m2) < model.delete_cost(m1));
                    assert!(model.mora_cost(m1, m2) < model.insert_cost(m2));
                }
            }
        }
    }

    #[test]
    fn test_out_of_vocabulary_fallback() {
        let model = cost_model();
        // kwa is not a vocabulary mora; costs still come out consistent.
        let kwa = plain(Some(Consonant::K), Some(Semivowel::W), Vowel::A);
        let ka = plain(Some(Consonant::K), None, Vowel::A);
        assert!((model.mora_cost(kwa, ka) - 0.1).abs() < 1e-12);
        assert_eq!(model.mora_cost(kwa, kwa), 0.0);
        assert_eq!(model.delete_cost(kwa), 5.0);
        assert_eq!(model.insert_cost(kwa), 20.0);
    }
}
