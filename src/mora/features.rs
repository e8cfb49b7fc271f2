//! Phonetic feature classifier.
//!
//! Static predicates over consonants, consumed only by the cost model while
//! it builds its substitution tables. Membership is fixed; an unmatched
//! consonant is a compile-time impossibility thanks to exhaustive matching.

use super::types::Consonant;

/// Sub-class of an obstruent consonant.
///
/// The plosive–affricate–fricative ordering matters: adjacent sub-classes are
/// phonetically closer than plosive vs. fricative, and the cost model's 3×3
/// sub-class table is indexed by [`ObstruentClass::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstruentClass {
    /// 破裂音: k, t, g, d, b, p.
    Plosive,
    /// 破擦音: c (ts).
    Affricate,
    /// 摩擦音: s, h, z, f, v.
    Fricative,
}

impl ObstruentClass {
    /// Position in the plosive–affricate–fricative ordering.
    #[inline]
    pub(crate) fn rank(self) -> usize {
        match self {
            ObstruentClass::Plosive => 0,
            ObstruentClass::Affricate => 1,
            ObstruentClass::Fricative => 2,
        }
    }
}

impl Consonant {
    /// Whether this consonant is voiced (有声音).
    pub fn is_voiced(self) -> bool {
        matches!(
            self,
            Consonant::N
                | Consonant::M
                | Consonant::R
                | Consonant::G
                | Consonant::Z
                | Consonant::D
                | Consonant::B
                | Consonant::V
        )
    }

    /// Whether this consonant is a nasal (鼻音).
    pub fn is_nasal(self) -> bool {
        matches!(self, Consonant::N | Consonant::M)
    }

    /// Whether this consonant is a lateral (側面音).
    pub fn is_lateral(self) -> bool {
        matches!(self, Consonant::R)
    }

    /// The obstruent sub-class, or `None` for sonorants.
    pub fn obstruent_class(self) -> Option<ObstruentClass> {
        match self {
            Consonant::K
            | Consonant::T
            | Consonant::G
            | Consonant::D
            | Consonant::B
            | Consonant::P => Some(ObstruentClass::Plosive),
            Consonant::C => Some(ObstruentClass::Affricate),
            Consonant::S | Consonant::H | Consonant::Z | Consonant::F | Consonant::V => {
                Some(ObstruentClass::Fricative)
            }
            Consonant::N | Consonant::M | Consonant::R => None,
        }
    }

    /// Whether this consonant is an obstruent (阻害音).
    pub fn is_obstruent(self) -> bool {
        self.obstruent_class().is_some()
    }
}
