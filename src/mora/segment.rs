//! Hiragana segmentation and long-vowel resolution.
//!
//! Converts a hiragana reading into its mora sequence by greedy
//! longest-match (two code points, else one) against a static kana table,
//! then resolves every long-vowel marker into a copy of the preceding vowel.
//! Matching operates on Unicode scalar values, never byte offsets.

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::types::{Consonant, Mora, Semivowel, SpecialMora, Vowel};
use crate::error::{ReadingError, Result};

/// Every code point accepted in a reading.
const HIRAGANA: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほ\
                        まみむめもやゆよらりるれろわゐゑをんがぎぐげござじずぜぞだぢづでど\
                        ばびぶべぼぱぴぷぺぽぁぃぅぇぉっゃゅょゎゔー";

/// Kana spellings and their internal romanization.
///
/// mora = consonant? semivowel? vowel | special mora. Uppercase N/Q/H are the
/// special moras; the N-to-1 assignments at the end fold historical and
/// variant spellings onto their modern readings.
const KANA_TO_ROMAJI: &[(&str, &str)] = &[
    // (empty), k, s, t, n, h, m, r
    ("あ", "a"),
    ("い", "i"),
    ("う", "u"),
    ("え", "e"),
    ("お", "o"),
    ("や", "ya"),
    ("ゆ", "yu"),
    ("いぇ", "ye"),
    ("よ", "yo"),
    ("わ", "wa"),
    ("うぃ", "wi"),
    ("うぇ", "we"),
    ("うぉ", "wo"),
    ("か", "ka"),
    ("き", "ki"),
    ("く", "ku"),
    ("け", "ke"),
    ("こ", "ko"),
    ("きゃ", "kya"),
    ("きゅ", "kyu"),
    ("きょ", "kyo"),
    ("さ", "sa"),
    ("すぃ", "si"),
    ("す", "su"),
    ("せ", "se"),
    ("そ", "so"),
    ("しゃ", "sya"),
    ("し", "syi"),
    ("しゅ", "syu"),
    ("しぇ", "sye"),
    ("しょ", "syo"),
    ("た", "ta"),
    ("てぃ", "ti"),
    ("とぅ", "tu"),
    ("て", "te"),
    ("と", "to"),
    ("てゃ", "tya"),
    ("てゅ", "tyu"),
    ("てょ", "tyo"),
    ("な", "na"),
    ("に", "ni"),
    ("ぬ", "nu"),
    ("ね", "ne"),
    ("の", "no"),
    ("にゃ", "nya"),
    ("にゅ", "nyu"),
    ("にょ", "nyo"),
    ("は", "ha"),
    ("ひ", "hi"),
    ("ふ", "hu"),
    ("へ", "he"),
    ("ほ", "ho"),
    ("ひゃ", "hya"),
    ("ひゅ", "hyu"),
    ("ひょ", "hyo"),
    ("ま", "ma"),
    ("み", "mi"),
    ("む", "mu"),
    ("め", "me"),
    ("も", "mo"),
    ("みゃ", "mya"),
    ("みゅ", "myu"),
    ("みょ", "myo"),
    ("ら", "ra"),
    ("り", "ri"),
    ("る", "ru"),
    ("れ", "re"),
    ("ろ", "ro"),
    ("りゃ", "rya"),
    ("りゅ", "ryu"),
    ("りょ", "ryo"),
    // g, z, d, b, p
    ("が", "ga"),
    ("ぎ", "gi"),
    ("ぐ", "gu"),
    ("げ", "ge"),
    ("ご", "go"),
    ("ぎゃ", "gya"),
    ("ぎゅ", "gyu"),
    ("ぎょ", "gyo"),
    ("ざ", "za"),
    ("ずぃ", "zi"),
    ("ず", "zu"),
    ("ぜ", "ze"),
    ("ぞ", "zo"),
    ("じゃ", "zya"),
    ("じ", "zyi"),
    ("じゅ", "zyu"),
    ("じぇ", "zye"),
    ("じょ", "zyo"),
    ("だ", "da"),
    ("でぃ", "di"),
    ("どぅ", "du"),
    ("で", "de"),
    ("ど", "do"),
    ("でゃ", "dya"),
    ("でゅ", "dyu"),
    ("でょ", "dyo"),
    ("ば", "ba"),
    ("び", "bi"),
    ("ぶ", "bu"),
    ("べ", "be"),
    ("ぼ", "bo"),
    ("びゃ", "bya"),
    ("びゅ", "byu"),
    ("びょ", "byo"),
    ("ぱ", "pa"),
    ("ぴ", "pi"),
    ("ぷ", "pu"),
    ("ぺ", "pe"),
    ("ぽ", "po"),
    ("ぴゃ", "pya"),
    ("ぴゅ", "pyu"),
    ("ぴょ", "pyo"),
    // c, f, v (absent from the usual romanizations)
    ("つぁ", "ca"),
    ("つぃ", "ci"),
    ("つ", "cu"),
    ("つぇ", "ce"),
    ("つぉ", "co"),
    ("ちゃ", "cya"),
    ("ち", "cyi"),
    ("ちゅ", "cyu"),
    ("ちぇ", "cye"),
    ("ちょ", "cyo"),
    ("ふぁ", "fa"),
    ("ふぃ", "fi"),
    ("ふぇ", "fe"),
    ("ふぉ", "fo"),
    ("ふゃ", "fya"),
    ("ふゅ", "fyu"),
    ("ふょ", "fyo"),
    ("ゔぁ", "va"),
    ("ゔぃ", "vi"),
    ("ゔ", "vu"),
    ("ゔぇ", "ve"),
    ("ゔぉ", "vo"),
    ("ゔゃ", "vya"),
    ("ゔゅ", "vyu"),
    ("ゔょ", "vyo"),
    // special moras
    ("ん", "N"),
    ("っ", "Q"),
    ("ー", "H"),
    // N-to-1 assignments
    ("ゐ", "i"),
    ("ゑ", "e"),
    ("を", "o"),
    ("づぃ", "zi"),
    ("づ", "zu"),
    ("ぢゃ", "zya"),
    ("ぢ", "zyi"),
    ("ぢゅ", "zyu"),
    ("ぢぇ", "zye"),
    ("ぢょ", "zyo"),
    // stray small vowels, e.g. すぅるたい
    ("ぁ", "a"),
    ("ぃ", "i"),
    ("ぅ", "u"),
    ("ぇ", "e"),
    ("ぉ", "o"),
    ("ゎ", "wa"),
];

/// Parse an internal romanization into a mora.
///
/// Only used to decode the static kana table; the closed-vocabulary letters
/// are consonant? semivowel? vowel, or a single uppercase special tag.
fn parse_romaji(romaji: &str) -> Option<Mora> {
    match romaji {
        "N" => return Some(Mora::Special(SpecialMora::Nasal)),
        "Q" => return Some(Mora::Special(SpecialMora::Geminate)),
        "H" => return Some(Mora::Special(SpecialMora::LongVowel)),
        _ => {}
    }

    let mut consonant: Option<Consonant> = None;
    let mut semivowel: Option<Semivowel> = None;
    let mut vowel: Option<Vowel> = None;
    for c in romaji.chars() {
        if let Some(v) = Vowel::from_char(c) {
            if vowel.replace(v).is_some() {
                return None;
            }
        } else if let Some(sv) = Semivowel::from_char(c) {
            if semivowel.replace(sv).is_some() || vowel.is_some() {
                return None;
            }
        } else if let Some(cons) = Consonant::from_char(c) {
            if consonant.replace(cons).is_some() || semivowel.is_some() || vowel.is_some() {
                return None;
            }
        } else {
            return None;
        }
    }
    Some(Mora::plain(consonant, semivowel, vowel?))
}

struct KanaTable {
    digraphs: FxHashMap<(char, char), Mora>,
    singles: FxHashMap<char, Mora>,
    hiragana: FxHashSet<char>,
    /// Distinct moras in table order; the cost model indexes off this.
    vocabulary: Vec<Mora>,
}

impl KanaTable {
    fn build() -> Self {
        let mut digraphs = FxHashMap::default();
        let mut singles = FxHashMap::default();
        let mut vocabulary = Vec::new();
        let mut seen = FxHashSet::default();

        for &(kana, romaji) in KANA_TO_ROMAJI {
            let mora = parse_romaji(romaji)
                .unwrap_or_else(|| panic!("malformed kana table entry {kana:?} -> {romaji:?}"));
            let chars: SmallVec<[char; 2]> = kana.chars().collect();
            match chars.as_slice() {
                [single] => {
                    singles.insert(*single, mora);
                }
                [first, second] => {
                    digraphs.insert((*first, *second), mora);
                }
                _ => panic!("kana table entry {kana:?} is not 1 or 2 code points"),
            }
            if seen.insert(mora) {
                vocabulary.push(mora);
            }
        }

        KanaTable {
            digraphs,
            singles,
            hiragana: HIRAGANA.chars().collect(),
            vocabulary,
        }
    }
}

fn kana_table() -> &'static KanaTable {
    static TABLE: OnceLock<KanaTable> = OnceLock::new();
    TABLE.get_or_init(KanaTable::build)
}

/// Whether the given character belongs to the recognized hiragana set.
pub fn is_hiragana(c: char) -> bool {
    kana_table().hiragana.contains(&c)
}

/// The closed mora vocabulary, in kana-table order.
pub(crate) fn vocabulary() -> &'static [Mora] {
    &kana_table().vocabulary
}

/// Segment a hiragana reading into moras.
///
/// Greedy longest-match: a two-code-point kana spelling wins over its one
/// code point prefix. Long-vowel markers are kept as-is; see
/// [`resolve_long_vowels`].
///
/// # Examples
///
/// ```
/// use mondegreen::mora::segment;
///
/// let moras = segment("にっさ").unwrap();
/// assert_eq!(moras.len(), 3); // ni, っ, sa
/// ```
///
/// # Errors
///
/// [`ReadingError::UnrecognizedSequence`] when no prefix of the remaining
/// input matches any kana table entry.
pub fn segment(reading: &str) -> Result<Vec<Mora>> {
    let table = kana_table();
    let chars: SmallVec<[char; 32]> = reading.chars().collect();
    let mut moras = Vec::with_capacity(chars.len());

    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() {
            if let Some(&mora) = table.digraphs.get(&(chars[i], chars[i + 1])) {
                moras.push(mora);
                i += 2;
                continue;
            }
        }
        if let Some(&mora) = table.singles.get(&chars[i]) {
            moras.push(mora);
            i += 1;
            continue;
        }
        return Err(ReadingError::UnrecognizedSequence(
            chars[i..].iter().collect(),
        ));
    }
    Ok(moras)
}

/// Replace every long-vowel marker with a copy of the preceding vowel.
///
/// ```
/// use mondegreen::mora::{resolve_long_vowels, segment};
///
/// let moras = resolve_long_vowels(&segment("かーん").unwrap()).unwrap();
/// // ka, H, N resolves to ka, a, N
/// assert_eq!(moras[1], moras[0].vowel().map(mondegreen::mora::Mora::bare).unwrap());
/// ```
///
/// # Errors
///
/// [`ReadingError::UnresolvableLongVowel`] when the marker is the first
/// token, or the preceding token carries no vowel.
pub fn resolve_long_vowels(moras: &[Mora]) -> Result<Vec<Mora>> {
    let mut resolved = Vec::with_capacity(moras.len());
    for (i, &mora) in moras.iter().enumerate() {
        if mora == Mora::Special(SpecialMora::LongVowel) {
            let vowel = resolved
                .last()
                .and_then(Mora::vowel)
                .ok_or(ReadingError::UnresolvableLongVowel(i))?;
            resolved.push(Mora::bare(vowel));
        } else {
            resolved.push(mora);
        }
    }
    Ok(resolved)
}

/// Validate, segment and resolve a reading in one pass.
///
/// This is the sequence form the distance engine consumes: hiragana-only
/// input, greedy segmentation, no long-vowel marker left.
///
/// # Errors
///
/// [`ReadingError::InvalidCharacter`] for a code point outside the
/// recognized hiragana set (checked before segmentation begins), plus the
/// segmentation and resolution errors.
pub fn to_moras(reading: &str) -> Result<Vec<Mora>> {
    if let Some(c) = reading.chars().find(|&c| !is_hiragana(c)) {
        return Err(ReadingError::InvalidCharacter(c));
    }
    resolve_long_vowels(&segment(reading)?)
}
