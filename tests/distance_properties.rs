//! End-to-end and property tests for the mishearing distance.

use mondegreen::prelude::*;
use proptest::prelude::*;

#[test]
fn identity_for_valid_readings() {
    let constraints = Constraints::default();
    for reading in [
        "あ",
        "かん",
        "かーん",
        "しゃんぐりら",
        "じぇいす",
        "すぅるたい",
        "ゔぁんぱいあ",
    ] {
        assert_eq!(
            distance(reading, reading, &constraints).unwrap(),
            0.0,
            "identity failed for {reading}"
        );
    }
}

#[test]
fn cost_tables_are_symmetric_and_bounded() {
    let model = cost_model();
    let moras = model.moras();
    for &m1 in moras {
        assert_eq!(model.mora_cost(m1, m1), 0.0);
        for &m2 in moras {
            let cost = model.mora_cost(m1, m2);
            assert_eq!(cost, model.mora_cost(m2, m1), "asymmetric for {m1}/{m2}");
            assert!((0.0..=1.0).contains(&cost), "{m1}/{m2} out of bounds: {cost}");
        }
    }
    for v1 in Vowel::ALL {
        for v2 in Vowel::ALL {
            assert_eq!(model.vowel_cost(v1, v2), model.vowel_cost(v2, v1));
        }
    }
}

#[test]
fn special_mora_costs_are_maximal() {
    let model = cost_model();
    let specials = [
        Mora::Special(SpecialMora::Nasal),
        Mora::Special(SpecialMora::Geminate),
        Mora::Special(SpecialMora::LongVowel),
    ];
    for &special in &specials {
        for &other in &specials {
            let expected = if special == other { 0.0 } else { 1.0 };
            assert_eq!(model.mora_cost(special, other), expected);
        }
        for &mora in model.moras() {
            if !mora.is_special() {
                assert_eq!(model.mora_cost(special, mora), 1.0);
            }
        }
    }
}

#[test]
fn long_vowel_marker_equals_spelled_vowel() {
    let constraints = Constraints::default();
    assert_eq!(distance("かーん", "かあん", &constraints).unwrap(), 0.0);
    assert_eq!(distance("びーむ", "びいむ", &constraints).unwrap(), 0.0);
}

#[test]
fn insertion_and_deletion_are_priced_differently() {
    let constraints = Constraints::default();
    let too_few = distance("あ", "あい", &constraints).unwrap();
    let too_many = distance("あい", "あ", &constraints).unwrap();
    assert_eq!(too_few, 20.0);
    assert_eq!(too_many, 5.0);
    assert_ne!(too_few, too_many);
}

#[test]
fn hard_final_mora_constraint_excludes_unreachable_candidates() {
    let constraints = Constraints {
        same_last_n_moras: 1,
        ..Constraints::default()
    };
    // さら has no ん anywhere, so the final target column is unreachable.
    assert!(distance("さら", "かん", &constraints).unwrap().is_infinite());
    assert!(distance("さん", "かん", &constraints).unwrap().is_finite());
}

#[test]
fn stretched_reading_against_short_target() {
    let constraints = Constraints::default();
    // ka, a, N against ka, N: substitute the stretched vowel onto the nasal
    // (1.0) and drop the coda (0.5).
    assert_eq!(distance("かーん", "かん", &constraints).unwrap(), 1.5);
}

#[test]
fn ranking_prefers_phonetic_neighbors() {
    let words = WordList::from_entries(
        [
            ("カーン", "かーん"),
            ("シヴ", "しゔ"),
            ("サンダー", "さんだー"),
            ("ガン", "がん"),
        ]
        .into_iter()
        .map(|(name, reading)| WordEntry {
            name: name.to_string(),
            reading: reading.to_string(),
        })
        .collect(),
    );
    let matches = rank(&words, "かん", &Constraints::default(), 3);
    assert_eq!(matches.len(), 3);
    // が differs from か only in voicing; it must beat the stretched カーン.
    assert_eq!(matches[0].name, "ガン");
    assert_eq!(matches[1].name, "カーン");
}

#[test]
fn unconstrained_distance_is_symmetric_for_equal_mora_counts() {
    // With no indels in play only the symmetric substitution table is
    // exercised, so same-length alignments come out symmetric.
    let constraints = Constraints::default();
    for (a, b) in [
        ("かん", "さら"),
        ("しゃん", "きょく"),
        ("とり", "かさ"),
        ("じぇいす", "めーす"),
    ] {
        assert_eq!(
            distance(a, b, &constraints).unwrap(),
            distance(b, a, &constraints).unwrap(),
            "asymmetric for {a}/{b}"
        );
    }
}

// ============================================================================
// Property tests
// ============================================================================

/// Mixed pool: ordinary kana, digraph halves, special moras and the stray
/// small vowels, so generated readings also exercise the error paths.
const KANA_POOL: &[char] = &[
    'あ', 'い', 'う', 'え', 'お', 'か', 'き', 'く', 'さ', 'し', 'つ', 'て', 'に', 'ふ', 'み',
    'よ', 'ら', 'る', 'わ', 'が', 'じ', 'ず', 'で', 'ぼ', 'ぴ', 'ん', 'っ', 'ー', 'ゃ', 'ゅ',
    'ょ', 'ぁ', 'ぉ', 'ゔ',
];

fn arb_reading() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(KANA_POOL), 1..8)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Any reading that segments at all is at distance zero from itself.
    #[test]
    fn prop_identity(reading in arb_reading()) {
        let constraints = Constraints::default();
        if let Ok(d) = distance(&reading, &reading, &constraints) {
            prop_assert_eq!(d, 0.0);
        }
    }

    /// Segmentation never panics and resolved sequences never keep a
    /// long-vowel marker.
    #[test]
    fn prop_resolution_removes_markers(reading in arb_reading()) {
        if let Ok(moras) = to_moras(&reading) {
            prop_assert!(
                !moras.contains(&Mora::Special(SpecialMora::LongVowel))
            );
        }
    }

    /// Loosening a constraint never raises the distance.
    #[test]
    fn prop_relaxation_is_monotone(
        a in arb_reading(),
        b in arb_reading(),
        tight in 0usize..4,
    ) {
        if to_moras(&a).is_ok() && to_moras(&b).is_ok() {
            let mut previous = f64::INFINITY;
            for n in (0..=tight).rev() {
                let constraints = Constraints {
                    same_last_n_vowels: n,
                    same_first_n_moras: n / 2,
                    ..Constraints::default()
                };
                let d = distance(&a, &b, &constraints).unwrap();
                prop_assert!(d <= previous, "relaxing to {} raised {} -> {}", n, previous, d);
                previous = d;
            }
        }
    }

    /// Distances are never negative, and never NaN.
    #[test]
    fn prop_distance_is_nonnegative(
        a in arb_reading(),
        b in arb_reading(),
        last_moras in 0usize..3,
    ) {
        let constraints = Constraints {
            same_last_n_moras: last_moras,
            ..Constraints::default()
        };
        if let Ok(d) = distance(&a, &b, &constraints) {
            prop_assert!(d >= 0.0);
            prop_assert!(!d.is_nan());
        }
    }
}
