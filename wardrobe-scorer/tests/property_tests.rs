//! Property-based tests for compatibility scoring.
//!
//! # Invariants tested
//!
//! - **Score range:** every component and the total lie in `[0, 1]`.
//! - **Weighted total:** the total equals the reference weighted sum.
//! - **Empty selection:** selection-dependent dimensions default to 1.
//! - **Symmetry:** colour harmony ignores argument order.
//! - **Batch order:** batch scoring matches one-by-one scoring in order.

use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use wardrobe_core::{Garment, OutfitContext, Scorer, Season, WeatherContext};
use wardrobe_scorer::{CompatibilityScorer, calculate_color_harmony};

const TOLERANCE: f64 = 1e-9;
const COLORS: [&str; 10] = [
    "black", "white", "navy", "brown", "red", "green", "blue", "burgundy", "olive", "unknown",
];
const TAGS: [&str; 4] = ["city", "weekend", "tailored", "outdoor"];

fn garment_strategy() -> impl Strategy<Value = Garment> {
    (
        "[a-z]{1,8}",
        proptest::option::of(1_u8..=10),
        proptest::option::of(proptest::sample::select(COLORS.to_vec())),
        btree_set(proptest::sample::select(TAGS.to_vec()), 0..=3),
        0_u8..=3,
        vec(proptest::sample::select(Season::ALL.to_vec()), 0..=4),
    )
        .prop_map(|(id, formality, color, tags, weight, seasons)| {
            let base = Garment {
                formality,
                color: color.map(str::to_owned),
                ..Garment::new(id.clone(), id)
            };
            let tagged = tags
                .into_iter()
                .fold(base, |garment, tag| garment.with_capsule_tag(tag));
            seasons
                .into_iter()
                .fold(tagged.with_weather_weight(weight), Garment::with_season)
        })
}

fn weather_strategy() -> impl Strategy<Value = WeatherContext> {
    (-20.0_f64..120.0, -20.0_f64..120.0, -20.0_f64..120.0, 0.0_f64..=1.0).prop_map(
        |(current, high, low, precip)| WeatherContext::from_readings(current, high, low, precip),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn scores_stay_normalised(
        candidate in garment_strategy(),
        selected in vec(garment_strategy(), 0..6),
        weather in weather_strategy(),
    ) {
        let score = CompatibilityScorer::default()
            .score(&candidate, &OutfitContext::new(&weather, &selected));
        prop_assert!(score.is_normalised(), "{score:?}");
    }

    #[test]
    fn total_is_the_weighted_sum(
        candidate in garment_strategy(),
        selected in vec(garment_strategy(), 0..6),
        weather in weather_strategy(),
    ) {
        let score = CompatibilityScorer::default()
            .score(&candidate, &OutfitContext::new(&weather, &selected));
        let expected = score.weather_fit * 0.4
            + score.formality_alignment * 0.3
            + score.color_harmony * 0.2
            + score.capsule_cohesion * 0.1;
        prop_assert!((score.total - expected).abs() < TOLERANCE);
    }

    #[test]
    fn empty_selection_is_fully_compatible(
        candidate in garment_strategy(),
        weather in weather_strategy(),
    ) {
        let score = CompatibilityScorer::default()
            .score(&candidate, &OutfitContext::new(&weather, &[]));
        prop_assert_eq!(score.formality_alignment, 1.0);
        prop_assert_eq!(score.color_harmony, 1.0);
        prop_assert_eq!(score.capsule_cohesion, 1.0);
    }

    #[test]
    fn colour_harmony_is_symmetric(
        a in proptest::sample::select(COLORS.to_vec()),
        b in proptest::sample::select(COLORS.to_vec()),
    ) {
        prop_assert_eq!(calculate_color_harmony(a, b), calculate_color_harmony(b, a));
    }

    #[test]
    fn batch_scoring_matches_sequential(
        candidates in vec(garment_strategy(), 0..24),
        selected in vec(garment_strategy(), 0..4),
        weather in weather_strategy(),
    ) {
        let scorer = CompatibilityScorer::default();
        let outfit = OutfitContext::new(&weather, &selected);
        let sequential: Vec<_> = candidates
            .iter()
            .map(|candidate| scorer.score(candidate, &outfit))
            .collect();
        prop_assert_eq!(scorer.score_candidates(&candidates, &outfit), sequential);
    }
}
