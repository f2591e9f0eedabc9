//! The four compatibility dimensions.
//!
//! Each function is total over well-typed input and returns a value in
//! `0.0..=1.0`. Garment fields outside their documented domain are clamped
//! into range with a warning.

use wardrobe_core::defaults::{UNKNOWN_COLOR, UNKNOWN_COLOR_HARMONY, UNTAGGED_CAPSULE_COHESION};
use wardrobe_core::weather::WeatherContext;
use wardrobe_core::{Garment, MAX_FORMALITY, MAX_WEATHER_WEIGHT, MIN_FORMALITY, Season};

use crate::palette::{colors_clash, is_neutral_color};

const WEATHER_FIT_BASE: f64 = 0.5;
const SEASON_BONUS: f64 = 0.1;
/// Below this temperature (°F) a mild day counts as autumn.
const FALL_CEILING_F: f64 = 65.0;

const FORMALITY_TABLE: [f64; 5] = [1.0, 0.9, 0.75, 0.6, 0.4];
const FORMALITY_TAIL_START: f64 = 0.3;
const FORMALITY_TAIL_STEP: f64 = 0.1;

const SAME_COLOR_HARMONY: f64 = 0.85;
const CLASHING_HARMONY: f64 = 0.3;
const NEUTRAL_PAIR_HARMONY: f64 = 1.0;
const ONE_NEUTRAL_HARMONY: f64 = 0.85;
const DISTINCT_COLOR_HARMONY: f64 = 0.6;

const NO_SHARED_TAGS: f64 = 0.5;
const ONE_SHARED_TAG: f64 = 0.8;
const MANY_SHARED_TAGS: f64 = 0.95;

/// Coarse season implied by the weather, used for the season bonus.
///
/// Cold is winter and hot is summer; otherwise a reading below 65°F counts
/// as fall and anything else as spring. The calendar month plays no part.
#[must_use]
pub const fn current_season(context: &WeatherContext) -> Season {
    let bands = context.bands();
    if bands.is_cold() {
        Season::Winter
    } else if bands.is_hot() {
        Season::Summer
    } else if context.current_temp() < FALL_CEILING_F {
        Season::Fall
    } else {
        Season::Spring
    }
}

fn weather_weight(garment: &Garment) -> u8 {
    if garment.weather_weight > MAX_WEATHER_WEIGHT {
        log::warn!(
            "garment {} has weather weight {}; treating it as {MAX_WEATHER_WEIGHT}",
            garment.id,
            garment.weather_weight
        );
        return MAX_WEATHER_WEIGHT;
    }
    garment.weather_weight
}

fn formality(garment: &Garment) -> u8 {
    let raw = garment.effective_formality();
    let bounded = raw.clamp(MIN_FORMALITY, MAX_FORMALITY);
    if bounded != raw {
        log::warn!(
            "garment {} has formality {raw}; treating it as {bounded}",
            garment.id
        );
    }
    bounded
}

/// Score how well a garment's insulation suits the weather.
///
/// Starts at 0.5 and adjusts by the distance between the garment's weather
/// weight and the context's target weight: +0.4 for an exact match, +0.2
/// for one step, −0.1 for two and −0.3 beyond. Garments listing the
/// [`current_season`] earn a further 0.1.
///
/// # Examples
/// ```
/// use wardrobe_core::{Garment, Season, WeatherContext};
/// use wardrobe_scorer::calculate_weather_fit;
///
/// let cold = WeatherContext::from_readings(40.0, 45.0, 35.0, 0.0);
/// let parka = Garment::new("p", "Parka")
///     .with_weather_weight(3)
///     .with_season(Season::Winter);
/// assert_eq!(calculate_weather_fit(&parka, &cold), 1.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "weather fit adds adjustments to a base score"
)]
#[must_use]
pub fn calculate_weather_fit(garment: &Garment, context: &WeatherContext) -> f64 {
    let adjustment = match weather_weight(garment).abs_diff(context.target_weight()) {
        0 => 0.4,
        1 => 0.2,
        2 => -0.1,
        _ => -0.3,
    };
    let bonus = if garment.suits_season(current_season(context)) {
        SEASON_BONUS
    } else {
        0.0
    };
    (WEATHER_FIT_BASE + adjustment + bonus).clamp(0.0, 1.0)
}

/// Formality alignment for a given absolute difference in formality.
///
/// Differences up to four follow a fixed table (1.0, 0.9, 0.75, 0.6, 0.4);
/// from five the score drops by 0.1 per step from 0.3, never below zero.
#[expect(
    clippy::float_arithmetic,
    reason = "large differences decay linearly"
)]
#[must_use]
pub fn formality_alignment_for_difference(difference: u8) -> f64 {
    if let Some(score) = FORMALITY_TABLE.get(usize::from(difference)) {
        return *score;
    }
    let excess = f64::from(difference.saturating_sub(5));
    (FORMALITY_TAIL_START - excess * FORMALITY_TAIL_STEP).max(0.0)
}

/// Score how closely two garments' formality agrees.
///
/// Missing formality counts as neutral (5).
///
/// # Examples
/// ```
/// use wardrobe_core::Garment;
/// use wardrobe_scorer::calculate_formality_alignment;
///
/// let shirt = Garment::new("s", "Shirt").with_formality(7);
/// let blazer = Garment::new("b", "Blazer").with_formality(8);
/// assert_eq!(calculate_formality_alignment(&shirt, &blazer), 0.9);
/// ```
#[must_use]
pub fn calculate_formality_alignment(a: &Garment, b: &Garment) -> f64 {
    formality_alignment_for_difference(formality(a).abs_diff(formality(b)))
}

/// Score how well two colour categories pair.
///
/// Colours are compared case-insensitively; a blank colour counts as
/// unknown.
///
/// # Examples
/// ```
/// use wardrobe_scorer::calculate_color_harmony;
///
/// assert_eq!(calculate_color_harmony("navy", "white"), 1.0);
/// assert_eq!(calculate_color_harmony("navy", "navy"), 0.85);
/// assert_eq!(calculate_color_harmony("green", "red"), 0.3);
/// assert_eq!(calculate_color_harmony("unknown", "red"), 0.7);
/// ```
#[must_use]
pub fn calculate_color_harmony(a: &str, b: &str) -> f64 {
    let first = normalise_color(a);
    let second = normalise_color(b);
    if first == UNKNOWN_COLOR || second == UNKNOWN_COLOR {
        return UNKNOWN_COLOR_HARMONY;
    }
    if first == second {
        return SAME_COLOR_HARMONY;
    }
    if colors_clash(&first, &second) {
        return CLASHING_HARMONY;
    }
    match (is_neutral_color(&first), is_neutral_color(&second)) {
        (true, true) => NEUTRAL_PAIR_HARMONY,
        (true, false) | (false, true) => ONE_NEUTRAL_HARMONY,
        (false, false) => DISTINCT_COLOR_HARMONY,
    }
}

fn normalise_color(color: &str) -> String {
    let trimmed = color.trim();
    if trimmed.is_empty() {
        UNKNOWN_COLOR.to_owned()
    } else {
        trimmed.to_lowercase()
    }
}

/// Score how many capsule tags two garments share.
///
/// Untagged garments score 0.7; otherwise no shared tag scores 0.5, one
/// scores 0.8 and two or more score 0.95.
#[must_use]
pub fn calculate_capsule_cohesion(a: &Garment, b: &Garment) -> f64 {
    if a.capsule_tags.is_empty() || b.capsule_tags.is_empty() {
        return UNTAGGED_CAPSULE_COHESION;
    }
    match a.capsule_tags.intersection(&b.capsule_tags).take(2).count() {
        0 => NO_SHARED_TAGS,
        1 => ONE_SHARED_TAG,
        _ => MANY_SHARED_TAGS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-9;

    fn formal(score: u8) -> Garment {
        Garment::new("g", "Layer").with_formality(score)
    }

    fn tagged(tags: &[&str]) -> Garment {
        tags.iter()
            .fold(Garment::new("g", "Layer"), |garment, tag| {
                garment.with_capsule_tag(*tag)
            })
    }

    #[fixture]
    fn mild_context() -> WeatherContext {
        WeatherContext::from_readings(60.0, 65.0, 55.0, 0.0)
    }

    #[rstest]
    #[case(40.0, Season::Winter)]
    #[case(54.9, Season::Winter)]
    #[case(55.0, Season::Fall)]
    #[case(64.9, Season::Fall)]
    #[case(65.0, Season::Spring)]
    #[case(89.0, Season::Spring)]
    #[case(90.0, Season::Summer)]
    fn season_follows_temperature(#[case] temp: f64, #[case] expected: Season) {
        let context = WeatherContext::from_readings(temp, temp, temp, 0.0);
        assert_eq!(current_season(&context), expected);
    }

    #[rstest]
    #[case(2, 0.9)]
    #[case(1, 0.7)]
    #[case(3, 0.7)]
    #[case(0, 0.4)]
    fn weather_fit_scales_with_distance(
        mild_context: WeatherContext,
        #[case] weight: u8,
        #[case] expected: f64,
    ) {
        let garment = Garment::new("g", "Layer").with_weather_weight(weight);
        let fit = calculate_weather_fit(&garment, &mild_context);
        assert!((fit - expected).abs() < TOLERANCE, "fit {fit}");
    }

    #[rstest]
    fn weather_fit_rewards_the_current_season(mild_context: WeatherContext) {
        let garment = Garment::new("g", "Layer")
            .with_weather_weight(2)
            .with_season(Season::Fall);
        assert!((calculate_weather_fit(&garment, &mild_context) - 1.0).abs() < TOLERANCE);
    }

    #[rstest]
    fn heaviest_garment_on_a_hot_day() {
        let hot = WeatherContext::from_readings(95.0, 100.0, 85.0, 0.0);
        let garment = Garment::new("g", "Parka")
            .with_weather_weight(3)
            .with_season(Season::Winter);
        assert!((calculate_weather_fit(&garment, &hot) - 0.2).abs() < TOLERANCE);
    }

    #[rstest]
    fn out_of_range_weight_is_clamped(mild_context: WeatherContext) {
        let garment = Garment::new("g", "Layer").with_weather_weight(9);
        let fit = calculate_weather_fit(&garment, &mild_context);
        assert!((fit - 0.7).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(1, 0.9)]
    #[case(2, 0.75)]
    #[case(3, 0.6)]
    #[case(4, 0.4)]
    #[case(5, 0.3)]
    #[case(6, 0.2)]
    #[case(7, 0.1)]
    #[case(8, 0.0)]
    #[case(9, 0.0)]
    fn formality_breakpoints(#[case] difference: u8, #[case] expected: f64) {
        let score = formality_alignment_for_difference(difference);
        assert!((score - expected).abs() < TOLERANCE, "score {score}");
        assert!(score >= 0.0);
    }

    #[rstest]
    #[case(formal(7), formal(7), 1.0)]
    #[case(formal(7), formal(8), 0.9)]
    #[case(formal(5), formal(7), 0.75)]
    #[case(Garment::new("g", "Layer"), formal(7), 0.75)]
    #[case(formal(1), formal(10), 0.0)]
    fn formality_between_garments(#[case] a: Garment, #[case] b: Garment, #[case] expected: f64) {
        assert!((calculate_formality_alignment(&a, &b) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    #[case("navy", "white", 1.0)]
    #[case("navy", "navy", 0.85)]
    #[case("red", "green", 0.3)]
    #[case("green", "red", 0.3)]
    #[case("brown", "black", 0.3)]
    #[case("unknown", "navy", 0.7)]
    #[case("", "navy", 0.7)]
    #[case("Navy", "olive", 0.85)]
    #[case("olive", "mustard", 0.6)]
    #[case("RED", "red", 0.85)]
    fn color_pairs(#[case] a: &str, #[case] b: &str, #[case] expected: f64) {
        assert!((calculate_color_harmony(a, b) - expected).abs() < TOLERANCE);
    }

    #[rstest]
    #[case(&[], &["city"], 0.7)]
    #[case(&["city"], &[], 0.7)]
    #[case(&["city"], &["weekend"], 0.5)]
    #[case(&["city", "minimal"], &["city"], 0.8)]
    #[case(&["city", "minimal", "tailored"], &["minimal", "city"], 0.95)]
    fn capsule_overlap(#[case] a: &[&str], #[case] b: &[&str], #[case] expected: f64) {
        let score = calculate_capsule_cohesion(&tagged(a), &tagged(b));
        assert!((score - expected).abs() < TOLERANCE);
    }
}
