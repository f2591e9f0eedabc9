//! Facade crate for the wardrobe scoring engine.
//!
//! This crate re-exports the core domain types, weather normalisation and
//! garment classification from `wardrobe-core`, together with the reference
//! compatibility scorer from `wardrobe-scorer`.
//!
//! ```
//! use wardrobe_engine::{CompatibilityScorer, Garment, OutfitContext, Scorer, WeatherContext};
//!
//! let weather = WeatherContext::from_readings(45.0, 50.0, 40.0, 0.1);
//! let coat = Garment::new("coat", "Camel Overcoat").with_weather_weight(3);
//! let score = CompatibilityScorer::default().score(&coat, &OutfitContext::new(&weather, &[]));
//! assert_eq!(score.formality_alignment, 1.0);
//! ```

#![forbid(unsafe_code)]

pub use wardrobe_core::category::{
    ClassificationRule, KeywordPattern, RuleCondition, RuleSetBuilder, is_ambiguous_category,
};
pub use wardrobe_core::weather::{
    DateParseError, TemperatureBand, WeatherInputError, calculate_daily_swing,
    classify_temperature, has_large_swing, is_rain_likely, map_temperature_to_weight,
    parse_selected_date,
};
pub use wardrobe_core::{
    CalendarWeatherResult, Category, ClassificationResult, CompatibilityScore, CurrentConditions,
    ForecastDay, Garment, GarmentError, OutfitContext, Provenance, RuleSet, RuleSetError, Scorer,
    Season, WeatherBands, WeatherContext, classify_item, normalize_weather_context,
    resolve_calendar_weather,
};
pub use wardrobe_scorer::{
    CompatibilityScorer, ScoreWeights, ScoreWeightsError, calculate_capsule_cohesion,
    calculate_color_harmony, calculate_compatibility_score, calculate_formality_alignment,
    calculate_weather_fit,
};

#[cfg(feature = "test-support")]
pub use wardrobe_core::test_support;
