//! Compatibility scoring for candidate garments.
//!
//! A candidate is scored along four independent dimensions:
//! - **weather fit** compares its insulation with the context's target
//!   weight and rewards garments suited to the current season;
//! - **formality alignment**, **colour harmony** and **capsule cohesion** are
//!   each averaged over the garments already selected, defaulting to `1.0`
//!   when nothing has been chosen yet.
//!
//! The dimensions are blended by [`ScoreWeights`] (0.4/0.3/0.2/0.1 by
//! default) into the total of a
//! [`CompatibilityScore`](wardrobe_core::CompatibilityScore).
//! [`CompatibilityScorer`] implements the [`Scorer`](wardrobe_core::Scorer)
//! trait and can rank whole candidate sets; with the `parallel` feature the
//! batch fans out over `rayon` without changing the result.
//!
//! # Examples
//!
//! ```
//! use wardrobe_core::{Garment, OutfitContext, WeatherContext};
//! use wardrobe_scorer::calculate_compatibility_score;
//!
//! let weather = WeatherContext::from_readings(45.0, 50.0, 40.0, 0.1);
//! let coat = Garment::new("coat", "Wool Coat").with_weather_weight(3);
//! let score = calculate_compatibility_score(&coat, &OutfitContext::new(&weather, &[]));
//!
//! assert!((score.weather_fit - 0.9).abs() < 1e-9);
//! assert_eq!(score.formality_alignment, 1.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod compatibility;
mod dimensions;
mod error;
mod palette;
mod weights;

pub use compatibility::{CompatibilityScorer, calculate_compatibility_score};
pub use dimensions::{
    calculate_capsule_cohesion, calculate_color_harmony, calculate_formality_alignment,
    calculate_weather_fit, current_season, formality_alignment_for_difference,
};
pub use error::ScoreWeightsError;
pub use palette::{CLASHING_PAIRS, NEUTRAL_COLORS, colors_clash, is_neutral_color};
pub use weights::{SCORE_WEIGHT_TOLERANCE, ScoreWeights};
