//! Score candidate garments against an outfit in progress.
//!
//! The [`Scorer`] trait assigns a [`CompatibilityScore`] to a candidate
//! [`Garment`] given an [`OutfitContext`]: the resolved weather and the
//! garments already chosen.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Garment, WeatherContext};

/// Per-dimension scores for one candidate, plus the weighted total.
///
/// Every field lies in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompatibilityScore {
    /// Fit between the garment's insulation and the weather.
    pub weather_fit: f64,
    /// Mean formality agreement with the selected garments.
    pub formality_alignment: f64,
    /// Mean colour harmony with the selected garments.
    pub color_harmony: f64,
    /// Mean capsule-tag overlap with the selected garments.
    pub capsule_cohesion: f64,
    /// Weighted aggregate of the four dimensions.
    pub total: f64,
}

impl CompatibilityScore {
    /// The four dimension scores in reporting order.
    #[must_use]
    pub const fn components(&self) -> [f64; 4] {
        [
            self.weather_fit,
            self.formality_alignment,
            self.color_harmony,
            self.capsule_cohesion,
        ]
    }

    /// Report whether every component and the total lie in `0.0..=1.0`.
    #[must_use]
    pub fn is_normalised(&self) -> bool {
        self.components()
            .into_iter()
            .chain(std::iter::once(self.total))
            .all(|score| (0.0..=1.0).contains(&score))
    }
}

/// What a candidate is scored against.
///
/// # Examples
/// ```
/// use wardrobe_core::{OutfitContext, WeatherContext};
///
/// let weather = WeatherContext::neutral();
/// let outfit = OutfitContext::new(&weather, &[]);
/// assert!(outfit.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OutfitContext<'a> {
    /// Weather the outfit must suit.
    pub weather: &'a WeatherContext,
    /// Garments already chosen, in selection order.
    pub selected: &'a [Garment],
}

impl<'a> OutfitContext<'a> {
    /// Bundle weather and selection.
    #[must_use]
    pub const fn new(weather: &'a WeatherContext, selected: &'a [Garment]) -> Self {
        Self { weather, selected }
    }

    /// Report whether nothing has been selected yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Calculate how well a candidate garment fits an outfit in progress.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so candidate sets
/// can be scored across threads. Scoring is infallible and never mutates the
/// candidate or the selection; missing garment data resolves to the neutral
/// defaults.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Keep every component and the total within `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use wardrobe_core::{CompatibilityScore, Garment, OutfitContext, Scorer, WeatherContext};
///
/// struct UnitScorer;
///
/// impl Scorer for UnitScorer {
///     fn score(&self, _candidate: &Garment, _outfit: &OutfitContext<'_>) -> CompatibilityScore {
///         CompatibilityScore {
///             weather_fit: 1.0,
///             formality_alignment: 1.0,
///             color_harmony: 1.0,
///             capsule_cohesion: 1.0,
///             total: 1.0,
///         }
///     }
/// }
///
/// let weather = WeatherContext::neutral();
/// let outfit = OutfitContext::new(&weather, &[]);
/// let tee = Garment::new("tee", "White Tee");
/// assert_eq!(UnitScorer.score(&tee, &outfit).total, 1.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return the compatibility of `candidate` with `outfit`.
    fn score(&self, candidate: &Garment, outfit: &OutfitContext<'_>) -> CompatibilityScore;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
