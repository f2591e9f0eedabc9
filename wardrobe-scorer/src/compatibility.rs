//! Aggregate compatibility scoring and batch ranking.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use wardrobe_core::defaults::EMPTY_SELECTION_SCORE;
use wardrobe_core::{CompatibilityScore, Garment, OutfitContext, Scorer};

use crate::dimensions::{
    calculate_capsule_cohesion, calculate_formality_alignment, calculate_weather_fit,
};
use crate::{ScoreWeights, ScoreWeightsError, calculate_color_harmony};

/// Scorer combining weather fit with agreement against the selection.
///
/// # Examples
/// ```
/// use wardrobe_core::{Garment, OutfitContext, Scorer, WeatherContext};
/// use wardrobe_scorer::{CompatibilityScorer, ScoreWeights};
///
/// # fn main() -> Result<(), wardrobe_scorer::ScoreWeightsError> {
/// let scorer = CompatibilityScorer::new(ScoreWeights::default())?;
/// let weather = WeatherContext::neutral();
/// let selected = [Garment::new("shirt", "Oxford").with_formality(6).with_color("white")];
/// let blazer = Garment::new("blazer", "Navy Blazer")
///     .with_formality(7)
///     .with_color("navy")
///     .with_weather_weight(2);
///
/// let score = scorer.score(&blazer, &OutfitContext::new(&weather, &selected));
/// assert_eq!(score.color_harmony, 1.0);
/// assert_eq!(score.formality_alignment, 0.9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CompatibilityScorer {
    weights: ScoreWeights,
}

impl CompatibilityScorer {
    /// Construct a scorer with validated weights.
    ///
    /// # Errors
    /// Propagates [`ScoreWeightsError`] from [`ScoreWeights::validate`].
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights used for the total.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score every candidate against the same outfit.
    ///
    /// Scores are returned in candidate order. With the `parallel` feature
    /// candidates are scored on the `rayon` thread pool; the result is
    /// identical to scoring them one by one.
    #[must_use]
    pub fn score_candidates(
        &self,
        candidates: &[Garment],
        outfit: &OutfitContext<'_>,
    ) -> Vec<CompatibilityScore> {
        #[cfg(feature = "parallel")]
        {
            candidates
                .par_iter()
                .map(|candidate| self.score(candidate, outfit))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            candidates
                .iter()
                .map(|candidate| self.score(candidate, outfit))
                .collect()
        }
    }
}

/// Mean of a dimension across the selection, or the empty-selection score.
#[expect(
    clippy::float_arithmetic,
    reason = "sub-scores are averaged over the selection"
)]
fn mean_over<F>(selected: &[Garment], dimension: F) -> f64
where
    F: Fn(&Garment) -> f64,
{
    if selected.is_empty() {
        return EMPTY_SELECTION_SCORE;
    }
    let (sum, count) = selected
        .iter()
        .map(dimension)
        .fold((0.0, 0.0), |(sum, count), score| (sum + score, count + 1.0));
    sum / count
}

impl Scorer for CompatibilityScorer {
    fn score(&self, candidate: &Garment, outfit: &OutfitContext<'_>) -> CompatibilityScore {
        let candidate_color = candidate.color_category();
        let weather_fit = Self::sanitise(calculate_weather_fit(candidate, outfit.weather));
        let formality_alignment = Self::sanitise(mean_over(outfit.selected, |other| {
            calculate_formality_alignment(candidate, other)
        }));
        let color_harmony = Self::sanitise(mean_over(outfit.selected, |other| {
            calculate_color_harmony(&candidate_color, &other.color_category())
        }));
        let capsule_cohesion = Self::sanitise(mean_over(outfit.selected, |other| {
            calculate_capsule_cohesion(candidate, other)
        }));
        let total = Self::sanitise(self.weights.combine([
            weather_fit,
            formality_alignment,
            color_harmony,
            capsule_cohesion,
        ]));
        log::trace!(
            "candidate {}: weather {weather_fit:.3}, formality {formality_alignment:.3}, \
             colour {color_harmony:.3}, capsule {capsule_cohesion:.3}, total {total:.3}",
            candidate.id
        );
        CompatibilityScore {
            weather_fit,
            formality_alignment,
            color_harmony,
            capsule_cohesion,
            total,
        }
    }
}

/// Score `candidate` against `outfit` with the reference weights.
#[must_use]
pub fn calculate_compatibility_score(
    candidate: &Garment,
    outfit: &OutfitContext<'_>,
) -> CompatibilityScore {
    CompatibilityScorer::default().score(candidate, outfit)
}
