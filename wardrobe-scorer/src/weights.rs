//! Relative weighting of the four compatibility dimensions.

use crate::ScoreWeightsError;

/// Allowed deviation of the weight sum from one.
pub const SCORE_WEIGHT_TOLERANCE: f64 = 1e-6;

/// Multipliers blending the dimension scores into a total.
///
/// Weights are non-negative and sum to one, so a total built from
/// normalised components stays within `0.0..=1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to weather fit.
    pub weather_fit: f64,
    /// Multiplier applied to formality alignment.
    pub formality: f64,
    /// Multiplier applied to colour harmony.
    pub color: f64,
    /// Multiplier applied to capsule cohesion.
    pub capsule: f64,
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is not finite, is
    /// negative, or the weights do not sum to one within
    /// [`SCORE_WEIGHT_TOLERANCE`].
    #[expect(
        clippy::float_arithmetic,
        reason = "validation compares the weight sum with one"
    )]
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        for (name, value) in self.named() {
            if !value.is_finite() {
                return Err(ScoreWeightsError::NonFinite { name });
            }
            if value < 0.0 {
                return Err(ScoreWeightsError::Negative { name, value });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > SCORE_WEIGHT_TOLERANCE {
            return Err(ScoreWeightsError::InvalidSum { sum });
        }
        Ok(self)
    }

    const fn named(self) -> [(&'static str, f64); 4] {
        [
            ("weather fit", self.weather_fit),
            ("formality", self.formality),
            ("color", self.color),
            ("capsule", self.capsule),
        ]
    }

    #[expect(clippy::float_arithmetic, reason = "weights are summed")]
    const fn sum(self) -> f64 {
        self.weather_fit + self.formality + self.color + self.capsule
    }

    /// Blend the four dimension scores, given in reporting order.
    #[expect(
        clippy::float_arithmetic,
        reason = "the total is a weighted sum of the components"
    )]
    #[must_use]
    pub const fn combine(self, components: [f64; 4]) -> f64 {
        let [weather_fit, formality, color, capsule] = components;
        weather_fit * self.weather_fit
            + formality * self.formality
            + color * self.color
            + capsule * self.capsule
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            weather_fit: 0.4,
            formality: 0.3,
            color: 0.2,
            capsule: 0.1,
        }
    }
}
