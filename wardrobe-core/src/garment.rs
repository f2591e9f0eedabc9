//! Wardrobe items as supplied by the wardrobe store.
//!
//! The engine only reads garments. Optional fields resolve to the neutral
//! defaults in [`crate::defaults`] rather than failing.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Season;
use crate::defaults::{NEUTRAL_FORMALITY, UNKNOWN_COLOR};

/// Lowest formality score a garment may carry.
pub const MIN_FORMALITY: u8 = 1;
/// Highest formality score a garment may carry.
pub const MAX_FORMALITY: u8 = 10;
/// Heaviest insulation rating a garment may carry.
pub const MAX_WEATHER_WEIGHT: u8 = 3;

/// A single wardrobe item.
///
/// # Examples
/// ```
/// use wardrobe_core::{Garment, Season};
///
/// let coat = Garment::new("g-1", "Camel Overcoat")
///     .with_formality(8)
///     .with_color("Camel")
///     .with_weather_weight(3)
///     .with_season(Season::Winter);
///
/// assert_eq!(coat.effective_formality(), 8);
/// assert_eq!(coat.color_category(), "camel");
/// assert!(coat.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Garment {
    /// Identifier assigned by the wardrobe store.
    pub id: String,
    /// Display name, e.g. "Navy Blazer".
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Free-form category label, possibly ambiguous ("Jacket/Overshirt").
    #[cfg_attr(feature = "serde", serde(default, rename = "category"))]
    pub category_label: String,
    /// Fabric or material description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub material: Option<String>,
    /// Formality score in `1..=10`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub formality: Option<u8>,
    /// Inferred colour category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<String>,
    /// Style-grouping labels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub capsule_tags: BTreeSet<String>,
    /// Insulation rating in `0..=3`; higher is warmer.
    pub weather_weight: u8,
    /// Seasons the garment suits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seasons: Vec<Season>,
}

/// Errors returned by [`Garment::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GarmentError {
    /// The identifier was empty or whitespace.
    #[error("garment identifier must not be empty")]
    EmptyId,
    /// The formality score was outside `1..=10`.
    #[error("garment {id} has formality {formality}; expected 1 to 10")]
    FormalityOutOfRange {
        /// Offending garment.
        id: String,
        /// Value supplied by the store.
        formality: u8,
    },
    /// The weather weight was above 3.
    #[error("garment {id} has weather weight {weight}; expected 0 to 3")]
    WeatherWeightOutOfRange {
        /// Offending garment.
        id: String,
        /// Value supplied by the store.
        weight: u8,
    },
}

impl Garment {
    /// Construct the lightest possible garment with no optional data.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_label: String::new(),
            material: None,
            formality: None,
            color: None,
            capsule_tags: BTreeSet::new(),
            weather_weight: 0,
            seasons: Vec::new(),
        }
    }

    /// Set the free-form category label.
    #[must_use]
    pub fn with_category_label(mut self, label: impl Into<String>) -> Self {
        self.category_label = label.into();
        self
    }

    /// Set the material description.
    #[must_use]
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Set the formality score.
    #[must_use]
    pub const fn with_formality(mut self, formality: u8) -> Self {
        self.formality = Some(formality);
        self
    }

    /// Set the inferred colour category.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Add a capsule tag. Duplicate tags collapse.
    #[must_use]
    pub fn with_capsule_tag(mut self, tag: impl Into<String>) -> Self {
        self.capsule_tags.insert(tag.into());
        self
    }

    /// Set the insulation rating.
    #[must_use]
    pub const fn with_weather_weight(mut self, weight: u8) -> Self {
        self.weather_weight = weight;
        self
    }

    /// Add a season the garment suits.
    #[must_use]
    pub fn with_season(mut self, season: Season) -> Self {
        if !self.seasons.contains(&season) {
            self.seasons.push(season);
        }
        self
    }

    /// Formality used for scoring and classification.
    ///
    /// Missing scores resolve to [`NEUTRAL_FORMALITY`].
    #[must_use]
    pub fn effective_formality(&self) -> u8 {
        self.formality.unwrap_or(NEUTRAL_FORMALITY)
    }

    /// Lower-cased colour category, or [`UNKNOWN_COLOR`] when absent.
    #[must_use]
    pub fn color_category(&self) -> String {
        self.color
            .as_deref()
            .map(str::trim)
            .filter(|color| !color.is_empty())
            .map_or_else(|| UNKNOWN_COLOR.to_owned(), str::to_lowercase)
    }

    /// Report whether the garment suits `season`.
    #[must_use]
    pub fn suits_season(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }

    /// Check the record against the documented field domains.
    ///
    /// Scoring never calls this; it is meant for the boundary where records
    /// arrive from the wardrobe store.
    ///
    /// # Errors
    /// Returns [`GarmentError`] for an empty identifier, a formality outside
    /// `1..=10`, or a weather weight above 3.
    pub fn validate(&self) -> Result<(), GarmentError> {
        if self.id.trim().is_empty() {
            return Err(GarmentError::EmptyId);
        }
        if let Some(formality) = self.formality
            && !(MIN_FORMALITY..=MAX_FORMALITY).contains(&formality)
        {
            return Err(GarmentError::FormalityOutOfRange {
                id: self.id.clone(),
                formality,
            });
        }
        if self.weather_weight > MAX_WEATHER_WEIGHT {
            return Err(GarmentError::WeatherWeightOutOfRange {
                id: self.id.clone(),
                weight: self.weather_weight,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn tee() -> Garment {
        Garment::new("tee", "White Tee").with_weather_weight(1)
    }

    #[rstest]
    fn missing_formality_is_neutral(tee: Garment) {
        assert_eq!(tee.effective_formality(), NEUTRAL_FORMALITY);
    }

    #[rstest]
    #[case(None, "unknown")]
    #[case(Some("   "), "unknown")]
    #[case(Some("Navy"), "navy")]
    #[case(Some(" Grey "), "grey")]
    fn colour_category_normalises(
        tee: Garment,
        #[case] color: Option<&str>,
        #[case] expected: &str,
    ) {
        let garment = Garment {
            color: color.map(str::to_owned),
            ..tee
        };
        assert_eq!(garment.color_category(), expected);
    }

    #[rstest]
    fn duplicate_seasons_and_tags_collapse(tee: Garment) {
        let garment = tee
            .with_season(Season::Summer)
            .with_season(Season::Summer)
            .with_capsule_tag("minimal")
            .with_capsule_tag("minimal");
        assert_eq!(garment.seasons, vec![Season::Summer]);
        assert_eq!(garment.capsule_tags.len(), 1);
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    fn validate_rejects_formality_out_of_range(tee: Garment, #[case] formality: u8) {
        let err = tee.with_formality(formality).validate().unwrap_err();
        assert!(matches!(err, GarmentError::FormalityOutOfRange { .. }));
    }

    #[rstest]
    fn validate_rejects_heavy_weight(tee: Garment) {
        let err = tee.with_weather_weight(4).validate().unwrap_err();
        assert_eq!(
            err,
            GarmentError::WeatherWeightOutOfRange {
                id: "tee".into(),
                weight: 4
            }
        );
    }

    #[rstest]
    fn validate_rejects_blank_id() {
        let garment = Garment::new("  ", "Nameless");
        assert_eq!(garment.validate(), Err(GarmentError::EmptyId));
    }

    #[rstest]
    #[case(1)]
    #[case(10)]
    fn validate_accepts_boundary_formality(tee: Garment, #[case] formality: u8) {
        assert!(tee.with_formality(formality).validate().is_ok());
    }
}
