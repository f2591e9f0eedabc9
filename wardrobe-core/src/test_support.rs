//! Test-only fixtures shared by unit, behaviour and downstream crate tests.

use crate::{CompatibilityScore, Garment, OutfitContext, Scorer, Season};

/// `Scorer` returning the same score for every candidate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedScorer {
    /// Score handed back for every call.
    pub score: CompatibilityScore,
}

impl FixedScorer {
    /// Build a scorer whose components and total all equal `value`.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            score: CompatibilityScore {
                weather_fit: value,
                formality_alignment: value,
                color_harmony: value,
                capsule_cohesion: value,
                total: value,
            },
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, _candidate: &Garment, _outfit: &OutfitContext<'_>) -> CompatibilityScore {
        self.score
    }
}

/// A small, varied wardrobe covering every weather weight.
///
/// Includes garments without formality, colour or tags so neutral defaults
/// are exercised.
#[must_use]
pub fn sample_wardrobe() -> Vec<Garment> {
    vec![
        Garment::new("overcoat", "Camel Overcoat")
            .with_category_label("Jacket")
            .with_material("Wool")
            .with_formality(8)
            .with_color("khaki")
            .with_capsule_tag("city")
            .with_capsule_tag("tailored")
            .with_weather_weight(3)
            .with_season(Season::Winter),
        Garment::new("blazer", "Navy Blazer")
            .with_category_label("Jacket/Overshirt")
            .with_formality(7)
            .with_color("navy")
            .with_capsule_tag("tailored")
            .with_weather_weight(2)
            .with_season(Season::Fall)
            .with_season(Season::Spring),
        Garment::new("shacket", "Flannel Shacket")
            .with_category_label("Jacket/Overshirt")
            .with_material("Cotton flannel")
            .with_formality(3)
            .with_color("red")
            .with_capsule_tag("weekend")
            .with_weather_weight(2)
            .with_season(Season::Fall),
        Garment::new("oxford", "White Oxford Shirt")
            .with_formality(6)
            .with_color("white")
            .with_capsule_tag("city")
            .with_capsule_tag("tailored")
            .with_weather_weight(1)
            .with_season(Season::Spring)
            .with_season(Season::Summer),
        Garment::new("tee", "Green Tee")
            .with_color("green")
            .with_weather_weight(0)
            .with_season(Season::Summer),
        Garment::new("mystery", "Unlabelled Layer").with_weather_weight(1),
    ]
}

/// Look a garment up in [`sample_wardrobe`] by identifier.
///
/// # Panics
/// Panics when no garment has the identifier.
#[must_use]
pub fn sample_garment(id: &str) -> Garment {
    sample_wardrobe()
        .into_iter()
        .find(|garment| garment.id == id)
        .unwrap_or_else(|| panic!("no sample garment with id {id}"))
}
