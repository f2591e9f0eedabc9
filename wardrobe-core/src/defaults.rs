//! Neutral defaults applied when collaborator data is missing.
//!
//! Every fallback the engine uses lives here so the policy can be audited in
//! one place. Missing data is never an error: it resolves to one of these
//! values instead.

/// Formality assumed for a garment without a formality score.
pub const NEUTRAL_FORMALITY: u8 = 5;

/// Colour category reported for a garment without an inferred colour.
pub const UNKNOWN_COLOR: &str = "unknown";

/// Colour harmony awarded when either colour is unknown.
pub const UNKNOWN_COLOR_HARMONY: f64 = 0.7;

/// Capsule cohesion awarded when either garment carries no capsule tags.
pub const UNTAGGED_CAPSULE_COHESION: f64 = 0.7;

/// Sub-score awarded for a dimension when nothing has been selected yet.
pub const EMPTY_SELECTION_SCORE: f64 = 1.0;

/// Current temperature (°F) of the neutral weather context.
pub const NEUTRAL_CURRENT_TEMP_F: f64 = 65.0;

/// Daily high (°F) of the neutral weather context.
pub const NEUTRAL_HIGH_TEMP_F: f64 = 70.0;

/// Daily low (°F) of the neutral weather context.
pub const NEUTRAL_LOW_TEMP_F: f64 = 60.0;

/// Precipitation probability of the neutral weather context.
pub const NEUTRAL_PRECIP_CHANCE: f64 = 0.0;

/// Condition text reported alongside the neutral weather context.
pub const NEUTRAL_CONDITION: &str = "typical conditions";

/// Precipitation probability assumed when a forecast day omits it.
pub const MISSING_PRECIP_CHANCE: f64 = 0.0;

/// Offset (°F) either side of the current temperature used to estimate the
/// daily high and low when no forecast is available.
pub const ESTIMATED_RANGE_OFFSET_F: f64 = 5.0;
