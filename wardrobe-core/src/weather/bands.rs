//! Temperature banding and the weather thresholds derived from it.
//!
//! Every function here is total over finite inputs. Boundaries are fixed
//! policy values and must not drift.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Lowest temperature (°F) classified as mild.
pub const MILD_FLOOR_F: f64 = 55.0;
/// Lowest temperature (°F) classified as warm.
pub const WARM_FLOOR_F: f64 = 75.0;
/// Lowest temperature (°F) classified as hot.
pub const HOT_FLOOR_F: f64 = 90.0;
/// Precipitation probability at or above which rain is considered likely.
pub const RAIN_LIKELY_THRESHOLD: f64 = 0.35;
/// Daily swing (°F) at or above which layering matters.
pub const LARGE_SWING_F: f64 = 20.0;

/// One of the four mutually exclusive temperature bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemperatureBand {
    /// At or below 54°F.
    Cold,
    /// 55°F to 74°F.
    Mild,
    /// 75°F to 89°F.
    Warm,
    /// 90°F and above.
    Hot,
}

impl TemperatureBand {
    /// Insulation target for the band: cold 3, mild 2, warm 1, hot 0.
    #[must_use]
    pub const fn target_weight(self) -> u8 {
        match self {
            Self::Cold => 3,
            Self::Mild => 2,
            Self::Warm => 1,
            Self::Hot => 0,
        }
    }
}

/// Boolean view over a [`TemperatureBand`].
///
/// Exactly one flag is ever set; the fields are private so the invariant
/// cannot be broken from outside.
///
/// # Examples
/// ```
/// use wardrobe_core::weather::classify_temperature;
///
/// let bands = classify_temperature(54.0);
/// assert!(bands.is_cold());
/// assert!(!bands.is_mild());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeatherBands {
    is_cold: bool,
    is_mild: bool,
    is_warm: bool,
    is_hot: bool,
}

impl WeatherBands {
    /// Build the flag set for a single band.
    #[must_use]
    pub const fn from_band(band: TemperatureBand) -> Self {
        Self {
            is_cold: matches!(band, TemperatureBand::Cold),
            is_mild: matches!(band, TemperatureBand::Mild),
            is_warm: matches!(band, TemperatureBand::Warm),
            is_hot: matches!(band, TemperatureBand::Hot),
        }
    }

    /// The band whose flag is set.
    #[must_use]
    pub const fn band(self) -> TemperatureBand {
        if self.is_cold {
            TemperatureBand::Cold
        } else if self.is_mild {
            TemperatureBand::Mild
        } else if self.is_warm {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        }
    }

    /// At or below 54°F.
    #[must_use]
    pub const fn is_cold(self) -> bool {
        self.is_cold
    }

    /// Between 55°F and 74°F.
    #[must_use]
    pub const fn is_mild(self) -> bool {
        self.is_mild
    }

    /// Between 75°F and 89°F.
    #[must_use]
    pub const fn is_warm(self) -> bool {
        self.is_warm
    }

    /// 90°F and above.
    #[must_use]
    pub const fn is_hot(self) -> bool {
        self.is_hot
    }
}

/// Classify a temperature in °F into its band.
///
/// Fractional readings fall into the band whose floor they have reached, so
/// 54.5°F is still cold and 74.9°F is still mild.
///
/// # Examples
/// ```
/// use wardrobe_core::weather::{TemperatureBand, classify_temperature};
///
/// assert_eq!(classify_temperature(-20.0).band(), TemperatureBand::Cold);
/// assert_eq!(classify_temperature(75.0).band(), TemperatureBand::Warm);
/// assert_eq!(classify_temperature(120.0).band(), TemperatureBand::Hot);
/// ```
#[must_use]
pub const fn classify_temperature(temp_f: f64) -> WeatherBands {
    debug_assert!(temp_f.is_finite(), "temperature must be finite");
    let band = if temp_f < MILD_FLOOR_F {
        TemperatureBand::Cold
    } else if temp_f < WARM_FLOOR_F {
        TemperatureBand::Mild
    } else if temp_f < HOT_FLOOR_F {
        TemperatureBand::Warm
    } else {
        TemperatureBand::Hot
    };
    WeatherBands::from_band(band)
}

/// Map bands to the preferred garment insulation weight.
#[must_use]
pub const fn map_temperature_to_weight(bands: WeatherBands) -> u8 {
    bands.band().target_weight()
}

/// Report whether rain should be planned for.
#[must_use]
pub const fn is_rain_likely(precip_chance: f64) -> bool {
    precip_chance >= RAIN_LIKELY_THRESHOLD
}

/// Absolute difference between two temperatures, in either order.
#[expect(
    clippy::float_arithmetic,
    reason = "daily swing is a temperature difference"
)]
#[must_use]
pub const fn calculate_daily_swing(high: f64, low: f64) -> f64 {
    (high - low).abs()
}

/// Report whether a daily swing warrants layering.
#[must_use]
pub const fn has_large_swing(swing: f64) -> bool {
    swing >= LARGE_SWING_F
}
