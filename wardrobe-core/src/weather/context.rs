//! Normalising raw weather readings into a [`WeatherContext`].

use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bands::{
    WeatherBands, calculate_daily_swing, classify_temperature, has_large_swing, is_rain_likely,
    map_temperature_to_weight,
};
use crate::defaults::{
    ESTIMATED_RANGE_OFFSET_F, MISSING_PRECIP_CHANCE, NEUTRAL_CURRENT_TEMP_F, NEUTRAL_HIGH_TEMP_F,
    NEUTRAL_LOW_TEMP_F, NEUTRAL_PRECIP_CHANCE,
};

/// Current conditions reported by the weather collaborator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrentConditions {
    /// Temperature in °F.
    pub temperature: f64,
    /// Human-readable condition, e.g. "Light rain".
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: String,
    /// Icon identifier supplied by the weather service.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
}

impl CurrentConditions {
    /// Construct a reading with empty condition text and icon.
    #[must_use]
    pub const fn new(temperature: f64) -> Self {
        Self {
            temperature,
            condition: String::new(),
            icon: String::new(),
        }
    }

    /// Set the condition text.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    /// Reject non-finite temperatures.
    ///
    /// # Errors
    /// Returns [`WeatherInputError::NonFiniteTemperature`] when the reading is
    /// NaN or infinite.
    pub fn validate(&self) -> Result<(), WeatherInputError> {
        require_finite("current temperature", self.temperature)
    }
}

/// Forecast daily high and low in °F.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemperatureRange {
    /// Daily high.
    pub high: f64,
    /// Daily low.
    pub low: f64,
}

/// One day of forecast data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForecastDay {
    /// Calendar date the forecast applies to.
    pub date: NaiveDate,
    /// Forecast high and low.
    pub temperature: TemperatureRange,
    /// Human-readable condition.
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: String,
    /// Icon identifier supplied by the weather service.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    /// Chance of precipitation in `[0, 1]`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub precipitation_probability: Option<f64>,
}

impl ForecastDay {
    /// Construct a forecast day with no condition text or precipitation.
    #[must_use]
    pub const fn new(date: NaiveDate, high: f64, low: f64) -> Self {
        Self {
            date,
            temperature: TemperatureRange { high, low },
            condition: String::new(),
            icon: String::new(),
            precipitation_probability: None,
        }
    }

    /// Set the condition text.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    /// Set the precipitation probability.
    #[must_use]
    pub const fn with_precipitation(mut self, probability: f64) -> Self {
        self.precipitation_probability = Some(probability);
        self
    }

    /// Reject non-finite temperatures and out-of-range probabilities.
    ///
    /// # Errors
    /// Returns [`WeatherInputError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), WeatherInputError> {
        require_finite("forecast high", self.temperature.high)?;
        require_finite("forecast low", self.temperature.low)?;
        match self.precipitation_probability {
            Some(chance) if !(0.0..=1.0).contains(&chance) => {
                Err(WeatherInputError::PrecipitationOutOfRange {
                    date: self.date,
                    chance,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Errors raised when validating weather inputs at the boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherInputError {
    /// A temperature was NaN or infinite.
    #[error("{field} must be a finite temperature, got {value}")]
    NonFiniteTemperature {
        /// Which reading was invalid.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A precipitation probability fell outside `[0, 1]`.
    #[error("precipitation probability {chance} for {date} must lie between 0 and 1")]
    PrecipitationOutOfRange {
        /// Forecast date carrying the value.
        date: NaiveDate,
        /// The rejected value.
        chance: f64,
    },
}

fn require_finite(field: &'static str, value: f64) -> Result<(), WeatherInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WeatherInputError::NonFiniteTemperature { field, value })
    }
}

/// Weather summary consumed by scoring.
///
/// Derived flags (bands, rain, swing, target weight) are always computed from
/// the readings, so the fields are private and the value is immutable.
///
/// # Examples
/// ```
/// use wardrobe_core::weather::WeatherContext;
///
/// let context = WeatherContext::from_readings(45.0, 50.0, 40.0, 0.1);
/// assert!(context.bands().is_cold());
/// assert_eq!(context.target_weight(), 3);
/// assert_eq!(context.daily_swing(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeatherContext {
    #[cfg_attr(feature = "serde", serde(flatten))]
    bands: WeatherBands,
    is_rain_likely: bool,
    daily_swing: f64,
    has_large_swing: bool,
    target_weight: u8,
    current_temp: f64,
    high_temp: f64,
    low_temp: f64,
    precip_chance: f64,
}

impl WeatherContext {
    /// Derive a context from raw readings.
    ///
    /// Bands and target weight follow `current_temp`; the swing follows the
    /// high and low.
    #[must_use]
    pub fn from_readings(current_temp: f64, high_temp: f64, low_temp: f64, precip: f64) -> Self {
        let daily_swing = calculate_daily_swing(high_temp, low_temp);
        Self::assemble(current_temp, high_temp, low_temp, daily_swing, precip)
    }

    /// The fallback used when no current conditions are available.
    ///
    /// Mild, 65°F with a 70/60 range, no rain and a reported swing of zero.
    #[must_use]
    pub fn neutral() -> Self {
        Self::assemble(
            NEUTRAL_CURRENT_TEMP_F,
            NEUTRAL_HIGH_TEMP_F,
            NEUTRAL_LOW_TEMP_F,
            0.0,
            NEUTRAL_PRECIP_CHANCE,
        )
    }

    fn assemble(
        current_temp: f64,
        high_temp: f64,
        low_temp: f64,
        daily_swing: f64,
        precip_chance: f64,
    ) -> Self {
        let bands = classify_temperature(current_temp);
        Self {
            bands,
            is_rain_likely: is_rain_likely(precip_chance),
            daily_swing,
            has_large_swing: has_large_swing(daily_swing),
            target_weight: map_temperature_to_weight(bands),
            current_temp,
            high_temp,
            low_temp,
            precip_chance,
        }
    }

    /// Temperature bands for the current reading.
    #[must_use]
    pub const fn bands(&self) -> WeatherBands {
        self.bands
    }

    /// Whether precipitation reaches the rain threshold.
    #[must_use]
    pub const fn is_rain_likely(&self) -> bool {
        self.is_rain_likely
    }

    /// Absolute difference between the daily high and low.
    #[must_use]
    pub const fn daily_swing(&self) -> f64 {
        self.daily_swing
    }

    /// Whether the daily swing warrants layering.
    #[must_use]
    pub const fn has_large_swing(&self) -> bool {
        self.has_large_swing
    }

    /// Preferred garment insulation in `0..=3`.
    #[must_use]
    pub const fn target_weight(&self) -> u8 {
        self.target_weight
    }

    /// Current temperature in °F.
    #[must_use]
    pub const fn current_temp(&self) -> f64 {
        self.current_temp
    }

    /// Daily high in °F.
    #[must_use]
    pub const fn high_temp(&self) -> f64 {
        self.high_temp
    }

    /// Daily low in °F.
    #[must_use]
    pub const fn low_temp(&self) -> f64 {
        self.low_temp
    }

    /// Precipitation probability in `[0, 1]`.
    #[must_use]
    pub const fn precip_chance(&self) -> f64 {
        self.precip_chance
    }
}

/// Combine current conditions and forecast days into a [`WeatherContext`].
///
/// Only the first forecast day is consulted. Missing data degrades to
/// defaults:
/// - no current reading yields [`WeatherContext::neutral`];
/// - no forecast estimates the range as the current temperature ± 5°F;
/// - a forecast day without precipitation data counts as 0%.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wardrobe_core::weather::{CurrentConditions, ForecastDay, normalize_weather_context};
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// let day = ForecastDay::new(date, 50.0, 40.0).with_precipitation(0.1);
/// let context = normalize_weather_context(Some(&CurrentConditions::new(45.0)), &[day]);
/// assert!(context.bands().is_cold());
/// assert!(!context.has_large_swing());
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "estimated ranges offset the current temperature"
)]
#[must_use]
pub fn normalize_weather_context(
    current: Option<&CurrentConditions>,
    forecast: &[ForecastDay],
) -> WeatherContext {
    let Some(reading) = current else {
        log::debug!("no current conditions; using the neutral weather context");
        return WeatherContext::neutral();
    };
    let temp = reading.temperature;
    match forecast.first() {
        Some(day) => WeatherContext::from_readings(
            temp,
            day.temperature.high,
            day.temperature.low,
            day.precipitation_probability
                .unwrap_or(MISSING_PRECIP_CHANCE),
        ),
        None => WeatherContext::from_readings(
            temp,
            temp + ESTIMATED_RANGE_OFFSET_F,
            temp - ESTIMATED_RANGE_OFFSET_F,
            MISSING_PRECIP_CHANCE,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap_or_default()
    }

    #[rstest]
    fn missing_current_yields_neutral_context(date: NaiveDate) {
        let hot_day = ForecastDay::new(date, 101.0, 88.0).with_precipitation(0.9);
        let context = normalize_weather_context(None, &[hot_day]);

        assert_eq!(context, WeatherContext::neutral());
        assert!(context.bands().is_mild());
        assert_eq!(context.current_temp(), 65.0);
        assert_eq!(context.high_temp(), 70.0);
        assert_eq!(context.low_temp(), 60.0);
        assert_eq!(context.daily_swing(), 0.0);
        assert_eq!(context.target_weight(), 2);
        assert!(!context.is_rain_likely());
    }

    #[rstest]
    fn missing_forecast_estimates_range() {
        let context = normalize_weather_context(Some(&CurrentConditions::new(80.0)), &[]);

        assert_eq!(context.high_temp(), 85.0);
        assert_eq!(context.low_temp(), 75.0);
        assert_eq!(context.daily_swing(), 10.0);
        assert!(context.bands().is_warm());
        assert_eq!(context.precip_chance(), 0.0);
    }

    #[rstest]
    fn classifies_off_current_temperature(date: NaiveDate) {
        let day = ForecastDay::new(date, 80.0, 70.0);
        let context = normalize_weather_context(Some(&CurrentConditions::new(50.0)), &[day]);

        assert!(context.bands().is_cold());
        assert_eq!(context.target_weight(), 3);
    }

    #[rstest]
    fn cold_morning_scenario(date: NaiveDate) {
        let day = ForecastDay::new(date, 50.0, 40.0).with_precipitation(0.1);
        let context = normalize_weather_context(Some(&CurrentConditions::new(45.0)), &[day]);

        assert!(context.bands().is_cold());
        assert_eq!(context.target_weight(), 3);
        assert_eq!(context.daily_swing(), 10.0);
        assert!(!context.has_large_swing());
        assert!(!context.is_rain_likely());
    }

    #[rstest]
    fn large_swing_and_rain_are_derived(date: NaiveDate) {
        let day = ForecastDay::new(date, 78.0, 52.0).with_precipitation(0.35);
        let context = normalize_weather_context(Some(&CurrentConditions::new(60.0)), &[day]);

        assert_eq!(context.daily_swing(), 26.0);
        assert!(context.has_large_swing());
        assert!(context.is_rain_likely());
    }

    #[rstest]
    fn missing_precipitation_defaults_to_zero(date: NaiveDate) {
        let day = ForecastDay::new(date, 70.0, 60.0);
        let context = normalize_weather_context(Some(&CurrentConditions::new(65.0)), &[day]);
        assert_eq!(context.precip_chance(), 0.0);
    }

    #[rstest]
    fn validation_rejects_non_finite_readings(date: NaiveDate) {
        let current = CurrentConditions::new(f64::NAN);
        assert!(matches!(
            current.validate(),
            Err(WeatherInputError::NonFiniteTemperature { field: "current temperature", .. })
        ));

        let day = ForecastDay::new(date, f64::INFINITY, 40.0);
        assert!(matches!(
            day.validate(),
            Err(WeatherInputError::NonFiniteTemperature { field: "forecast high", .. })
        ));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    fn validation_rejects_out_of_range_precipitation(date: NaiveDate, #[case] chance: f64) {
        let day = ForecastDay::new(date, 60.0, 50.0).with_precipitation(chance);
        assert!(matches!(
            day.validate(),
            Err(WeatherInputError::PrecipitationOutOfRange { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn forecast_day_reads_collaborator_payload() {
        let payload = r#"{
            "date": "2026-03-14",
            "temperature": {"high": 61.5, "low": 44.0},
            "condition": "Showers",
            "icon": "rain",
            "precipitationProbability": 0.6
        }"#;
        let day: ForecastDay = serde_json::from_str(payload).unwrap_or_else(|err| {
            panic!("forecast payload should decode: {err}");
        });
        assert_eq!(day.temperature.high, 61.5);
        assert_eq!(day.precipitation_probability, Some(0.6));
    }
}
