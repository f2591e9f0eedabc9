//! Choosing which weather applies to a calendar date.
//!
//! Resolution tries, in order, an exact forecast match, a seasonal estimate
//! extrapolated from current conditions, and finally the neutral context.

use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde::Serialize;
use thiserror::Error;

use super::context::{CurrentConditions, ForecastDay, WeatherContext, normalize_weather_context};
use crate::defaults::NEUTRAL_CONDITION;

/// Temperature shift (°F) applied per month of distance from today.
pub const SEASONAL_SHIFT_PER_MONTH_F: f64 = 4.0;
/// Precipitation probability assumed for seasonal estimates.
pub const SEASONAL_PRECIP_CHANCE: f64 = 0.22;
/// Condition text reported for seasonal estimates.
pub const SEASONAL_CONDITION: &str = "seasonal estimate";
/// Coldest temperature (°F) a seasonal estimate may report.
pub const SEASONAL_MIN_TEMP_F: f64 = -10.0;
/// Warmest temperature (°F) a seasonal estimate may report.
pub const SEASONAL_MAX_TEMP_F: f64 = 115.0;

const HOT_MIDPOINT_F: f64 = 78.0;
const COLD_MIDPOINT_F: f64 = 45.0;
const HOT_SPREAD_F: f64 = 10.0;
const COLD_SPREAD_F: f64 = 12.0;
const TEMPERATE_SPREAD_F: f64 = 14.0;
const MONTHS_PER_YEAR: i32 = 12;
const MAX_MONTH_DELTA: i32 = 6;

/// Strategy that produced a [`CalendarWeatherResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Provenance {
    /// A forecast entry matched the selected date.
    Forecast,
    /// Extrapolated from current conditions.
    SeasonalFallback,
    /// No current conditions were available.
    Neutral,
}

impl Provenance {
    /// Return the provenance tag as shown to callers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forecast => "forecast",
            Self::SeasonalFallback => "seasonal-fallback",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather resolved for a calendar date together with display fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CalendarWeatherResult {
    /// Which strategy produced the context.
    pub provenance: Provenance,
    /// The resolved context.
    pub context: WeatherContext,
    /// Condition text for display.
    pub condition: String,
    /// Daily high mirrored from the context.
    pub high_temp: f64,
    /// Daily low mirrored from the context.
    pub low_temp: f64,
    /// Precipitation probability mirrored from the context.
    pub precip_chance: f64,
}

impl CalendarWeatherResult {
    fn new(provenance: Provenance, context: WeatherContext, condition: impl Into<String>) -> Self {
        Self {
            provenance,
            context,
            condition: condition.into(),
            high_temp: context.high_temp(),
            low_temp: context.low_temp(),
            precip_chance: context.precip_chance(),
        }
    }
}

/// Errors raised by [`parse_selected_date`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("selected date {input:?} does not start with an ISO date (YYYY-MM-DD)")]
pub struct DateParseError {
    /// The rejected input.
    pub input: String,
}

/// Extract the ISO date portion of a date or date-time string.
///
/// # Errors
/// Returns [`DateParseError`] when the first ten characters are not a valid
/// `YYYY-MM-DD` date.
///
/// # Examples
/// ```
/// use wardrobe_core::weather::parse_selected_date;
///
/// let date = parse_selected_date("2026-12-01T09:30:00Z").unwrap();
/// assert_eq!(date.to_string(), "2026-12-01");
/// ```
pub fn parse_selected_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();
    trimmed
        .get(..10)
        .and_then(|iso| NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok())
        .ok_or_else(|| DateParseError {
            input: input.to_owned(),
        })
}

/// Signed month distance from `today` to `selected`, wrapped into `[-6, 6]`.
///
/// Wrapping keeps six months ahead and six months back symmetric around the
/// opposite season. An exact ±6 keeps its sign.
#[must_use]
pub fn month_delta(today: NaiveDate, selected: NaiveDate) -> i32 {
    let months = |date: NaiveDate| date.year() * MONTHS_PER_YEAR + date.month0().cast_signed();
    let mut delta = months(selected) - months(today);
    while delta > MAX_MONTH_DELTA {
        delta -= MONTHS_PER_YEAR;
    }
    while delta < -MAX_MONTH_DELTA {
        delta += MONTHS_PER_YEAR;
    }
    delta
}

/// Build the synthetic forecast day used for seasonal estimates.
#[expect(
    clippy::float_arithmetic,
    reason = "seasonal estimates shift and spread temperatures"
)]
#[must_use]
pub fn seasonal_estimate(
    current: &CurrentConditions,
    today: NaiveDate,
    selected: NaiveDate,
) -> ForecastDay {
    let delta = month_delta(today, selected);
    let midpoint = current.temperature + f64::from(delta) * SEASONAL_SHIFT_PER_MONTH_F;
    let spread = if midpoint >= HOT_MIDPOINT_F {
        HOT_SPREAD_F
    } else if midpoint <= COLD_MIDPOINT_F {
        COLD_SPREAD_F
    } else {
        TEMPERATE_SPREAD_F
    };
    let half = spread / 2.0;
    let high = (midpoint + half).clamp(SEASONAL_MIN_TEMP_F, SEASONAL_MAX_TEMP_F);
    let low = (midpoint - half).clamp(SEASONAL_MIN_TEMP_F, SEASONAL_MAX_TEMP_F);
    log::debug!("seasonal estimate for {selected}: delta {delta} months, midpoint {midpoint}°F");

    ForecastDay {
        icon: current.icon.clone(),
        ..ForecastDay::new(selected, high, low)
            .with_condition(SEASONAL_CONDITION)
            .with_precipitation(SEASONAL_PRECIP_CHANCE)
    }
}

/// Resolve the weather for `selected`, relative to `today`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wardrobe_core::weather::{CurrentConditions, Provenance, resolve_calendar_weather};
///
/// let today = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
/// let selected = NaiveDate::from_ymd_opt(2027, 2, 1).unwrap();
/// let current = CurrentConditions::new(40.0);
///
/// let result = resolve_calendar_weather(selected, today, Some(&current), &[]);
/// assert_eq!(result.provenance, Provenance::SeasonalFallback);
/// assert_eq!(result.high_temp, 55.0);
/// assert_eq!(result.low_temp, 41.0);
/// ```
#[must_use]
pub fn resolve_calendar_weather(
    selected: NaiveDate,
    today: NaiveDate,
    current: Option<&CurrentConditions>,
    forecast: &[ForecastDay],
) -> CalendarWeatherResult {
    if let Some(day) = forecast.iter().find(|day| day.date == selected) {
        log::debug!("forecast entry found for {selected}");
        let context = normalize_weather_context(current, std::slice::from_ref(day));
        return CalendarWeatherResult::new(Provenance::Forecast, context, day.condition.clone());
    }

    if let Some(reading) = current {
        let estimate = seasonal_estimate(reading, today, selected);
        let context = normalize_weather_context(Some(reading), std::slice::from_ref(&estimate));
        return CalendarWeatherResult::new(Provenance::SeasonalFallback, context, estimate.condition);
    }

    log::debug!("no weather data for {selected}; using the neutral context");
    CalendarWeatherResult::new(
        Provenance::Neutral,
        WeatherContext::neutral(),
        NEUTRAL_CONDITION,
    )
}
