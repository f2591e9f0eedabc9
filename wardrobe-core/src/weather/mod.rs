//! Weather classification, normalisation and calendar resolution.
//!
//! Raw readings flow through three layers:
//! - [`classify_temperature`] and friends turn numbers into bands and
//!   thresholds;
//! - [`normalize_weather_context`] combines current conditions with a forecast
//!   day into a [`WeatherContext`];
//! - [`resolve_calendar_weather`] picks the applicable weather for a date and
//!   records its [`Provenance`].

mod bands;
mod calendar;
mod context;

pub use bands::{
    HOT_FLOOR_F, LARGE_SWING_F, MILD_FLOOR_F, RAIN_LIKELY_THRESHOLD, TemperatureBand, WARM_FLOOR_F,
    WeatherBands, calculate_daily_swing, classify_temperature, has_large_swing, is_rain_likely,
    map_temperature_to_weight,
};
pub use calendar::{
    CalendarWeatherResult, DateParseError, Provenance, SEASONAL_CONDITION, SEASONAL_MAX_TEMP_F,
    SEASONAL_MIN_TEMP_F, SEASONAL_PRECIP_CHANCE, SEASONAL_SHIFT_PER_MONTH_F, month_delta,
    parse_selected_date, resolve_calendar_weather, seasonal_estimate,
};
pub use context::{
    CurrentConditions, ForecastDay, TemperatureRange, WeatherContext, WeatherInputError,
    normalize_weather_context,
};
