//! Core domain types for the wardrobe compatibility engine.
//!
//! The crate turns raw weather readings into a [`WeatherContext`], resolves
//! which weather applies to a calendar date, classifies ambiguous layering
//! garments with a [`RuleSet`], and defines the [`Scorer`] seam used by the
//! compatibility scorer. Everything here is pure: no I/O, no shared mutable
//! state. Missing collaborator data resolves to the constants in
//! [`defaults`] rather than an error.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod defaults;
mod garment;
mod scorer;
mod season;
pub mod weather;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::{Category, ClassificationResult, RuleSet, RuleSetError, classify_item};
pub use garment::{Garment, GarmentError, MAX_FORMALITY, MAX_WEATHER_WEIGHT, MIN_FORMALITY};
pub use scorer::{CompatibilityScore, OutfitContext, Scorer};
pub use season::Season;
pub use weather::{
    CalendarWeatherResult, CurrentConditions, ForecastDay, Provenance, WeatherBands,
    WeatherContext, normalize_weather_context, resolve_calendar_weather,
};
