#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for weather context normalisation.

use std::cell::RefCell;

use chrono::NaiveDate;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wardrobe_core::weather::{CurrentConditions, ForecastDay, WeatherContext};
use wardrobe_core::normalize_weather_context;

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Default)]
struct WeatherWorld {
    current: RefCell<Option<CurrentConditions>>,
    forecast: RefCell<Vec<ForecastDay>>,
    context: RefCell<Option<WeatherContext>>,
}

impl WeatherWorld {
    fn context(&self) -> WeatherContext {
        self.context
            .borrow()
            .expect("weather context should be normalised")
    }
}

#[fixture]
fn world() -> WeatherWorld {
    WeatherWorld::default()
}

fn forecast_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

#[given("current conditions of {temp} degrees")]
fn given_current(world: &WeatherWorld, temp: f64) {
    world.current.replace(Some(CurrentConditions::new(temp)));
}

#[given("no current conditions")]
fn given_no_current(world: &WeatherWorld) {
    world.current.replace(None);
}

#[given("a forecast day with high {high}, low {low} and precipitation {precip}")]
fn given_forecast(world: &WeatherWorld, high: f64, low: f64, precip: f64) {
    world
        .forecast
        .borrow_mut()
        .push(ForecastDay::new(forecast_date(), high, low).with_precipitation(precip));
}

#[when("the weather context is normalised")]
fn when_normalised(world: &WeatherWorld) {
    let current = world.current.borrow();
    let forecast = world.forecast.borrow();
    let context = normalize_weather_context(current.as_ref(), &forecast);
    world.context.replace(Some(context));
}

#[then("the context is {band} with target weight {weight}")]
fn then_band(world: &WeatherWorld, band: String, weight: u8) {
    let context = world.context();
    let bands = context.bands();
    let flags = [
        ("cold", bands.is_cold()),
        ("mild", bands.is_mild()),
        ("warm", bands.is_warm()),
        ("hot", bands.is_hot()),
    ];
    let active: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();
    assert_eq!(active, [band.as_str()], "bands: {bands:?}");
    assert_eq!(context.target_weight(), weight);
}

#[then("the daily swing is {swing}")]
fn then_swing(world: &WeatherWorld, swing: f64) {
    let actual = world.context().daily_swing();
    assert!((actual - swing).abs() <= TOLERANCE, "swing {actual}");
}

#[then("rain is likely")]
fn then_rain(world: &WeatherWorld) {
    assert!(world.context().is_rain_likely());
}

#[then("rain is not likely")]
fn then_no_rain(world: &WeatherWorld) {
    assert!(!world.context().is_rain_likely());
}

#[then("the swing is large")]
fn then_large_swing(world: &WeatherWorld) {
    assert!(world.context().has_large_swing());
}

#[then("the swing is not large")]
fn then_small_swing(world: &WeatherWorld) {
    assert!(!world.context().has_large_swing());
}

#[scenario(path = "tests/features/weather_context.feature", index = 0)]
fn cold_morning(world: WeatherWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/weather_context.feature", index = 1)]
fn missing_current_conditions(world: WeatherWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/weather_context.feature", index = 2)]
fn missing_forecast(world: WeatherWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/weather_context.feature", index = 3)]
fn hot_wet_day(world: WeatherWorld) {
    let _ = world;
}
