//! Weather command implementation for the wardrobe CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wardrobe_core::weather::{
    CalendarWeatherResult, CurrentConditions, ForecastDay, parse_selected_date,
    resolve_calendar_weather,
};

use crate::input::{load_json, require_existing, write_json};
use crate::{
    ARG_DATE, ARG_TODAY, ARG_WEATHER_REQUEST, CliError, ENV_WEATHER_DATE, ENV_WEATHER_REQUEST,
};

/// Weather readings as supplied by the weather collaborator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub(crate) struct WeatherInput {
    /// Current conditions, if the service answered.
    #[serde(default)]
    pub(crate) current: Option<CurrentConditions>,
    /// Daily forecast entries.
    #[serde(default)]
    pub(crate) forecast: Vec<ForecastDay>,
}

impl WeatherInput {
    /// Reject non-finite readings and out-of-range probabilities.
    pub(crate) fn validate(&self, path: &Utf8Path) -> Result<(), CliError> {
        let invalid = |source| CliError::InvalidWeather {
            path: path.to_path_buf(),
            source,
        };
        if let Some(current) = &self.current {
            current.validate().map_err(invalid)?;
        }
        self.forecast
            .iter()
            .try_for_each(ForecastDay::validate)
            .map_err(invalid)
    }
}

/// CLI arguments for the `weather` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Resolve the weather for a calendar date from current \
                 conditions and a forecast. Dates outside the forecast are \
                 estimated from the current temperature and the distance in \
                 months; without current conditions the neutral context is \
                 reported.",
    about = "Resolve the weather for a calendar date"
)]
#[ortho_config(prefix = "WARDROBE")]
pub(crate) struct WeatherArgs {
    /// Path to a JSON file with `current` and `forecast` readings.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Date to resolve (YYYY-MM-DD, a trailing time is ignored).
    #[arg(long = ARG_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<String>,
    /// Reference date for seasonal estimates; defaults to the local date.
    #[arg(long = ARG_TODAY, value_name = "date")]
    #[serde(default)]
    pub(crate) today: Option<String>,
}

impl WeatherArgs {
    pub(crate) fn into_config(self) -> Result<WeatherConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        WeatherConfig::try_from(merged)
    }
}

/// Resolved `weather` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WeatherConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) date: NaiveDate,
    pub(crate) today: NaiveDate,
}

impl TryFrom<WeatherArgs> for WeatherConfig {
    type Error = CliError;

    fn try_from(args: WeatherArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_WEATHER_REQUEST,
            env: ENV_WEATHER_REQUEST,
        })?;
        let raw_date = args.date.ok_or(CliError::MissingArgument {
            field: ARG_DATE,
            env: ENV_WEATHER_DATE,
        })?;
        Ok(Self {
            request_path,
            date: parse_date_option(&raw_date, ARG_DATE)?,
            today: resolve_today(args.today.as_deref())?,
        })
    }
}

/// Parse a date option, naming the option on failure.
pub(crate) fn parse_date_option(raw: &str, field: &'static str) -> Result<NaiveDate, CliError> {
    parse_selected_date(raw).map_err(|source| CliError::InvalidDate { field, source })
}

/// Parse `--today`, falling back to the local calendar date.
pub(crate) fn resolve_today(raw: Option<&str>) -> Result<NaiveDate, CliError> {
    raw.map_or_else(
        || Ok(chrono::Local::now().date_naive()),
        |value| parse_date_option(value, ARG_TODAY),
    )
}

pub(super) fn run_weather(args: WeatherArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_weather_with(args, &mut stdout)
}

pub(super) fn run_weather_with(args: WeatherArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let result = execute_weather(args)?;
    write_json(writer, &result)
}

fn execute_weather(args: WeatherArgs) -> Result<CalendarWeatherResult, CliError> {
    let config = args.into_config()?;
    require_existing(&config.request_path, ARG_WEATHER_REQUEST)?;
    let input: WeatherInput = load_json(&config.request_path)?;
    input.validate(&config.request_path)?;
    let result = resolve_calendar_weather(
        config.date,
        config.today,
        input.current.as_ref(),
        &input.forecast,
    );
    log::info!("weather for {} resolved from {}", config.date, result.provenance);
    Ok(result)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<WeatherConfig, CliError> {
    let merged = WeatherArgs::merge_from_layers(layers).map_err(CliError::from)?;
    WeatherConfig::try_from(merged)
}
