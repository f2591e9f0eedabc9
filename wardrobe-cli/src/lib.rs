//! Command-line interface for the wardrobe scoring engine.
//!
//! Each subcommand reads a JSON document from disk, runs it through the pure
//! core and prints the result as pretty JSON on stdout.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod classify;
mod error;
mod input;
mod score;
mod weather;

pub use error::CliError;

use classify::{ClassifyArgs, run_classify};
use score::{ScoreArgs, run_score};
use weather::{WeatherArgs, run_weather};

const ARG_SCORE_REQUEST: &str = "request";
const ARG_CLASSIFY_GARMENTS: &str = "garments";
const ARG_WEATHER_REQUEST: &str = "request";
const ARG_DATE: &str = "date";
const ARG_TODAY: &str = "today";
const ARG_WEATHER_FIT_WEIGHT: &str = "weather-fit-weight";
const ARG_FORMALITY_WEIGHT: &str = "formality-weight";
const ARG_COLOR_WEIGHT: &str = "color-weight";
const ARG_CAPSULE_WEIGHT: &str = "capsule-weight";
const ARG_IGNORE_LABELS: &str = "ignore-labels";
const ENV_SCORE_REQUEST: &str = "WARDROBE_CMDS_SCORE_REQUEST_PATH";
const ENV_CLASSIFY_GARMENTS: &str = "WARDROBE_CMDS_CLASSIFY_GARMENTS_PATH";
const ENV_WEATHER_REQUEST: &str = "WARDROBE_CMDS_WEATHER_REQUEST_PATH";
const ENV_WEATHER_DATE: &str = "WARDROBE_CMDS_WEATHER_DATE";

/// Run the wardrobe CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, input files or output
/// writing fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Classify(args) => run_classify(args),
        Command::Weather(args) => run_weather(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wardrobe",
    about = "Outfit compatibility and weather-fit scoring",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score candidate garments against an outfit in progress.
    Score(ScoreArgs),
    /// Classify garments as jackets or overshirts.
    Classify(ClassifyArgs),
    /// Resolve the weather for a calendar date.
    Weather(WeatherArgs),
}

#[cfg(test)]
mod tests;
