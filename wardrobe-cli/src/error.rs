//! Error types emitted by the wardrobe CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use wardrobe_core::weather::{DateParseError, WeatherInputError};
use wardrobe_core::{GarmentError, RuleSetError};
use wardrobe_scorer::ScoreWeightsError;

/// Errors emitted by the wardrobe CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// Opening an input file failed.
    #[error("failed to open {path:?}: {source}")]
    OpenInput {
        /// File being opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Input JSON could not be decoded.
    #[error("failed to parse JSON at {path:?}: {source}")]
    ParseInput {
        /// File being decoded.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// A garment record failed validation.
    #[error("garment in {path:?} failed validation: {source}")]
    InvalidGarment {
        /// File carrying the garment.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: GarmentError,
    },
    /// Weather readings failed validation.
    #[error("weather in {path:?} failed validation: {source}")]
    InvalidWeather {
        /// File carrying the readings.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: WeatherInputError,
    },
    /// A date option could not be parsed.
    #[error("invalid --{field}: {source}")]
    InvalidDate {
        /// Option carrying the date.
        field: &'static str,
        /// Parse failure.
        #[source]
        source: DateParseError,
    },
    /// The configured score weights were rejected.
    #[error("invalid score weights: {0}")]
    InvalidWeights(#[from] ScoreWeightsError),
    /// The built-in classification rules failed to compile.
    #[error("failed to build classification rules: {0}")]
    RuleSet(#[from] RuleSetError),
    /// Serializing a report failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing a report failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
