//! Score command implementation for the wardrobe CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wardrobe_core::weather::{
    Provenance, WeatherContext, normalize_weather_context, resolve_calendar_weather,
};
use wardrobe_core::{CompatibilityScore, Garment, OutfitContext};
use wardrobe_scorer::{CompatibilityScorer, ScoreWeights};

use crate::input::{load_json, require_existing, write_json};
use crate::weather::{WeatherInput, parse_date_option, resolve_today};
use crate::{
    ARG_CAPSULE_WEIGHT, ARG_COLOR_WEIGHT, ARG_FORMALITY_WEIGHT, ARG_SCORE_REQUEST, ARG_TODAY,
    ARG_WEATHER_FIT_WEIGHT, CliError, ENV_SCORE_REQUEST,
};

/// JSON payload accepted by `wardrobe score`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreRequest {
    /// Weather readings used for weather fit.
    #[serde(flatten)]
    pub(crate) weather: WeatherInput,
    /// Optional calendar date; when present the weather is resolved for it.
    #[serde(default)]
    pub(crate) date: Option<String>,
    /// Garments already in the outfit.
    #[serde(default)]
    pub(crate) selected: Vec<Garment>,
    /// Garments to score.
    #[serde(default)]
    pub(crate) candidates: Vec<Garment>,
}

impl ScoreRequest {
    fn validate(&self, path: &Utf8Path) -> Result<(), CliError> {
        self.weather.validate(path)?;
        self.selected
            .iter()
            .chain(&self.candidates)
            .try_for_each(Garment::validate)
            .map_err(|source| CliError::InvalidGarment {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// One scored candidate in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CandidateScore {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) score: CompatibilityScore,
}

/// Output of `wardrobe score`: the weather used and candidates best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) provenance: Option<Provenance>,
    pub(crate) weather: WeatherContext,
    pub(crate) candidates: Vec<CandidateScore>,
}

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score candidate garments against the garments already \
                 selected for an outfit. The request is a JSON document with \
                 `current`, `forecast`, `selected` and `candidates`; weights \
                 may be overridden from configuration files, the environment \
                 or flags, and must sum to one.",
    about = "Score candidate garments for an outfit"
)]
#[ortho_config(prefix = "WARDROBE")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing a score request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Weight of the weather-fit dimension.
    #[arg(long = ARG_WEATHER_FIT_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) weather_fit_weight: Option<f64>,
    /// Weight of the formality-alignment dimension.
    #[arg(long = ARG_FORMALITY_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) formality_weight: Option<f64>,
    /// Weight of the colour-harmony dimension.
    #[arg(long = ARG_COLOR_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) color_weight: Option<f64>,
    /// Weight of the capsule-cohesion dimension.
    #[arg(long = ARG_CAPSULE_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) capsule_weight: Option<f64>,
    /// Reference date for calendar weather; defaults to the local date.
    #[arg(long = ARG_TODAY, value_name = "date")]
    #[serde(default)]
    pub(crate) today: Option<String>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) scorer: CompatibilityScorer,
    pub(crate) today: NaiveDate,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_REQUEST,
            env: ENV_SCORE_REQUEST,
        })?;
        let defaults = ScoreWeights::default();
        let weights = ScoreWeights {
            weather_fit: args.weather_fit_weight.unwrap_or(defaults.weather_fit),
            formality: args.formality_weight.unwrap_or(defaults.formality),
            color: args.color_weight.unwrap_or(defaults.color),
            capsule: args.capsule_weight.unwrap_or(defaults.capsule),
        };
        Ok(Self {
            request_path,
            scorer: CompatibilityScorer::new(weights)?,
            today: resolve_today(args.today.as_deref())?,
        })
    }
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(super) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_score(args)?;
    write_json(writer, &report)
}

fn execute_score(args: ScoreArgs) -> Result<ScoreReport, CliError> {
    let config = args.into_config()?;
    require_existing(&config.request_path, ARG_SCORE_REQUEST)?;
    let request: ScoreRequest = load_json(&config.request_path)?;
    request.validate(&config.request_path)?;
    let (provenance, weather) = resolve_weather(&request, config.today)?;
    Ok(score_request(&config.scorer, &request, provenance, weather))
}

fn resolve_weather(
    request: &ScoreRequest,
    today: NaiveDate,
) -> Result<(Option<Provenance>, WeatherContext), CliError> {
    let current = request.weather.current.as_ref();
    let forecast = &request.weather.forecast;
    match request.date.as_deref() {
        Some(raw) => {
            let date = parse_date_option(raw, "date")?;
            let resolved = resolve_calendar_weather(date, today, current, forecast);
            Ok((Some(resolved.provenance), resolved.context))
        }
        None => Ok((None, normalize_weather_context(current, forecast))),
    }
}

/// Score every candidate and order the report best first.
///
/// Candidates with equal totals keep their request order.
pub(crate) fn score_request(
    scorer: &CompatibilityScorer,
    request: &ScoreRequest,
    provenance: Option<Provenance>,
    weather: WeatherContext,
) -> ScoreReport {
    let outfit = OutfitContext::new(&weather, &request.selected);
    let scores = scorer.score_candidates(&request.candidates, &outfit);
    let mut candidates: Vec<CandidateScore> = request
        .candidates
        .iter()
        .zip(scores)
        .map(|(garment, score)| CandidateScore {
            id: garment.id.clone(),
            name: garment.name.clone(),
            score,
        })
        .collect();
    candidates.sort_by(|a, b| b.score.total.total_cmp(&a.score.total));
    log::info!(
        "scored {} candidates against {} selected garments",
        candidates.len(),
        request.selected.len()
    );
    ScoreReport {
        provenance,
        weather,
        candidates,
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
