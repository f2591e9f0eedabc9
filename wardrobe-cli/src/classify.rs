//! Classify command implementation for the wardrobe CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wardrobe_core::category::is_ambiguous_category;
use wardrobe_core::{Category, ClassificationResult, Garment, RuleSet};

use crate::input::{load_json, require_existing, write_json};
use crate::{ARG_CLASSIFY_GARMENTS, ARG_IGNORE_LABELS, CliError, ENV_CLASSIFY_GARMENTS};

/// A garment file holds either one record or a list of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum GarmentInput {
    One(Box<Garment>),
    Many(Vec<Garment>),
}

impl GarmentInput {
    pub(crate) fn into_vec(self) -> Vec<Garment> {
        match self {
            Self::One(garment) => vec![*garment],
            Self::Many(garments) => garments,
        }
    }
}

/// Where the reported category came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CategorySource {
    /// The garment's own label named exactly one category.
    Label,
    /// The rule set decided.
    Rules,
}

/// Classification report for one garment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GarmentClassification {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) source: CategorySource,
    pub(crate) classification: ClassificationResult,
    pub(crate) reason: String,
}

/// CLI arguments for the `classify` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Classify garments as jackets or overshirts using the \
                 built-in rule set. A garment whose label names exactly one \
                 category keeps it unless labels are ignored.",
    about = "Classify garments as jackets or overshirts"
)]
#[ortho_config(prefix = "WARDROBE")]
pub(crate) struct ClassifyArgs {
    /// Path to a JSON file holding a garment or a list of garments.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) garments_path: Option<Utf8PathBuf>,
    /// Classify by rules even when a label is unambiguous.
    #[arg(long = ARG_IGNORE_LABELS)]
    #[serde(default)]
    pub(crate) ignore_labels: bool,
}

impl ClassifyArgs {
    pub(crate) fn into_config(self) -> Result<ClassifyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ClassifyConfig::try_from(merged)
    }
}

/// Resolved `classify` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifyConfig {
    pub(crate) garments_path: Utf8PathBuf,
    pub(crate) trust_labels: bool,
}

impl TryFrom<ClassifyArgs> for ClassifyConfig {
    type Error = CliError;

    fn try_from(args: ClassifyArgs) -> Result<Self, Self::Error> {
        let garments_path = args.garments_path.ok_or(CliError::MissingArgument {
            field: ARG_CLASSIFY_GARMENTS,
            env: ENV_CLASSIFY_GARMENTS,
        })?;
        Ok(Self {
            garments_path,
            trust_labels: !args.ignore_labels,
        })
    }
}

pub(super) fn run_classify(args: ClassifyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_classify_with(args, &mut stdout)
}

pub(super) fn run_classify_with(
    args: ClassifyArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.garments_path, ARG_CLASSIFY_GARMENTS)?;
    let garments = load_garments(&config.garments_path)?;
    let rules = RuleSet::default_rules()?;
    let report = classify_garments(&rules, &garments, config.trust_labels);
    write_json(writer, &report)
}

fn load_garments(path: &Utf8Path) -> Result<Vec<Garment>, CliError> {
    let garments = load_json::<GarmentInput>(path)?.into_vec();
    garments
        .iter()
        .try_for_each(Garment::validate)
        .map_err(|source| CliError::InvalidGarment {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(garments)
}

/// Classify each garment, trusting unambiguous labels when asked to.
pub(crate) fn classify_garments(
    rules: &RuleSet,
    garments: &[Garment],
    trust_labels: bool,
) -> Vec<GarmentClassification> {
    garments
        .iter()
        .map(|garment| {
            let classification = rules.classification_result(garment);
            let label_decides = trust_labels && !is_ambiguous_category(&garment.category_label);
            let (category, source) = if label_decides {
                (rules.resolve(garment), CategorySource::Label)
            } else {
                (classification.category, CategorySource::Rules)
            };
            GarmentClassification {
                id: garment.id.clone(),
                name: garment.name.clone(),
                category,
                source,
                reason: rules.classification_reason(garment),
                classification,
            }
        })
        .collect()
}
