//! The reference jacket/overshirt rule table.

use super::{
    Category, ClassificationRule, KeywordPattern, RuleCondition, RuleSet, RuleSetError,
};

const STRUCTURED_OUTERWEAR: &[&str] = &["blazer", "trench"];
/// Matched anywhere in the name: overcoat, raincoat, pea coat and so on.
const COAT: &[&str] = &["coat"];
const HEAVY_OUTERWEAR: &[&str] = &["moto jacket", "leather jacket", "bomber", "gilet", "vest"];
const JACKET: &[&str] = &["jacket"];
const FORMAL_JACKETS: &[&str] = &["suit jacket", "dinner jacket", "tuxedo", "smoking jacket"];
const KNIT_OUTERWEAR: &[&str] = &[
    "cardigan",
    "sweater",
    "knit",
    "pullover",
    "hoodie",
    "sweatshirt",
];
const CASUAL_LAYERING: &[&str] = &["shacket", "overshirt", "shirt jacket", "flannel", "chambray"];
const LIGHT_LAYERS: &[&str] = &[
    "light jacket",
    "windbreaker",
    "anorak",
    "chore jacket",
    "utility jacket",
    "field jacket",
    "work jacket",
    "denim jacket",
    "trucker jacket",
    "coach jacket",
    "track jacket",
    "harrington",
];
const CASUAL_FABRICS: &[&str] = &[
    "cotton", "linen", "denim", "chambray", "corduroy", "canvas", "twill", "jersey", "fleece",
    "flannel",
];

/// Formality at or above which a "jacket" is treated as tailored.
const TAILORED_FORMALITY: u8 = 7;
/// Formality at or below which light layers read as overshirts.
const LIGHT_LAYER_MAX_FORMALITY: u8 = 6;
/// Formality at or below which any remaining layer reads as an overshirt.
const CASUAL_MAX_FORMALITY: u8 = 5;

fn name_matches(keywords: &[&str]) -> Result<RuleCondition, RuleSetError> {
    KeywordPattern::new(keywords).map(RuleCondition::NameMatches)
}

fn name_contains(keywords: &[&str]) -> Result<RuleCondition, RuleSetError> {
    KeywordPattern::substring(keywords).map(RuleCondition::NameMatches)
}

fn material_matches(keywords: &[&str]) -> Result<RuleCondition, RuleSetError> {
    KeywordPattern::new(keywords).map(RuleCondition::MaterialMatches)
}

impl RuleSet {
    /// Build the reference rule table.
    ///
    /// | Priority | Rule | Category |
    /// |---------:|------|----------|
    /// | 10 | the name contains "coat", or names a blazer or trench | Jacket |
    /// | 9 | heavy outerwear keywords (bomber, gilet, vest, ...) | Jacket |
    /// | 8 | formality ≥ 7 and the name contains "jacket" | Jacket |
    /// | 7 | formal jacket keywords (tuxedo, dinner jacket, ...) | Jacket |
    /// | 6 | knitwear keywords (cardigan, hoodie, ...) | Overshirt |
    /// | 5 | casual layering keywords (shacket, flannel, ...) | Overshirt |
    /// | 4 | formality ≤ 6 and a light-layer name or casual fabric | Overshirt |
    /// | 3 | formality ≤ 5 | Overshirt |
    /// | 1 | anything else | Overshirt |
    ///
    /// # Errors
    /// Propagates [`RuleSetError`] if a keyword pattern fails to compile.
    pub fn default_rules() -> Result<Self, RuleSetError> {
        let rules = [
            ClassificationRule::new(
                "structured-outerwear",
                10,
                RuleCondition::Any(vec![
                    name_contains(COAT)?,
                    name_matches(STRUCTURED_OUTERWEAR)?,
                ]),
                Category::Jacket,
            ),
            ClassificationRule::new(
                "heavy-outerwear",
                9,
                name_matches(HEAVY_OUTERWEAR)?,
                Category::Jacket,
            ),
            ClassificationRule::new(
                "tailored-jacket",
                8,
                RuleCondition::All(vec![
                    RuleCondition::FormalityAtLeast(TAILORED_FORMALITY),
                    name_contains(JACKET)?,
                ]),
                Category::Jacket,
            ),
            ClassificationRule::new(
                "formal-jacket",
                7,
                name_matches(FORMAL_JACKETS)?,
                Category::Jacket,
            ),
            ClassificationRule::new(
                "knit-outerwear",
                6,
                name_matches(KNIT_OUTERWEAR)?,
                Category::Overshirt,
            ),
            ClassificationRule::new(
                "casual-layering",
                5,
                name_matches(CASUAL_LAYERING)?,
                Category::Overshirt,
            ),
            ClassificationRule::new(
                "light-layer",
                4,
                RuleCondition::All(vec![
                    RuleCondition::FormalityAtMost(LIGHT_LAYER_MAX_FORMALITY),
                    RuleCondition::Any(vec![
                        name_matches(LIGHT_LAYERS)?,
                        material_matches(CASUAL_FABRICS)?,
                    ]),
                ]),
                Category::Overshirt,
            ),
            ClassificationRule::new(
                "casual-formality",
                3,
                RuleCondition::FormalityAtMost(CASUAL_MAX_FORMALITY),
                Category::Overshirt,
            ),
            ClassificationRule::new("default", 1, RuleCondition::Always, Category::Overshirt),
        ];
        Self::builder(Category::Overshirt).rules(rules).build()
    }
}
