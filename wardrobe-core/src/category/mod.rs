//! Resolving ambiguous layering garments into a canonical category.
//!
//! A [`RuleSet`] is an ordered table of [`ClassificationRule`]s. Rules are
//! evaluated from the highest priority down and the first match wins; when
//! nothing matches the set's default category is returned. The reference
//! table is available through [`RuleSet::default_rules`].
//!
//! # Examples
//! ```
//! use wardrobe_core::Garment;
//! use wardrobe_core::category::{Category, RuleSet, is_ambiguous_category};
//!
//! # fn main() -> Result<(), wardrobe_core::category::RuleSetError> {
//! let rules = RuleSet::default_rules()?;
//! let garment = Garment::new("g-7", "Grey Cardigan").with_category_label("Jacket/Overshirt");
//!
//! assert!(is_ambiguous_category(&garment.category_label));
//! assert_eq!(rules.resolve(&garment), Category::Overshirt);
//! # Ok(())
//! # }
//! ```

mod default_rules;
mod pattern;
mod rule;
mod rule_set;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use pattern::KeywordPattern;
pub use rule::{ClassificationRule, RuleCondition};
pub use rule_set::{ClassificationResult, RuleSet, RuleSetBuilder, classify_item};

/// Canonical category produced by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// Structured or insulating outerwear.
    Jacket,
    /// Light, shirt-like layering piece.
    Overshirt,
}

impl Category {
    /// Every category.
    pub const ALL: [Self; 2] = [Self::Jacket, Self::Overshirt];

    /// Return the category's display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jacket => "Jacket",
            Self::Overshirt => "Overshirt",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jacket" => Ok(Self::Jacket),
            "overshirt" => Ok(Self::Overshirt),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

/// Errors raised while building rules and rule sets.
#[derive(Debug, Error)]
pub enum RuleSetError {
    /// Two rules share a name.
    #[error("rule '{name}' is already defined")]
    DuplicateRule {
        /// The repeated name.
        name: String,
    },
    /// No rule has the requested name.
    #[error("no rule named '{name}'")]
    UnknownRule {
        /// The requested name.
        name: String,
    },
    /// A keyword pattern had no usable keywords.
    #[error("keyword pattern must contain at least one keyword")]
    EmptyKeywords,
    /// The keyword alternation failed to compile.
    #[error("failed to compile keyword pattern [{keywords}]")]
    InvalidPattern {
        /// Keywords in the failed pattern.
        keywords: String,
        /// Source error from `regex`.
        #[source]
        source: regex::Error,
    },
}

/// Canonical categories named by a free-form label, without duplicates.
///
/// Labels are split on `/`, `,`, `|` and `&`.
fn label_categories(label: &str) -> Vec<Category> {
    let mut found = Vec::new();
    for part in label.split(['/', ',', '|', '&']) {
        if let Ok(category) = part.parse::<Category>()
            && !found.contains(&category)
        {
            found.push(category);
        }
    }
    found
}

/// Report whether a label needs classification.
///
/// A label is ambiguous unless it names exactly one canonical category.
#[must_use]
pub fn is_ambiguous_category(label: &str) -> bool {
    label_categories(label).len() != 1
}
