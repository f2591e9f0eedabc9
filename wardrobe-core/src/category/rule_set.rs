//! Immutable, priority-ordered rule sets.

#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Category, ClassificationRule, RuleSetError, label_categories};
use crate::Garment;

const CONFIDENCE_SCALE: f64 = 10.0;

/// Outcome of classifying a garment, with diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClassificationResult {
    /// Resolved category.
    pub category: Category,
    /// Name of the rule that fired, or `None` for the fallback category.
    pub rule: Option<String>,
    /// Priority of the rule that fired.
    pub priority: Option<i32>,
    /// Priority divided by ten and clamped into `[0, 1]`.
    pub confidence: f64,
}

/// An ordered list of classification rules.
///
/// Rules are kept sorted by descending priority; rules sharing a priority
/// keep their insertion order. The set never changes once built: edits
/// return a new set.
///
/// # Examples
/// ```
/// use wardrobe_core::category::{Category, RuleSet};
/// use wardrobe_core::Garment;
///
/// # fn main() -> Result<(), wardrobe_core::category::RuleSetError> {
/// let rules = RuleSet::default_rules()?;
/// let blazer = Garment::new("b", "Navy Blazer").with_formality(4);
/// assert_eq!(rules.classify(&blazer), Category::Jacket);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ClassificationRule>,
    default_category: Category,
}

impl RuleSet {
    /// Start building a rule set that falls back to `default_category`.
    #[must_use]
    pub const fn builder(default_category: Category) -> RuleSetBuilder {
        RuleSetBuilder::new(default_category)
    }

    /// Category returned when no rule matches.
    #[must_use]
    pub const fn default_category(&self) -> Category {
        self.default_category
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Report whether the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look a rule up by name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&ClassificationRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    /// Return a copy of the set with `rule` added and the order rebuilt.
    ///
    /// # Errors
    /// Returns [`RuleSetError::DuplicateRule`] when a rule with the same name
    /// already exists.
    pub fn with_rule(&self, rule: ClassificationRule) -> Result<Self, RuleSetError> {
        self.to_builder().rule(rule).build()
    }

    /// Return a copy of the set without the named rule.
    ///
    /// # Errors
    /// Returns [`RuleSetError::UnknownRule`] when no rule has that name.
    pub fn without_rule(&self, name: &str) -> Result<Self, RuleSetError> {
        if self.rule(name).is_none() {
            return Err(RuleSetError::UnknownRule {
                name: name.to_owned(),
            });
        }
        let rules = self
            .rules
            .iter()
            .filter(|rule| rule.name() != name)
            .cloned()
            .collect();
        Ok(Self {
            rules,
            default_category: self.default_category,
        })
    }

    /// Return a builder seeded with this set's rules.
    #[must_use]
    pub fn to_builder(&self) -> RuleSetBuilder {
        RuleSetBuilder {
            rules: self.rules.clone(),
            default_category: self.default_category,
        }
    }

    /// The first rule, in priority order, that matches `garment`.
    #[must_use]
    pub fn matching_rule(&self, garment: &Garment) -> Option<&ClassificationRule> {
        self.rules.iter().find(|rule| rule.matches(garment))
    }

    /// Classify `garment` using the first matching rule.
    #[must_use]
    pub fn classify(&self, garment: &Garment) -> Category {
        self.classification_result(garment).category
    }

    /// Classify `garment` and report which rule fired.
    #[expect(
        clippy::float_arithmetic,
        reason = "confidence scales the rule priority"
    )]
    #[must_use]
    pub fn classification_result(&self, garment: &Garment) -> ClassificationResult {
        match self.matching_rule(garment) {
            Some(rule) => {
                log::trace!("garment {} matched rule '{}'", garment.id, rule.name());
                ClassificationResult {
                    category: rule.category(),
                    rule: Some(rule.name().to_owned()),
                    priority: Some(rule.priority()),
                    confidence: (f64::from(rule.priority()) / CONFIDENCE_SCALE).clamp(0.0, 1.0),
                }
            }
            None => {
                log::debug!(
                    "no rule matched garment {}; falling back to {}",
                    garment.id,
                    self.default_category
                );
                ClassificationResult {
                    category: self.default_category,
                    rule: None,
                    priority: None,
                    confidence: 0.0,
                }
            }
        }
    }

    /// Human-readable explanation of the classification.
    #[must_use]
    pub fn classification_reason(&self, garment: &Garment) -> String {
        match self.matching_rule(garment) {
            Some(rule) => format!(
                "classified as {} by rule '{}' (priority {})",
                rule.category(),
                rule.name(),
                rule.priority()
            ),
            None => format!(
                "classified as {} because no rule matched",
                self.default_category
            ),
        }
    }

    /// Use the label when it names exactly one category, otherwise classify.
    #[must_use]
    pub fn resolve(&self, garment: &Garment) -> Category {
        match label_categories(&garment.category_label).as_slice() {
            [category] => *category,
            _ => self.classify(garment),
        }
    }
}

/// Classify `garment` against `rules`.
#[must_use]
pub fn classify_item(rules: &RuleSet, garment: &Garment) -> Category {
    rules.classify(garment)
}

/// Collects rules before sorting them into a [`RuleSet`].
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    rules: Vec<ClassificationRule>,
    default_category: Category,
}

impl RuleSetBuilder {
    /// Start an empty builder.
    #[must_use]
    pub const fn new(default_category: Category) -> Self {
        Self {
            rules: Vec::new(),
            default_category,
        }
    }

    /// Append a rule.
    #[must_use]
    pub fn rule(mut self, rule: ClassificationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append several rules.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = ClassificationRule>,
    {
        self.rules.extend(rules);
        self
    }

    /// Validate names and sort by descending priority.
    ///
    /// # Errors
    /// Returns [`RuleSetError::DuplicateRule`] when two rules share a name.
    pub fn build(self) -> Result<RuleSet, RuleSetError> {
        let Self {
            mut rules,
            default_category,
        } = self;
        for (index, rule) in rules.iter().enumerate() {
            if rules
                .iter()
                .skip(index + 1)
                .any(|other| other.name() == rule.name())
            {
                return Err(RuleSetError::DuplicateRule {
                    name: rule.name().to_owned(),
                });
            }
        }
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.priority()));
        Ok(RuleSet {
            rules,
            default_category,
        })
    }
}
