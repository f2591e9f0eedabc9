//! Classification rules: a named, prioritised condition yielding a category.

use super::{Category, KeywordPattern};
use crate::Garment;

/// Predicate evaluated against a garment.
///
/// Conditions are plain data so rule tables can be built, inspected and
/// tested without hand-written branches.
#[derive(Debug, Clone)]
pub enum RuleCondition {
    /// Matches every garment.
    Always,
    /// The garment name contains one of the keywords.
    NameMatches(KeywordPattern),
    /// The garment material contains one of the keywords.
    MaterialMatches(KeywordPattern),
    /// Effective formality is at least the bound.
    FormalityAtLeast(u8),
    /// Effective formality is at most the bound.
    FormalityAtMost(u8),
    /// Every nested condition holds.
    All(Vec<RuleCondition>),
    /// At least one nested condition holds.
    Any(Vec<RuleCondition>),
}

impl RuleCondition {
    /// Evaluate the condition.
    ///
    /// Formality bounds use [`Garment::effective_formality`], so a missing
    /// score counts as neutral. A missing material never matches.
    #[must_use]
    pub fn matches(&self, garment: &Garment) -> bool {
        match self {
            Self::Always => true,
            Self::NameMatches(pattern) => pattern.matches(&garment.name),
            Self::MaterialMatches(pattern) => garment
                .material
                .as_deref()
                .is_some_and(|material| pattern.matches(material)),
            Self::FormalityAtLeast(bound) => garment.effective_formality() >= *bound,
            Self::FormalityAtMost(bound) => garment.effective_formality() <= *bound,
            Self::All(conditions) => conditions.iter().all(|c| c.matches(garment)),
            Self::Any(conditions) => conditions.iter().any(|c| c.matches(garment)),
        }
    }
}

/// A named rule in a [`RuleSet`](super::RuleSet).
///
/// Higher priorities are evaluated first.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    name: String,
    priority: i32,
    condition: RuleCondition,
    category: Category,
}

impl ClassificationRule {
    /// Construct a rule.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        priority: i32,
        condition: RuleCondition,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            condition,
            category,
        }
    }

    /// Unique rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluation priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Category produced when the rule fires.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The rule's predicate.
    #[must_use]
    pub const fn condition(&self) -> &RuleCondition {
        &self.condition
    }

    /// Report whether the rule fires for `garment`.
    #[must_use]
    pub fn matches(&self, garment: &Garment) -> bool {
        self.condition.matches(garment)
    }
}
