//! Compiled keyword alternations used by name and material rules.

use regex::{Regex, RegexBuilder};

use super::RuleSetError;

/// A case-insensitive match against any of a set of keywords.
///
/// Patterns built with [`KeywordPattern::new`] match whole words: spaces
/// inside a keyword also match hyphens and runs of whitespace, and a trailing
/// plural `s`/`es` is accepted, so `"pea coat"` matches `"Pea-Coats"`.
/// Patterns built with [`KeywordPattern::substring`] match anywhere in the
/// text, so `"coat"` also matches `"Raincoat"`.
///
/// # Examples
/// ```
/// use wardrobe_core::category::KeywordPattern;
///
/// let pattern = KeywordPattern::new(["pea coat", "blazer"]).unwrap();
/// assert!(pattern.matches("Navy Blazer"));
/// assert!(pattern.matches("vintage pea-coat"));
/// assert!(!pattern.matches("Peacoat"));
///
/// let joined = KeywordPattern::substring(["jacket"]).unwrap();
/// assert!(joined.matches("Shirtjacket"));
/// ```
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    keywords: Vec<String>,
    regex: Regex,
}

impl KeywordPattern {
    /// Compile a whole-word pattern from keywords.
    ///
    /// # Errors
    /// Returns [`RuleSetError::EmptyKeywords`] when no non-blank keyword is
    /// supplied and [`RuleSetError::InvalidPattern`] when the alternation
    /// cannot be compiled.
    pub fn new<I, S>(keywords: I) -> Result<Self, RuleSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::compile(keywords, |alternation| {
            format!(r"\b(?:{alternation})(?:e?s)?\b")
        })
    }

    /// Compile a pattern whose keywords may appear inside longer words.
    ///
    /// # Errors
    /// As for [`KeywordPattern::new`].
    pub fn substring<I, S>(keywords: I) -> Result<Self, RuleSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::compile(keywords, |alternation| format!("(?:{alternation})"))
    }

    fn compile<I, S>(keywords: I, wrap: impl FnOnce(&str) -> String) -> Result<Self, RuleSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalised: Vec<String> = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        if normalised.is_empty() {
            return Err(RuleSetError::EmptyKeywords);
        }
        let alternation = normalised
            .iter()
            .map(|keyword| {
                keyword
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"[\s-]+")
            })
            .collect::<Vec<_>>()
            .join("|");
        let regex = RegexBuilder::new(&wrap(&alternation))
            .case_insensitive(true)
            .build()
            .map_err(|source| RuleSetError::InvalidPattern {
                keywords: normalised.join(", "),
                source,
            })?;
        Ok(Self {
            keywords: normalised,
            regex,
        })
    }

    /// Report whether `text` contains any keyword.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The normalised keywords, in the order supplied.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
