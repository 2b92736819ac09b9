//! Token cleaning applied before every insertion and every lookup.

use std::borrow::Cow;

use regex::Regex;

use crate::error::Result;

/// Characters matched by this pattern are stripped from words.
///
/// Everything outside ASCII letters, digits, space and hyphen.
pub const DEFAULT_STRIP_PATTERN: &str = "[^a-zA-Z0-9 -]";

/// Turns raw tokens into comparable index keys.
#[derive(Debug, Clone)]
pub struct WordNormalizer {
    enabled: bool,
    strip: Regex,
}

impl WordNormalizer {
    /// Compiles `strip_pattern`. The pattern is validated even when
    /// normalization is disabled so a bad configuration fails up front.
    pub fn new(enabled: bool, strip_pattern: &str) -> Result<Self> {
        Ok(Self {
            enabled,
            strip: Regex::new(strip_pattern)?,
        })
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Removes stripped characters, trims surrounding whitespace and folds to
    /// lowercase. Returns the input untouched when normalization is disabled.
    pub fn clean<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if !self.enabled {
            return Cow::Borrowed(word);
        }
        let stripped = self.strip.replace_all(word, "");
        Cow::Owned(stripped.trim().to_lowercase())
    }
}

impl Default for WordNormalizer {
    fn default() -> Self {
        Self {
            enabled: true,
            strip: Regex::new(DEFAULT_STRIP_PATTERN).expect("default strip pattern compiles"),
        }
    }
}
