use crate::constants::{DEFAULT_EXCLUDE_CHARS, DEFAULT_MAX_WORD_LENGTH};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Options controlling which words are accepted from a word source.
///
/// Callers resolve these options (from flags, config files or
/// application settings) before handing them to the sampling core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Inclusive upper bound on word length in characters.
    pub max_word_length: usize,
    /// Characters that disqualify a word when exclusion is enabled.
    pub exclude_chars: HashSet<char>,
    /// Whether the exclusion character set is applied.
    pub enable_exclusion: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            exclude_chars: DEFAULT_EXCLUDE_CHARS.iter().copied().collect(),
            enable_exclusion: true,
        }
    }
}
