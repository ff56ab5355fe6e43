use std::collections::HashSet;
use wordkey_core::FilterOptions;

/// Predicate deciding which words from a word source are eligible
/// for passphrase selection.
#[derive(Debug, Clone)]
pub struct WordFilter {
    max_length: usize,
    exclude_chars: HashSet<char>,
    enable_exclusion: bool,
}

impl WordFilter {
    /// Create a filter from the given options.
    pub fn new(options: &FilterOptions) -> Self {
        Self {
            max_length: options.max_word_length,
            exclude_chars: options.exclude_chars.clone(),
            enable_exclusion: options.enable_exclusion,
        }
    }

    /// Determine if a word may be used in a passphrase.
    ///
    /// Empty words and words longer than the maximum length are
    /// rejected; when exclusion is enabled a word containing any
    /// excluded character is also rejected.
    pub fn is_valid(&self, word: &str) -> bool {
        if word.is_empty() || word.chars().count() > self.max_length {
            return false;
        }
        if self.enable_exclusion && self.has_excluded_char(word) {
            return false;
        }
        true
    }

    fn has_excluded_char(&self, word: &str) -> bool {
        word.chars().any(|c| self.exclude_chars.contains(&c))
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new(&FilterOptions::default())
    }
}

impl From<&FilterOptions> for WordFilter {
    fn from(options: &FilterOptions) -> Self {
        Self::new(options)
    }
}
