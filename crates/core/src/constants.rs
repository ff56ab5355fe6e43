//! Constants for passphrase generation.

/// Default number of words in a generated passphrase.
pub const DEFAULT_WORD_COUNT: usize = 4;

/// Default delimiter placed between passphrase words.
pub const DEFAULT_DELIMITER: &str = "-";

/// Default inclusive upper bound on candidate word length.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 100;

/// Characters that disqualify candidate words by default.
///
/// Apostrophes are excluded as most system dictionaries carry
/// possessive forms which are awkward to type in password fields.
pub const DEFAULT_EXCLUDE_CHARS: &[char] = &['\''];
