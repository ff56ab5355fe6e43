//! Utility for generating wordlist passphrases.
use crate::{entropy::passphrase_bits, Result};
use secrecy::{ExposeSecret, SecretString};
use std::io;
use wordkey_core::constants::{DEFAULT_DELIMITER, DEFAULT_WORD_COUNT};
use wordkey_wordlist::{reservoir, WordFilter, WordList};
use zxcvbn::{zxcvbn, Entropy};

/// Generated passphrase result.
#[derive(Debug, Clone)]
pub struct PassphraseResult {
    /// The generated passphrase.
    pub password: SecretString,
    /// Entropy in bits under uniform word selection.
    pub bits: f64,
    /// Strength estimate for the passphrase.
    pub entropy: Entropy,
}

/// Options for passphrase generation.
#[derive(Debug, Clone)]
pub struct PassphraseGen {
    words: usize,
    delimiter: String,
}

impl Default for PassphraseGen {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_COUNT)
    }
}

impl PassphraseGen {
    /// Create a generator for the given number of words.
    pub fn new(words: usize) -> Self {
        Self {
            words,
            delimiter: DEFAULT_DELIMITER.to_owned(),
        }
    }

    /// Set the delimiter placed between words.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Number of words in generated passphrases.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Generate a single passphrase from an in-memory word list.
    ///
    /// Each position is an independent uniform choice over the whole
    /// list, so a passphrase may repeat a word.
    pub fn one(&self, list: &WordList) -> Result<PassphraseResult> {
        let words = list.sample(self.words)?;
        Ok(self.finish(words, list.len()))
    }

    /// Generate multiple passphrases from an in-memory word list.
    pub fn many(
        &self,
        list: &WordList,
        count: usize,
    ) -> Result<Vec<PassphraseResult>> {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one(list)?);
        }
        Ok(results)
    }

    /// Generate a single passphrase from a stream of candidate
    /// lines without materializing the word list.
    ///
    /// Words are drawn without replacement within the passphrase
    /// and memory use is bounded by the word count.
    pub fn one_streaming<I>(
        &self,
        lines: I,
        filter: &WordFilter,
    ) -> Result<PassphraseResult>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let sample = reservoir::sample(lines, self.words, filter)?;
        let candidates = sample.candidates();
        Ok(self.finish(sample.into_words(), candidates))
    }

    fn finish(
        &self,
        words: Vec<String>,
        dictionary_len: usize,
    ) -> PassphraseResult {
        let password = SecretString::from(words.join(&self.delimiter));
        let bits = passphrase_bits(dictionary_len, self.words);
        let entropy = zxcvbn(password.expose_secret(), &[]);
        PassphraseResult {
            password,
            bits,
            entropy,
        }
    }
}
