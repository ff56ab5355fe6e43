use crate::{Error, Result, WordFilter};
use rand::Rng;
use std::io::BufRead;
use wordkey_core::csprng;

/// Word list held in memory.
///
/// Sampling draws each word independently so a single passphrase
/// may repeat a word; use the [reservoir](crate::reservoir) module
/// to sample a stream without replacement in bounded memory.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load every valid word from a reader, one candidate per line.
    ///
    /// Lines are whitespace-trimmed before they are screened by the
    /// filter. The caller owns the reader lifecycle; read failures
    /// are propagated unchanged.
    pub fn read<R: BufRead>(reader: R, filter: &WordFilter) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if filter.is_valid(word) {
                words.push(word.to_owned());
            }
        }
        tracing::debug!(words = words.len(), "word_list::read");
        Ok(Self { words })
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Determine if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in the list.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Choose a single word uniformly at random.
    ///
    /// Returns `None` when the list is empty.
    pub fn choose(&self, rng: &mut impl Rng) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.words.len());
        Some(&self.words[index])
    }

    /// Draw `count` words uniformly at random, with replacement.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientCandidates`] when the list is
    /// empty and at least one word was requested.
    pub fn sample(&self, count: usize) -> Result<Vec<String>> {
        if count > 0 && self.words.is_empty() {
            return Err(Error::InsufficientCandidates {
                needed: count,
                available: 0,
            });
        }
        let rng = &mut csprng();
        let mut words = Vec::with_capacity(count);
        for _ in 0..count {
            let index = rng.gen_range(0..self.words.len());
            words.push(self.words[index].clone());
        }
        Ok(words)
    }
}

impl From<Vec<String>> for WordList {
    /// Build a list from words the caller has already validated.
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}
