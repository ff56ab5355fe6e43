//! Single-pass uniform sampling over a stream of candidate words.
//!
//! Each accepted word is assigned one uniform draw in `[0,1)` from
//! the system CSPRNG and the highest-priority words are retained in
//! a bounded min-heap, so a word source of arbitrary size can be
//! sampled in a single forward pass with memory proportional to the
//! number of words requested.

use crate::{Error, Result, WordFilter};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::io;
use wordkey_core::csprng;

/// Outcome of sampling a word stream.
#[derive(Debug)]
pub struct Sample {
    words: Vec<String>,
    candidates: usize,
}

impl Sample {
    /// Selected words, in arbitrary order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Total number of valid candidates seen in the stream.
    ///
    /// Callers use this to compute the entropy of a passphrase
    /// built from the sample.
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// Consume the sample yielding the selected words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

#[derive(Debug)]
struct Entry {
    priority: f64,
    word: String,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed so the binary heap surfaces the minimum priority.
    // Priorities come from a uniform draw and are never NaN.
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
    }
}

/// Bounded reservoir retaining the highest-priority words offered
/// to it.
#[derive(Debug)]
pub struct Reservoir {
    capacity: usize,
    heap: BinaryHeap<Entry>,
}

impl Reservoir {
    /// Create a reservoir with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Capacity of the reservoir.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of words currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Determine if the reservoir holds no words.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer a word, assigning it a fresh uniform priority.
    ///
    /// Below capacity the word is always retained; at capacity it
    /// replaces the current minimum only when its priority is
    /// strictly higher, otherwise it is discarded.
    pub fn offer(&mut self, word: String, rng: &mut impl Rng) {
        if self.capacity == 0 {
            return;
        }
        let priority: f64 = rng.gen();
        if self.heap.len() < self.capacity {
            self.heap.push(Entry { priority, word });
        } else if self
            .heap
            .peek()
            .map(|min| priority > min.priority)
            .unwrap_or(false)
        {
            self.heap.pop();
            self.heap.push(Entry { priority, word });
        }
    }

    /// Extract the retained words, discarding priorities.
    pub fn into_words(self) -> Vec<String> {
        self.heap.into_iter().map(|entry| entry.word).collect()
    }
}

/// Draw `count` words uniformly at random from a stream of lines.
///
/// Lines are whitespace-trimmed and screened by the filter; every
/// valid word in the stream has equal probability of ending up in
/// the sample. Words are drawn without replacement within a single
/// call. The stream is consumed once and never restarted.
///
/// # Errors
///
/// Returns [`Error::InsufficientCandidates`] when the stream holds
/// fewer valid words than requested. Read failures on the stream
/// are propagated unchanged; no retries and no partial results.
pub fn sample<I>(
    lines: I,
    count: usize,
    filter: &WordFilter,
) -> Result<Sample>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    if count == 0 {
        return Ok(Sample {
            words: Vec::new(),
            candidates: 0,
        });
    }

    let rng = &mut csprng();
    let mut reservoir = Reservoir::new(count);
    let mut candidates = 0;
    for line in lines {
        let line = line?;
        let word = line.trim();
        if !filter.is_valid(word) {
            continue;
        }
        candidates += 1;
        reservoir.offer(word.to_owned(), rng);
    }

    if candidates < count {
        return Err(Error::InsufficientCandidates {
            needed: count,
            available: candidates,
        });
    }

    tracing::debug!(candidates, count, "reservoir::sample");

    Ok(Sample {
        words: reservoir.into_words(),
        candidates,
    })
}

/// Draw `count` words from a buffered reader, one candidate per line.
pub fn sample_read<R>(
    reader: R,
    count: usize,
    filter: &WordFilter,
) -> Result<Sample>
where
    R: io::BufRead,
{
    sample(reader.lines(), count, filter)
}
