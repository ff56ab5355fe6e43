use thiserror::Error;

/// Errors generated by the wordlist library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a word source holds fewer valid
    /// candidates than a sampling request asked for.
    ///
    /// A short passphrase silently weakens the claimed entropy, so
    /// this is fatal to the sampling call rather than truncated.
    #[error("word source has {available} valid candidates, {needed} were requested")]
    InsufficientCandidates {
        /// Number of words requested.
        needed: usize,
        /// Number of valid candidates in the source.
        available: usize,
    },

    /// Error generated reading from a word source.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Number of missing candidates when a sampling request failed.
    pub fn shortfall(&self) -> Option<usize> {
        match self {
            Self::InsufficientCandidates { needed, available } => {
                Some(needed - available)
            }
            _ => None,
        }
    }
}
