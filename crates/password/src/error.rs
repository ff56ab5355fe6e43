use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated by the wordlist library.
    #[error(transparent)]
    Wordlist(#[from] wordkey_wordlist::Error),
}
