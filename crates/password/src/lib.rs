//! Passphrase generation and entropy helpers for the wordkey toolkit.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

mod entropy;
mod error;
mod generator;

pub use entropy::{crack_years, measure_entropy, passphrase_bits};
pub use error::Error;
pub use generator::{PassphraseGen, PassphraseResult};

pub use zxcvbn;

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;
