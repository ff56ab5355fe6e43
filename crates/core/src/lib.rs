//! Core types and constants for the wordkey passphrase toolkit.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod constants;
mod filter_options;

pub use filter_options::FilterOptions;

use rand::{rngs::OsRng, CryptoRng, Rng};

/// Exposes the default cryptographically secure RNG.
///
/// Word selection feeds directly into the entropy claimed for a
/// generated passphrase, so a seedable generator must never be
/// substituted here.
pub fn csprng() -> impl CryptoRng + Rng {
    OsRng
}
