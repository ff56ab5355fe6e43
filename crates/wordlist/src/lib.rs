//! Word list filtering and sampling for the wordkey passphrase toolkit.
//!
//! Two sampling strategies are provided: [`WordList`] loads every
//! valid word into memory and draws with replacement, while the
//! [`reservoir`] module samples a line stream of any size without
//! replacement using memory bounded by the requested word count.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

mod error;
mod filter;
pub mod reservoir;
mod word_list;

pub use error::Error;
pub use filter::WordFilter;
pub use reservoir::Sample;
pub use word_list::WordList;

/// Result type for the library.
pub(crate) type Result<T> = std::result::Result<T, Error>;
