//! Read-only access to the editor's history store
//!
//! # Error Handling Strategy
//!
//! The store belongs to another program, so every failure here is expected sooner or later:
//!
//! - **Unavailable store**: a missing, locked or corrupt database is reported as
//!   [`StoreError::Unavailable`]. [`HistoryStoreReader::load_all`] logs it and returns no records.
//!
//! - **Malformed value**: non UTF-8 bytes or JSON that does not have an `entries` list are
//!   reported as [`StoreError::NotUtf8`] / [`StoreError::Malformed`] and degrade the same way.
//!
//! - **Malformed records**: a single entry that does not decode is logged and skipped, the
//!   rest of the list is kept.
//!
//! Callers that want the typed error (diagnostics) use [`HistoryStoreReader::read_records`].

pub mod error;
pub mod reader;

pub use error::StoreError;
pub use reader::{HISTORY_KEY, HistoryStoreReader, parse_recently_opened};
