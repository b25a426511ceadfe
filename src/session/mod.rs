//! Cancellable search pipeline over the recently opened history
//!
//! # Cancellation
//!
//! Every async entry point takes a [`CancellationToken`]. The token is observed through
//! its `cancelled()` future, which lives only as long as the call, so repeated searches
//! never accumulate listeners. How cancellation is reported depends on the operation:
//!
//! - [`SearchSession::initial_search`] absorbs it and returns no identifiers
//! - [`SearchSession::subsearch`] rejects an already cancelled token with
//!   [`SearchError::SearchCancelled`] before touching the store
//! - [`SearchSession::resolve_metas`] rejects with [`SearchError::OperationCancelled`]
//!
//! # Overlapping searches
//!
//! The host may start a subsearch before the previous search completes. Each search takes
//! a generation number when it starts; a search that completes after a newer one has started
//! still returns its identifiers but leaves the entry cache to the newer search.

pub mod error;
pub mod search;
pub mod source;

pub use error::SearchError;
pub use search::{SearchOutcome, SearchSession, SessionState};
pub use source::HistorySource;
pub use tokio_util::sync::CancellationToken;
