//! Code Recents Provider - search a code editor's recently opened folders
//!
//! This library backs a desktop search provider for the editor's "recently opened"
//! history, which the editor keeps as a JSON blob inside its `state.vscdb` SQLite store.
//! It supports:
//!
//! - Reading the recently opened list from the store, read-only
//! - Matching folder entries against free-text search terms
//! - A cancellable search session (initial search, subsearch, result metadata, truncation)
//! - A host-facing provider facade and an editor launcher for activated results
//!
//! # Example
//!
//! ```no_run
//! use code_recents_provider::{ProviderConfig, RecentFoldersProvider, SearchProvider};
//! use code_recents_provider::session::CancellationToken;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let provider = RecentFoldersProvider::from_config(&ProviderConfig::default())?;
//! let ids = provider
//!     .get_initial_result_set(vec!["proj".to_string()], CancellationToken::new())
//!     .await;
//! println!("{} matching folders", ids.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod filters;
pub mod launcher;
pub mod models;
pub mod provider;
pub mod session;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::{EditorFlavor, ProviderConfig};
pub use filters::filter_entries;
pub use models::{HistoryEntry, RawHistoryRecord, ResultMeta};
pub use provider::{RecentFoldersProvider, SearchProvider};
pub use session::{SearchError, SearchSession};
pub use store::HistoryStoreReader;
pub use utils::{display_location, format_path_with_tilde};
