//! Host-facing search provider
//!
//! [`SearchProvider`] is the calling convention a desktop shell uses for search providers.
//! [`RecentFoldersProvider`] implements it on top of a [`SearchSession`](crate::session::SearchSession);
//! registration with the shell itself is left to the host.

pub mod facade;

pub use facade::{AppInfo, RecentFoldersProvider, SearchProvider};
