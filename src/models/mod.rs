//! Data models for the editor's recently opened history.
//!
//! - [`RawHistoryRecord`] - one element of the persisted `entries` list, as stored
//! - [`RecentlyOpened`] - the decoded top-level JSON blob
//! - [`HistoryEntry`] - a normalized folder entry produced by the matcher
//! - [`ResultMeta`] - display-ready bundle handed to the host for one identifier
//!
//! Raw records use serde with camelCase field names so they read the editor's
//! JSON directly. Derived types never round-trip back into the store.

pub mod entry;
pub mod history;
pub mod meta;

pub use entry::{HistoryEntry, LOCAL_AUTHORITY, RemoteType};
pub use history::{RawHistoryRecord, RecentlyOpened, RecordKind};
pub use meta::{IconDescriptor, IconFactory, ResultMeta};
