use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{HistorySource, SearchError};
use crate::config::ProviderConfig;
use crate::filters::filter_entries;
use crate::launcher::{Launcher, ProcessLauncher};
use crate::models::{HistoryEntry, ResultMeta};
use crate::store::HistoryStoreReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Searching,
}

/// How the most recently finished search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Completed,
    Cancelled,
}

/// One search session per provider lifetime.
///
/// Owns the cache of entries matched by the most recent search; metadata
/// resolution reads it and nothing else writes it.
pub struct SearchSession {
    source: Arc<dyn HistorySource>,
    launcher: Arc<dyn Launcher>,
    icon_name: String,
    inner: Mutex<SessionInner>,
}

#[derive(Default)]
struct SessionInner {
    generation: u64,
    in_flight: usize,
    last_outcome: Option<SearchOutcome>,
    entries: HashMap<String, HistoryEntry>,
}

/// Marks one search as running; records its outcome when dropped
struct InFlight<'a> {
    session: &'a SearchSession,
    generation: u64,
    outcome: SearchOutcome,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut inner = self.session.inner.lock();
        inner.in_flight = inner.in_flight.saturating_sub(1);
        inner.last_outcome = Some(self.outcome);
    }
}

impl SearchSession {
    pub fn new(
        source: Arc<dyn HistorySource>,
        launcher: Arc<dyn Launcher>,
        icon_name: impl Into<String>,
    ) -> Self {
        Self { source, launcher, icon_name: icon_name.into(), inner: Mutex::new(SessionInner::default()) }
    }

    /// Session reading the configured store and launching the configured editor
    ///
    /// # Errors
    ///
    /// Returns an error if the store path cannot be resolved.
    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Self> {
        let reader = HistoryStoreReader::new(config.store_path()?);
        let launcher = ProcessLauncher::new(config.launch_command());
        Ok(Self::new(Arc::new(reader), Arc::new(launcher), config.icon_name()))
    }

    pub fn state(&self) -> SessionState {
        if self.inner.lock().in_flight > 0 { SessionState::Searching } else { SessionState::Idle }
    }

    pub fn last_outcome(&self) -> Option<SearchOutcome> {
        self.inner.lock().last_outcome
    }

    /// Entry cached for `id` by the most recent search
    pub fn cached_entry(&self, id: &str) -> Option<HistoryEntry> {
        self.inner.lock().entries.get(id).cloned()
    }

    /// Read the history, match it against `terms` and return the matching uris
    ///
    /// The entry cache is cleared when the search starts and refilled when it completes.
    /// Cancellation is absorbed: a cancelled search returns no identifiers.
    pub async fn initial_search<S: AsRef<str>>(
        &self,
        terms: &[S],
        cancel: &CancellationToken,
    ) -> Vec<String> {
        let terms: Vec<String> = terms.iter().map(|t| t.as_ref().to_owned()).collect();
        let mut search = self.begin_search();

        if cancel.is_cancelled() {
            debug!(generation = search.generation, "Search cancelled before reading history");
            return Vec::new();
        }

        let source = Arc::clone(&self.source);
        let task = tokio::task::spawn_blocking(move || {
            let records = source.load_all();
            filter_entries(&records, &terms)
        });

        let entries = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(generation = search.generation, "Search cancelled");
                return Vec::new();
            }
            joined = task => match joined {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("History search task failed: {}", e);
                    Vec::new()
                }
            },
        };

        let ids = self.store_results(search.generation, entries);
        search.outcome = SearchOutcome::Completed;
        ids
    }

    /// Refine a previous result set
    ///
    /// The history is re-read in full; `previous` is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchCancelled`] if `cancel` is already cancelled,
    /// without reading the store.
    pub async fn subsearch<S: AsRef<str>>(
        &self,
        _previous: &[String],
        terms: &[S],
        cancel: &CancellationToken,
    ) -> Result<Vec<String>, SearchError> {
        if cancel.is_cancelled() {
            return Err(SearchError::SearchCancelled);
        }

        Ok(self.initial_search(terms, cancel).await)
    }

    /// Build result metadata for `ids`, in order, skipping ids not in the cache
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::OperationCancelled`] if `cancel` fires before all ids are resolved.
    pub fn resolve_metas<S: AsRef<str>>(
        &self,
        ids: &[S],
        cancel: &CancellationToken,
    ) -> Result<Vec<ResultMeta>, SearchError> {
        let inner = self.inner.lock();
        let mut metas = Vec::with_capacity(ids.len());

        for id in ids {
            if cancel.is_cancelled() {
                return Err(SearchError::OperationCancelled);
            }
            if let Some(entry) = inner.entries.get(id.as_ref()) {
                metas.push(ResultMeta::from_entry(entry, &self.icon_name));
            }
        }

        Ok(metas)
    }

    /// First `max_results` ids in their original order
    pub fn truncate<T: Clone>(ids: &[T], max_results: usize) -> Vec<T> {
        ids.iter().take(max_results).cloned().collect()
    }

    /// Open the folder named by `id` in the editor
    pub fn activate<S: AsRef<str>>(&self, id: &str, terms: &[S]) {
        debug!(id, terms = terms.len(), "Activating result");
        self.launcher.launch(id);
    }

    fn begin_search(&self) -> InFlight<'_> {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.in_flight += 1;
        inner.entries.clear();

        InFlight { session: self, generation: inner.generation, outcome: SearchOutcome::Cancelled }
    }

    /// Replace the cache with `entries` unless a newer search has started
    ///
    /// Returns the unique uris in match order. For duplicated uris the cache keeps the
    /// last entry seen.
    fn store_results(&self, generation: u64, entries: Vec<HistoryEntry>) -> Vec<String> {
        let mut seen = HashSet::with_capacity(entries.len());
        let ids: Vec<String> =
            entries.iter().filter(|e| seen.insert(e.uri.as_str())).map(|e| e.uri.clone()).collect();

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            debug!(generation, current = inner.generation, "Discarding stale search results");
            return ids;
        }

        inner.entries = entries.into_iter().map(|e| (e.uri.clone(), e)).collect();
        debug!(generation, matched = ids.len(), "Search completed");
        ids
    }
}
