use async_trait::async_trait;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::models::ResultMeta;
use crate::session::{CancellationToken, SearchError, SearchSession};

/// Application a provider's results belong to, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub desktop_id: String,
    pub name: String,
}

/// Search provider contract expected by the host shell
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Whether the host may hand the whole search over to the provider's application
    fn can_launch_search(&self) -> bool;

    fn app_info(&self) -> Option<AppInfo>;

    async fn get_initial_result_set(&self, terms: Vec<String>, cancel: CancellationToken) -> Vec<String>;

    async fn get_subsearch_result_set(
        &self,
        previous_results: Vec<String>,
        terms: Vec<String>,
        cancel: CancellationToken,
    ) -> Result<Vec<String>, SearchError>;

    async fn get_result_metas(
        &self,
        ids: Vec<String>,
        cancel: CancellationToken,
    ) -> Result<Vec<ResultMeta>, SearchError>;

    fn filter_results(&self, ids: Vec<String>, max_results: usize) -> Vec<String>;

    fn activate_result(&self, id: &str, terms: &[String]);

    fn launch_search(&self, terms: &[String]);
}

/// Provider over the editor's recently opened folders
pub struct RecentFoldersProvider {
    session: SearchSession,
}

impl RecentFoldersProvider {
    pub fn new(session: SearchSession) -> Self {
        Self { session }
    }

    /// # Errors
    ///
    /// Returns an error if the store path cannot be resolved.
    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Self> {
        Ok(Self::new(SearchSession::from_config(config)?))
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }
}

#[async_trait]
impl SearchProvider for RecentFoldersProvider {
    fn can_launch_search(&self) -> bool {
        false
    }

    fn app_info(&self) -> Option<AppInfo> {
        None
    }

    async fn get_initial_result_set(&self, terms: Vec<String>, cancel: CancellationToken) -> Vec<String> {
        self.session.initial_search(&terms, &cancel).await
    }

    async fn get_subsearch_result_set(
        &self,
        previous_results: Vec<String>,
        terms: Vec<String>,
        cancel: CancellationToken,
    ) -> Result<Vec<String>, SearchError> {
        self.session.subsearch(&previous_results, &terms, &cancel).await
    }

    async fn get_result_metas(
        &self,
        ids: Vec<String>,
        cancel: CancellationToken,
    ) -> Result<Vec<ResultMeta>, SearchError> {
        self.session.resolve_metas(&ids, &cancel)
    }

    fn filter_results(&self, ids: Vec<String>, max_results: usize) -> Vec<String> {
        if ids.len() <= max_results {
            return ids;
        }
        SearchSession::truncate(&ids, max_results)
    }

    fn activate_result(&self, id: &str, terms: &[String]) {
        self.session.activate(id, terms);
    }

    fn launch_search(&self, terms: &[String]) {
        debug!(terms = terms.len(), "launch_search is not supported, ignoring");
    }
}
