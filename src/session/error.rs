use thiserror::Error;

/// Cancellation outcomes surfaced to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A subsearch was requested with an already cancelled token
    #[error("search cancelled")]
    SearchCancelled,

    /// Metadata resolution observed cancellation part way through
    #[error("operation cancelled")]
    OperationCancelled,
}
