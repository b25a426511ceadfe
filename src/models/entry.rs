use serde::{Deserialize, Serialize};

/// Authority reported for entries that live on this machine
pub const LOCAL_AUTHORITY: &str = "local";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteType {
    Local,
    Remote,
}

/// A folder from the recently opened list, normalized for display.
///
/// `uri` is the entry's identity within a search session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub uri: String,
    pub title: String,
    pub remote_authority: String,
    pub remote_type: RemoteType,
}

impl HistoryEntry {
    /// Normalize a folder record's fields.
    ///
    /// The title falls back to the uri, and a missing authority means local.
    pub fn from_folder(uri: &str, label: Option<&str>, remote_authority: Option<&str>) -> Self {
        let remote_type = if remote_authority.is_some() { RemoteType::Remote } else { RemoteType::Local };
        Self {
            uri: uri.to_string(),
            title: label.unwrap_or(uri).to_string(),
            remote_authority: remote_authority.unwrap_or(LOCAL_AUTHORITY).to_string(),
            remote_type,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.remote_type == RemoteType::Remote
    }
}
