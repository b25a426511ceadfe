use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level shape of the `history.recentlyOpenedPathsList` value.
///
/// Entries are kept as raw JSON values so that one malformed record can be
/// skipped without rejecting the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentlyOpened {
    #[serde(default)]
    pub entries: Vec<Value>,
}

/// A single record of the recently opened list.
///
/// The editor stores folders, workspaces and files in the same list; only the
/// presence of a field tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHistoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<Value>,
}

/// What a [`RawHistoryRecord`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind<'a> {
    Folder(&'a str),
    Workspace,
    File,
    Unknown,
}

impl RawHistoryRecord {
    /// Build a folder record (mostly useful in tests and benches)
    pub fn folder(uri: impl Into<String>) -> Self {
        Self { folder_uri: Some(uri.into()), ..Self::default() }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_remote_authority(mut self, authority: impl Into<String>) -> Self {
        self.remote_authority = Some(authority.into());
        self
    }

    /// Classify the record. `folderUri` wins over the other markers.
    pub fn kind(&self) -> RecordKind<'_> {
        if let Some(uri) = self.folder_uri.as_deref() {
            RecordKind::Folder(uri)
        } else if self.workspace.is_some() {
            RecordKind::Workspace
        } else if self.file_uri.is_some() {
            RecordKind::File
        } else {
            RecordKind::Unknown
        }
    }
}
