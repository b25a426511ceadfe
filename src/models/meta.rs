use serde::Serialize;

use crate::models::HistoryEntry;
use crate::utils::display_location;

/// Emblem drawn over the editor icon for folders on a remote host
const REMOTE_EMBLEM: &str = "network-server-symbolic";

/// What the host should draw for a result at a given size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconDescriptor {
    pub icon_name: String,
    pub size: u32,
    pub emblem: Option<String>,
}

/// Deferred icon construction; the host asks for an icon once it knows the size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconFactory {
    icon_name: String,
    remote: bool,
}

impl IconFactory {
    pub fn new(icon_name: impl Into<String>, remote: bool) -> Self {
        Self { icon_name: icon_name.into(), remote }
    }

    pub fn create(&self, size: u32) -> IconDescriptor {
        IconDescriptor {
            icon_name: self.icon_name.clone(),
            size,
            emblem: self.remote.then(|| REMOTE_EMBLEM.to_string()),
        }
    }
}

/// Display-ready bundle for one result identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultMeta {
    pub id: String,
    pub name: String,
    pub description: String,
    pub clipboard_text: String,
    #[serde(skip)]
    pub icon: IconFactory,
}

impl ResultMeta {
    pub fn from_entry(entry: &HistoryEntry, icon_name: &str) -> Self {
        Self {
            id: entry.uri.clone(),
            name: entry.title.clone(),
            description: display_location(&entry.uri),
            clipboard_text: entry.uri.clone(),
            icon: IconFactory::new(icon_name, entry.is_remote()),
        }
    }
}
