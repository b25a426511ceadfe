//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use serde_json::{Value, json};
use tempfile::TempDir;

pub use code_recents_provider::store::HISTORY_KEY;

/// Builder for a fake user config directory holding the editor's `state.vscdb`
pub struct StoreBuilder {
    temp_dir: TempDir,
    editor_dir: String,
}

impl StoreBuilder {
    /// Create a new builder with an empty config directory (no store yet)
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, editor_dir: "Code".to_string() }
    }

    /// Put the store under a different editor directory (e.g. "VSCodium")
    pub fn editor_dir(mut self, name: &str) -> Self {
        self.editor_dir = name.to_string();
        self
    }

    /// Path to use as the config dir override
    pub fn config_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn store_path(&self) -> PathBuf {
        self.temp_dir
            .path()
            .join(&self.editor_dir)
            .join("User")
            .join("globalStorage")
            .join("state.vscdb")
    }

    /// Create the database with an empty `ItemTable`
    pub fn with_empty_table(self) -> Self {
        self.open_store();
        self
    }

    /// Store `json` as TEXT under the history key
    pub fn with_history_json(self, json: &str) -> Self {
        let conn = self.open_store();
        conn.execute("INSERT INTO ItemTable (key, value) VALUES (?1, ?2)", [HISTORY_KEY, json])
            .expect("Failed to insert history value");
        self
    }

    /// Store raw bytes as a BLOB under the history key
    pub fn with_history_blob(self, bytes: &[u8]) -> Self {
        let conn = self.open_store();
        conn.execute(
            "INSERT INTO ItemTable (key, value) VALUES (?1, ?2)",
            rusqlite::params![HISTORY_KEY, bytes],
        )
        .expect("Failed to insert history blob");
        self
    }

    /// Add history entries programmatically
    pub fn with_entries(self, entries: &[EntryBuilder]) -> Self {
        let list: Vec<Value> = entries.iter().map(EntryBuilder::to_json).collect();
        let json = json!({ "entries": list }).to_string();
        self.with_history_json(&json)
    }

    /// Add an unrelated key, as the real store has hundreds of them
    pub fn with_item(self, key: &str, value: &str) -> Self {
        let conn = self.open_store();
        conn.execute("INSERT INTO ItemTable (key, value) VALUES (?1, ?2)", [key, value])
            .expect("Failed to insert item");
        self
    }

    /// Write arbitrary bytes where the database should be
    pub fn with_raw_file(self, bytes: &[u8]) -> Self {
        let path = self.store_path();
        fs::create_dir_all(path.parent().expect("store path has a parent"))
            .expect("Failed to create store dir");
        fs::write(&path, bytes).expect("Failed to write raw store file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }

    fn open_store(&self) -> Connection {
        let path = self.store_path();
        fs::create_dir_all(path.parent().expect("store path has a parent"))
            .expect("Failed to create store dir");
        let conn = Connection::open(&path).expect("Failed to open store");
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)",
        )
        .expect("Failed to create ItemTable");
        conn
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one element of the recently opened list
pub struct EntryBuilder {
    value: Value,
}

impl EntryBuilder {
    pub fn folder(uri: &str) -> Self {
        Self { value: json!({ "folderUri": uri }) }
    }

    pub fn file(uri: &str) -> Self {
        Self { value: json!({ "fileUri": uri }) }
    }

    pub fn workspace(config_path: &str) -> Self {
        Self { value: json!({ "workspace": { "id": "0f1e2d", "configPath": config_path } }) }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.value["label"] = json!(label);
        self
    }

    pub fn remote(mut self, authority: &str) -> Self {
        self.value["remoteAuthority"] = json!(authority);
        self
    }

    pub fn to_json(&self) -> Value {
        self.value.clone()
    }
}

/// A config dir with a realistic mix of folders, files and workspaces
pub fn realistic_store() -> StoreBuilder {
    StoreBuilder::new()
        .with_item("workbench.panel.height", "300")
        .with_entries(&[
            EntryBuilder::folder("file:///home/u/dev/api").label("api"),
            EntryBuilder::file("file:///home/u/dev/notes.md"),
            EntryBuilder::workspace("file:///home/u/dev/all.code-workspace"),
            EntryBuilder::folder("vscode-remote://ssh-remote%2Bbuild/srv/dev/web")
                .label("web [SSH: build]")
                .remote("ssh-remote+build"),
            EntryBuilder::folder("file:///home/u/music%20library"),
        ])
}
