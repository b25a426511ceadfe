use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use tracing::{debug, warn};

use super::StoreError;
use crate::models::{RawHistoryRecord, RecentlyOpened};

/// Key of the recently opened list in `ItemTable`
pub const HISTORY_KEY: &str = "history.recentlyOpenedPathsList";

const HISTORY_QUERY: &str = "SELECT value FROM ItemTable WHERE key = ?1";

// The editor holds a write lock while it flushes state; wait briefly instead of failing
const BUSY_TIMEOUT: Duration = Duration::from_millis(250);

/// Reads the recently opened list out of the editor's `state.vscdb`.
///
/// Every call opens its own read-only connection and drops it before returning,
/// so a reader can be cloned freely and shared between concurrent searches.
#[derive(Debug, Clone)]
pub struct HistoryStoreReader {
    path: PathBuf,
}

impl HistoryStoreReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all raw records, degrading to an empty list on any store failure
    pub fn load_all(&self) -> Vec<RawHistoryRecord> {
        match self.read_records() {
            Ok(records) => {
                debug!(count = records.len(), path = %self.path.display(), "Loaded history records");
                records
            }
            Err(e) => {
                warn!("Failed to read history store: {}", e);
                Vec::new()
            }
        }
    }

    /// Load all raw records, reporting why the store could not be read
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database cannot be opened or queried (missing, locked, not a database)
    /// - The stored value is not UTF-8
    /// - The stored value is not JSON with an `entries` list
    ///
    /// A missing row or a NULL value is not an error and yields an empty list.
    pub fn read_records(&self) -> Result<Vec<RawHistoryRecord>, StoreError> {
        match self.read_value()? {
            Some(bytes) => parse_recently_opened(&bytes),
            None => {
                debug!(key = HISTORY_KEY, "No recently opened list in history store");
                Ok(Vec::new())
            }
        }
    }

    fn read_value(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let unavailable = |source| StoreError::Unavailable { path: self.path.clone(), source };

        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(unavailable)?;
        conn.busy_timeout(BUSY_TIMEOUT).map_err(unavailable)?;

        // The editor has written this column as both TEXT and BLOB over time
        let value = conn
            .query_row(HISTORY_QUERY, [HISTORY_KEY], |row| {
                Ok(match row.get_ref(0)? {
                    ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(bytes.to_vec()),
                    _ => None,
                })
            })
            .optional()
            .map_err(unavailable)?;

        Ok(value.flatten())
    }
}

/// Decode the stored value into raw records
///
/// Records that do not decode individually are logged and skipped.
pub fn parse_recently_opened(bytes: &[u8]) -> Result<Vec<RawHistoryRecord>, StoreError> {
    let text = std::str::from_utf8(bytes)?;
    let blob: RecentlyOpened = serde_json::from_str(text)?;

    let total = blob.entries.len();
    let mut records = Vec::with_capacity(total);
    for (index, value) in blob.entries.into_iter().enumerate() {
        match serde_json::from_value::<RawHistoryRecord>(value) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping malformed history record {}: {}", index, e),
        }
    }

    if records.len() < total {
        debug!("Parsed history list: {} records ({} skipped)", records.len(), total - records.len());
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::RecordKind;

    fn write_store(dir: &TempDir, value: Option<&str>) -> PathBuf {
        let path = dir.path().join("state.vscdb");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE ItemTable (key TEXT UNIQUE ON CONFLICT REPLACE, value BLOB)")
            .unwrap();
        if let Some(value) = value {
            conn.execute("INSERT INTO ItemTable (key, value) VALUES (?1, ?2)", [HISTORY_KEY, value])
                .unwrap();
        }
        path
    }

    #[test]
    fn test_parse_mixed_kinds() {
        let json = br#"{"entries":[
            {"folderUri":"file:///home/u/a","label":"A"},
            {"fileUri":"file:///home/u/notes.md"},
            {"workspace":{"id":"1","configPath":"file:///w.code-workspace"}}
        ]}"#;

        let records = parse_recently_opened(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].kind(), RecordKind::Folder("file:///home/u/a"));
        assert_eq!(records[1].kind(), RecordKind::File);
        assert_eq!(records[2].kind(), RecordKind::Workspace);
    }

    #[test]
    fn test_parse_skips_malformed_record() {
        let json = br#"{"entries":[{"folderUri":42},{"folderUri":"/ok"},"junk"]}"#;

        let records = parse_recently_opened(json).unwrap();
        assert_eq!(records, vec![RawHistoryRecord::folder("/ok")]);
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_recently_opened(b"{entries:").unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let err = parse_recently_opened(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, StoreError::NotUtf8(_)));
    }

    #[test]
    fn test_parse_entries_not_a_list() {
        let err = parse_recently_opened(br#"{"entries":{"folderUri":"/a"}}"#).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[test]
    fn test_read_records_from_store() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, Some(r#"{"entries":[{"folderUri":"/home/u/proj","label":"Proj"}]}"#));

        let records = HistoryStoreReader::new(&path).read_records().unwrap();
        assert_eq!(records, vec![RawHistoryRecord::folder("/home/u/proj").with_label("Proj")]);
    }

    #[test]
    fn test_read_records_no_row() {
        let dir = TempDir::new().unwrap();
        let path = write_store(&dir, None);

        assert!(HistoryStoreReader::new(&path).read_records().unwrap().is_empty());
    }

    #[test]
    fn test_missing_store_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let reader = HistoryStoreReader::new(dir.path().join("absent.vscdb"));

        let err = reader.read_records().unwrap_err();
        assert!(err.is_unavailable());
        assert!(reader.load_all().is_empty());
    }

    #[test]
    fn test_read_only_never_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.vscdb");

        HistoryStoreReader::new(&path).load_all();
        assert!(!path.exists());
    }
}
