use crate::models::RawHistoryRecord;
use crate::store::HistoryStoreReader;

/// Where a session gets its raw records from (allows mocking in tests)
///
/// Implementations are called on a blocking thread and must not hold state
/// between calls: every search reads the history afresh.
pub trait HistorySource: Send + Sync {
    fn load_all(&self) -> Vec<RawHistoryRecord>;
}

impl HistorySource for HistoryStoreReader {
    fn load_all(&self) -> Vec<RawHistoryRecord> {
        HistoryStoreReader::load_all(self)
    }
}
