use crate::models::{HistoryEntry, RawHistoryRecord, RecordKind};

/// Match raw records against search terms, returning normalized folder entries
///
/// Filter logic:
/// - Only folder records are considered; workspaces and files are dropped
/// - No terms → every folder matches
/// - Otherwise any term that is a substring of the label or the folder uri matches (OR)
///
/// Matching is case-sensitive and input order is preserved.
pub fn filter_entries<S: AsRef<str>>(records: &[RawHistoryRecord], terms: &[S]) -> Vec<HistoryEntry> {
    records
        .iter()
        .filter_map(|record| match record.kind() {
            RecordKind::Folder(uri) => Some((record, uri)),
            _ => None,
        })
        .filter(|(record, uri)| matches_terms(uri, record.label.as_deref(), terms))
        .map(|(record, uri)| {
            HistoryEntry::from_folder(uri, record.label.as_deref(), record.remote_authority.as_deref())
        })
        .collect()
}

/// True when `terms` is empty or any term occurs in the label or the uri
fn matches_terms<S: AsRef<str>>(uri: &str, label: Option<&str>, terms: &[S]) -> bool {
    if terms.is_empty() {
        return true;
    }

    terms.iter().any(|term| {
        let term = term.as_ref();
        label.is_some_and(|label| label.contains(term)) || uri.contains(term)
    })
}
