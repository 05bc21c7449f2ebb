use crate::modules::history::BirthRecord;

/// Case-insensitive substring filter over a result set
///
/// Stateless; recompute whenever either the records or the term change.
pub struct SearchFilter;

impl SearchFilter {
    /// Records whose `text` contains `term`, ignoring case, in original order.
    /// An empty term keeps everything.
    pub fn filter(results: &[BirthRecord], term: &str) -> Vec<BirthRecord> {
        if term.is_empty() {
            return results.to_vec();
        }

        let needle = term.to_lowercase();
        results
            .iter()
            .filter(|record| Self::matches(record, &needle))
            .cloned()
            .collect()
    }

    fn matches(record: &BirthRecord, lowered_term: &str) -> bool {
        record.text.to_lowercase().contains(lowered_term)
    }
}
