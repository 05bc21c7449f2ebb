use super::favorite_entry::FavoriteEntry;
use crate::modules::calendar::CalendarDate;
use crate::modules::history::BirthRecord;

/// In-memory favorites, kept in insertion order
///
/// `add` appends unconditionally. Keeping `text` unique is the caller's job:
/// the explorer controller only adds after `is_favorite` came back false.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &BirthRecord, date: &CalendarDate) {
        self.entries.push(FavoriteEntry::from_record(record, date));
    }

    /// Remove every entry sharing `record.text`; returns how many were removed
    pub fn remove(&mut self, record: &BirthRecord) -> usize {
        let original_len = self.entries.len();
        self.entries.retain(|entry| !entry.matches(record));
        original_len - self.entries.len()
    }

    pub fn is_favorite(&self, record: &BirthRecord) -> bool {
        self.entries.iter().any(|entry| entry.matches(record))
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
