use super::dto::{WikimediaBirthEntry, WikimediaBirthsResponse};
use crate::modules::history::domain::{BirthRecord, ResultSet};
use tracing::debug;

pub struct WikimediaMapper;

impl WikimediaMapper {
    /// Convert a feed response to a result set, keeping feed order
    ///
    /// Entries with a blank `text` cannot be displayed or favorited and are dropped.
    pub fn to_domain(response: WikimediaBirthsResponse) -> ResultSet {
        let total = response.births.len();
        let records: ResultSet = response
            .births
            .into_iter()
            .filter(|entry| !entry.text.trim().is_empty())
            .map(Self::entry_to_domain)
            .collect();

        if records.len() < total {
            debug!(
                "Dropped {} births entries without text",
                total - records.len()
            );
        }
        records
    }

    fn entry_to_domain(entry: WikimediaBirthEntry) -> BirthRecord {
        BirthRecord {
            text: entry.text,
            year: entry.year,
            extra: entry.extra,
        }
    }
}
