use crate::modules::calendar::CalendarDate;
use crate::modules::history::BirthRecord;
use serde::{Deserialize, Serialize};

/// A favorited birth record, tagged with the day that was selected when it was pinned
///
/// Identity is the `text` alone: two records with the same description are
/// the same favorite whatever their year or origin day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub text: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl FavoriteEntry {
    pub fn from_record(record: &BirthRecord, date: &CalendarDate) -> Self {
        Self {
            text: record.text.clone(),
            year: record.year,
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn matches(&self, record: &BirthRecord) -> bool {
        self.text == record.text
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.text, self.year)
    }
}
