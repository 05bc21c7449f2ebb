use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A notable person born on a given day, as reported by the feed
///
/// `extra` carries every other field of the feed entry untouched (pages,
/// thumbnails, ...). The engine never looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub text: String,
    pub year: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ordered births for exactly one calendar day
pub type ResultSet = Vec<BirthRecord>;

impl BirthRecord {
    pub fn new(text: impl Into<String>, year: i32) -> Self {
        Self {
            text: text.into(),
            year,
            extra: Map::new(),
        }
    }

    /// Display line for a result row
    pub fn label(&self) -> String {
        format!("{} - {}", self.text, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label() {
        assert_eq!(
            BirthRecord::new("Abraham Lincoln", 1809).label(),
            "Abraham Lincoln - 1809"
        );
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let json = json!({
            "text": "Charles Darwin",
            "year": 1809,
            "pages": [{"title": "Charles_Darwin"}]
        });
        let record: BirthRecord = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(record.text, "Charles Darwin");
        assert_eq!(record.extra["pages"][0]["title"], "Charles_Darwin");
        assert_eq!(serde_json::to_value(&record).unwrap(), json);
    }
}
