use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET {base}/births/{month}/{day}`
///
/// The feed omits `births` entirely for some days; that decodes as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikimediaBirthsResponse {
    #[serde(default)]
    pub births: Vec<WikimediaBirthEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikimediaBirthEntry {
    pub text: String,
    pub year: i32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
