use crate::modules::calendar::CalendarDate;
use crate::modules::favorites::FavoritesStore;
use crate::modules::history::ResultSet;
use crate::modules::search::SearchFilter;
use serde::{Deserialize, Serialize};

/// Whether a feed request is outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExplorerStatus {
    Idle,
    Loading,
}

/// All mutable explorer state, owned by the controller
///
/// `results` is `None` until a date has been loaded; an empty set after a load
/// is a different state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineState {
    pub selected_date: Option<CalendarDate>,
    pub results: Option<ResultSet>,
    pub favorites: FavoritesStore,
    pub search_term: String,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.results.is_some()
    }

    /// Current results narrowed by the search term
    pub fn filtered_results(&self) -> ResultSet {
        match &self.results {
            Some(results) => SearchFilter::filter(results, &self.search_term),
            None => Vec::new(),
        }
    }
}
