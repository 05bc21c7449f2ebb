use crate::modules::calendar::CalendarDate;
use crate::shared::errors::AppError;
use serde::Serialize;

/// Result of selecting a date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LoadOutcome {
    /// Results replaced; `count` may be zero
    Loaded { date: CalendarDate, count: usize },
    /// Feed failed; results were cleared
    FeedUnavailable { date: CalendarDate, error: AppError },
    /// A newer request was issued before this one finished; its result was discarded
    Superseded { date: CalendarDate },
}

/// Result of next-day navigation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NextBirthdayOutcome {
    /// Selected date and results moved to `date`
    Advanced { date: CalendarDate, count: usize },
    /// `candidate` had no births; nothing changed
    NoBirthdays { candidate: CalendarDate },
    /// Feed failed for `candidate`; nothing changed
    FeedUnavailable {
        candidate: CalendarDate,
        error: AppError,
    },
    Superseded { candidate: CalendarDate },
}

impl NextBirthdayOutcome {
    pub fn advanced(&self) -> bool {
        matches!(self, NextBirthdayOutcome::Advanced { .. })
    }
}

/// What `toggle_favorite` did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FavoriteToggle {
    Added,
    Removed,
}
