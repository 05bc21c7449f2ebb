use super::application::{
    BirthdayExplorerController, ExplorerStatus, FavoriteToggle, LoadOutcome, NextBirthdayOutcome,
};
use crate::modules::calendar::{CalendarDate, CalendarMath};
use crate::modules::favorites::FavoriteEntry;
use crate::modules::history::BirthRecord;
use crate::{log_debug, log_error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectDateRequest {
    pub month: u32,
    pub day: u32,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipAheadRequest {
    pub max_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteRequest {
    pub record: BirthRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSearchTermRequest {
    pub term: String,
}

/// One visible result row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    #[serde(flatten)]
    pub record: BirthRecord,
    pub label: String,
    pub is_favorite: bool,
}

/// Everything the UI renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerView {
    pub selected_date: Option<CalendarDate>,
    pub heading: String,
    pub status: ExplorerStatus,
    pub loaded: bool,
    pub search_term: String,
    pub results: Vec<ResultRow>,
    pub favorites: Vec<FavoriteEntry>,
}

/// Operation outcome plus the view after it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse<T> {
    pub outcome: T,
    pub view: ExplorerView,
}

pub async fn get_view(controller: &BirthdayExplorerController) -> Result<ExplorerView, String> {
    let status = controller.status().await;
    let state = controller.snapshot().await;

    let results = state
        .filtered_results()
        .into_iter()
        .map(|record| ResultRow {
            label: record.label(),
            is_favorite: state.favorites.is_favorite(&record),
            record,
        })
        .collect();

    Ok(ExplorerView {
        heading: state
            .selected_date
            .map(|date| {
                let shown = controller.with_clock_year(date);
                format!("Birthdays on {}", CalendarMath::format(&shown))
            })
            .unwrap_or_default(),
        selected_date: state.selected_date,
        status,
        loaded: state.is_loaded(),
        search_term: state.search_term.clone(),
        results,
        favorites: state.favorites.entries().to_vec(),
    })
}

/// Select a date; a cleared picker (`None`) leaves everything as it is
pub async fn select_date(
    request: Option<SelectDateRequest>,
    controller: &BirthdayExplorerController,
) -> Result<CommandResponse<Option<LoadOutcome>>, String> {
    let outcome = match request {
        Some(request) => {
            log_debug!(
                "select_date command called - {}/{} ({:?})",
                request.month,
                request.day,
                request.year
            );
            let date = match request.year {
                Some(year) => CalendarDate::with_year(year, request.month, request.day),
                None => CalendarDate::new(request.month, request.day),
            }
            .map_err(|e| {
                log_error!("select_date rejected: {}", e);
                e.to_string()
            })?;
            Some(controller.select_date(date).await)
        }
        None => None,
    };

    Ok(CommandResponse {
        outcome,
        view: get_view(controller).await?,
    })
}

pub async fn next_birthday(
    controller: &BirthdayExplorerController,
) -> Result<CommandResponse<NextBirthdayOutcome>, String> {
    let outcome = controller.next_birthday().await.map_err(|e| e.to_string())?;
    Ok(CommandResponse {
        outcome,
        view: get_view(controller).await?,
    })
}

pub async fn skip_to_next_birthday(
    request: SkipAheadRequest,
    controller: &BirthdayExplorerController,
) -> Result<CommandResponse<NextBirthdayOutcome>, String> {
    let max_days = request
        .max_days
        .unwrap_or_else(|| controller.skip_ahead_limit());
    let outcome = controller
        .skip_to_next_birthday(max_days)
        .await
        .map_err(|e| e.to_string())?;
    Ok(CommandResponse {
        outcome,
        view: get_view(controller).await?,
    })
}

pub async fn toggle_favorite(
    request: ToggleFavoriteRequest,
    controller: &BirthdayExplorerController,
) -> Result<CommandResponse<FavoriteToggle>, String> {
    let outcome = controller
        .toggle_favorite(&request.record)
        .await
        .map_err(|e| e.to_string())?;
    Ok(CommandResponse {
        outcome,
        view: get_view(controller).await?,
    })
}

pub async fn set_search_term(
    request: SetSearchTermRequest,
    controller: &BirthdayExplorerController,
) -> Result<ExplorerView, String> {
    controller.set_search_term(request.term).await;
    get_view(controller).await
}
