use super::engine_state::{EngineState, ExplorerStatus};
use super::outcomes::{FavoriteToggle, LoadOutcome, NextBirthdayOutcome};
use super::request_tracker::{RequestTicket, RequestTracker};
use crate::modules::calendar::{CalendarDate, CalendarMath, Clock, SystemClock};
use crate::modules::favorites::FavoriteEntry;
use crate::modules::history::{BirthRecord, BirthsFeed, ResultSet};
use crate::shared::config::DEFAULT_SKIP_AHEAD_LIMIT;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info, log_warn};
use std::sync::Arc;
use tokio::sync::RwLock;

struct ControllerInner {
    engine: EngineState,
    requests: RequestTracker,
}

/// How a multi-day probe ended
enum Probe {
    Found(CalendarDate, ResultSet),
    Empty(CalendarDate),
    Failed(CalendarDate, AppError),
    Invalid(AppError),
    Superseded(CalendarDate),
}

/// Orchestrates date selection, navigation, favorites and search
///
/// Fetches run without holding the state lock, so operations may overlap.
/// Only the most recently issued request is allowed to change state.
pub struct BirthdayExplorerController {
    feed: Arc<dyn BirthsFeed>,
    clock: Arc<dyn Clock>,
    skip_ahead_limit: u32,
    inner: RwLock<ControllerInner>,
}

impl BirthdayExplorerController {
    pub fn new(feed: Arc<dyn BirthsFeed>) -> Self {
        Self {
            feed,
            clock: Arc::new(SystemClock),
            skip_ahead_limit: DEFAULT_SKIP_AHEAD_LIMIT,
            inner: RwLock::new(ControllerInner {
                engine: EngineState::new(),
                requests: RequestTracker::default(),
            }),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_skip_ahead_limit(mut self, limit: u32) -> Self {
        self.skip_ahead_limit = limit;
        self
    }

    pub fn skip_ahead_limit(&self) -> u32 {
        self.skip_ahead_limit
    }

    /// Select `date` and load its births
    ///
    /// The date is recorded immediately. A feed failure leaves an empty result
    /// set behind and is reported in the outcome.
    pub async fn select_date(&self, date: CalendarDate) -> LoadOutcome {
        let ticket = {
            let mut inner = self.inner.write().await;
            inner.engine.selected_date = Some(date);
            inner.requests.begin()
        };
        log_debug!("select_date {} (request #{})", date, ticket.sequence);

        let fetched = self.fetch_for(&ticket, &date).await;

        let mut inner = self.inner.write().await;
        let is_latest = inner.requests.finish(&ticket);
        match fetched {
            Some(result) if is_latest => match result {
                Ok(records) => {
                    let count = records.len();
                    inner.engine.results = Some(records);
                    log_info!("Loaded {} births for {}", count, date);
                    LoadOutcome::Loaded { date, count }
                }
                Err(error) => {
                    inner.engine.results = Some(Vec::new());
                    LogContext::error_with_context(
                        &error,
                        &format!("Error fetching births for {}", date),
                    );
                    LoadOutcome::FeedUnavailable { date, error }
                }
            },
            _ => {
                LogContext::superseded("select_date", ticket.sequence, inner.requests.latest());
                LoadOutcome::Superseded { date }
            }
        }
    }

    /// Move to the day after the selected date (or today) if it has births
    ///
    /// Advances at most one day per call. An empty day or a feed failure leaves
    /// the selected date and results exactly as they were.
    pub async fn next_birthday(&self) -> AppResult<NextBirthdayOutcome> {
        let (ticket, candidate) = {
            let mut inner = self.inner.write().await;
            let base = self.base_date(&inner.engine);
            let candidate = CalendarMath::next_day(&base)?;
            (inner.requests.begin(), candidate)
        };
        log_debug!("next_birthday probing {} (request #{})", candidate, ticket.sequence);

        let probe = match self.fetch_for(&ticket, &candidate).await {
            None => Probe::Superseded(candidate),
            Some(Ok(records)) if records.is_empty() => Probe::Empty(candidate),
            Some(Ok(records)) => Probe::Found(candidate, records),
            Some(Err(error)) => Probe::Failed(candidate, error),
        };

        self.commit_navigation("next_birthday", &ticket, probe).await
    }

    /// Walk forward day by day until a day with births is found
    ///
    /// Probes at most `max_days` days. Commits like `next_birthday` on success
    /// and changes nothing otherwise.
    pub async fn skip_to_next_birthday(&self, max_days: u32) -> AppResult<NextBirthdayOutcome> {
        let (ticket, first) = {
            let mut inner = self.inner.write().await;
            let base = self.base_date(&inner.engine);
            let first = CalendarMath::next_day(&base)?;
            if max_days == 0 {
                return Ok(NextBirthdayOutcome::NoBirthdays { candidate: first });
            }
            (inner.requests.begin(), first)
        };

        let mut candidate = first;
        let mut probed = 0;
        let probe = loop {
            match self.fetch_for(&ticket, &candidate).await {
                None => break Probe::Superseded(candidate),
                Some(Err(error)) => break Probe::Failed(candidate, error),
                Some(Ok(records)) if !records.is_empty() => {
                    break Probe::Found(candidate, records)
                }
                Some(Ok(_)) => {}
            }

            probed += 1;
            if probed >= max_days {
                break Probe::Empty(candidate);
            }
            candidate = match CalendarMath::next_day(&candidate) {
                Ok(next) => next,
                Err(error) => break Probe::Invalid(error),
            };
        };
        log_debug!("skip_to_next_birthday probed {} day(s) from {}", probed, first);

        self.commit_navigation("skip_to_next_birthday", &ticket, probe).await
    }

    /// Add `record` to favorites, or remove it if a favorite with the same text exists
    ///
    /// Needs a selected date to tag new entries with; without one nothing changes.
    pub async fn toggle_favorite(&self, record: &BirthRecord) -> AppResult<FavoriteToggle> {
        let mut inner = self.inner.write().await;
        let date = inner.engine.selected_date.ok_or(AppError::NoDateSelected)?;

        if inner.engine.favorites.is_favorite(record) {
            inner.engine.favorites.remove(record);
            log_debug!("Removed '{}' from favorites", record.text);
            Ok(FavoriteToggle::Removed)
        } else {
            inner.engine.favorites.add(record, &date);
            log_debug!("Added '{}' to favorites under {}", record.text, date);
            Ok(FavoriteToggle::Added)
        }
    }

    pub async fn set_search_term(&self, term: impl Into<String>) {
        let mut inner = self.inner.write().await;
        inner.engine.search_term = term.into();
    }

    pub async fn selected_date(&self) -> Option<CalendarDate> {
        self.inner.read().await.engine.selected_date
    }

    /// Unfiltered results of the last applied fetch, `None` before the first one
    pub async fn results(&self) -> Option<ResultSet> {
        self.inner.read().await.engine.results.clone()
    }

    pub async fn filtered_results(&self) -> ResultSet {
        let inner = self.inner.read().await;
        let filtered = inner.engine.filtered_results();
        if !inner.engine.search_term.is_empty() {
            LogContext::search_operation(
                &inner.engine.search_term,
                inner.engine.results.as_ref().map_or(0, Vec::len),
                filtered.len(),
            );
        }
        filtered
    }

    pub async fn favorites(&self) -> Vec<FavoriteEntry> {
        self.inner.read().await.engine.favorites.entries().to_vec()
    }

    pub async fn is_favorite(&self, record: &BirthRecord) -> bool {
        self.inner.read().await.engine.favorites.is_favorite(record)
    }

    pub async fn search_term(&self) -> String {
        self.inner.read().await.engine.search_term.clone()
    }

    pub async fn status(&self) -> ExplorerStatus {
        if self.inner.read().await.requests.in_flight() > 0 {
            ExplorerStatus::Loading
        } else {
            ExplorerStatus::Idle
        }
    }

    /// Copy of the whole engine state
    pub async fn snapshot(&self) -> EngineState {
        self.inner.read().await.engine.clone()
    }

    /// `date` with the current year attached if it has none
    ///
    /// February 29 stays year-less when the current year has no leap day.
    pub fn with_clock_year(&self, date: CalendarDate) -> CalendarDate {
        match (date.year(), self.clock.today().year()) {
            (None, Some(year)) => {
                CalendarDate::with_year(year, date.month(), date.day()).unwrap_or(date)
            }
            _ => date,
        }
    }

    fn base_date(&self, engine: &EngineState) -> CalendarDate {
        match engine.selected_date {
            Some(date) => self.with_clock_year(date),
            None => self.clock.today(),
        }
    }

    /// Fetch births for `date` unless the ticket gets cancelled first
    async fn fetch_for(
        &self,
        ticket: &RequestTicket,
        date: &CalendarDate,
    ) -> Option<AppResult<ResultSet>> {
        let (month, day) = CalendarMath::month_day(date);
        tokio::select! {
            biased;
            _ = ticket.token.cancelled() => None,
            result = self.feed.fetch(month, day) => Some(result),
        }
    }

    async fn commit_navigation(
        &self,
        operation: &str,
        ticket: &RequestTicket,
        probe: Probe,
    ) -> AppResult<NextBirthdayOutcome> {
        let mut inner = self.inner.write().await;
        let is_latest = inner.requests.finish(ticket);

        match probe {
            Probe::Invalid(error) => Err(error),
            Probe::Superseded(candidate) => {
                LogContext::superseded(operation, ticket.sequence, inner.requests.latest());
                Ok(NextBirthdayOutcome::Superseded { candidate })
            }
            Probe::Found(candidate, _) | Probe::Empty(candidate) | Probe::Failed(candidate, _)
                if !is_latest =>
            {
                LogContext::superseded(operation, ticket.sequence, inner.requests.latest());
                Ok(NextBirthdayOutcome::Superseded { candidate })
            }
            Probe::Found(date, records) => {
                let count = records.len();
                inner.engine.selected_date = Some(date);
                inner.engine.results = Some(records);
                log_info!("{}: advanced to {} with {} births", operation, date, count);
                Ok(NextBirthdayOutcome::Advanced { date, count })
            }
            Probe::Empty(candidate) => {
                log_info!("{}: no births found for {}, keeping selection", operation, candidate);
                Ok(NextBirthdayOutcome::NoBirthdays { candidate })
            }
            Probe::Failed(candidate, error) => {
                log_warn!("{}: fetch for {} failed: {}", operation, candidate, error);
                Ok(NextBirthdayOutcome::FeedUnavailable { candidate, error })
            }
        }
    }
}
