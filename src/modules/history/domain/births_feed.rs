use super::birth_record::ResultSet;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Port for the external "on this day" births feed
///
/// Implementations make exactly one attempt per call: no retry, no caching.
/// Every failure is reported as `AppError::Fetch`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BirthsFeed: Send + Sync {
    /// Human readable name used in logs
    fn provider_name(&self) -> &'static str;

    /// Births recorded for `month`/`day`, in feed order
    async fn fetch(&self, month: u32, day: u32) -> AppResult<ResultSet>;
}
