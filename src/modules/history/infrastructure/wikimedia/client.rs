use crate::modules::history::domain::{BirthsFeed, ResultSet};
use crate::shared::{
    config::ExplorerConfig,
    errors::{AppError, AppResult},
    utils::{LogContext, TimedOperation},
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::{dto::WikimediaBirthsResponse, mapper::WikimediaMapper};

const PROVIDER_NAME: &str = "Wikimedia";

/// Client for the Wikimedia "on this day" births feed
///
/// One GET per call. The underlying `reqwest::Client` pools connections and is
/// cheap to clone, so a single instance can serve overlapping requests.
#[derive(Clone)]
pub struct WikimediaClient {
    client: Client,
    base_url: String,
}

impl WikimediaClient {
    pub fn new() -> AppResult<Self> {
        Self::from_config(&ExplorerConfig::default())
    }

    pub fn from_config(config: &ExplorerConfig) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.feed_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/births/{month}/{day}`, no zero padding
    pub fn births_url(&self, month: u32, day: u32) -> String {
        format!("{}/births/{}/{}", self.base_url, month, day)
    }

    pub async fn fetch_births(&self, month: u32, day: u32) -> AppResult<ResultSet> {
        let url = self.births_url(month, day);
        let endpoint = format!("births/{}/{}", month, day);
        let timer = TimedOperation::new(&format!("{} {}", PROVIDER_NAME, endpoint));
        LogContext::api_call(PROVIDER_NAME, &endpoint, "", None);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("{} request for {} failed: {}", PROVIDER_NAME, endpoint, e);
            AppError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {} for {}", PROVIDER_NAME, status, endpoint);
            return Err(AppError::Fetch(format!(
                "{} feed returned {} for {}",
                PROVIDER_NAME, status, endpoint
            )));
        }

        let payload = response
            .json::<WikimediaBirthsResponse>()
            .await
            .map_err(|e| {
                AppError::Fetch(format!("Failed to parse {} response: {}", PROVIDER_NAME, e))
            })?;

        let records = WikimediaMapper::to_domain(payload);
        debug!("{} returned {} births for {}", PROVIDER_NAME, records.len(), endpoint);
        LogContext::api_call(PROVIDER_NAME, &endpoint, status.as_str(), Some(timer.finish()));

        Ok(records)
    }
}

#[async_trait]
impl BirthsFeed for WikimediaClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch(&self, month: u32, day: u32) -> AppResult<ResultSet> {
        self.fetch_births(month, day).await
    }
}
