use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

pub const DEFAULT_FEED_BASE_URL: &str = "https://api.wikimedia.org/feed/v1/wikipedia/en/onthisday";
pub const DEFAULT_USER_AGENT: &str = "birthday-explorer/0.1";
pub const DEFAULT_SKIP_AHEAD_LIMIT: u32 = 366;

/// Runtime configuration for the explorer engine
///
/// Values come from the process environment (optionally seeded from a `.env`
/// file). Anything unset falls back to the defaults above.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    /// Root of the "on this day" feed, without the trailing `/births/...` part
    pub feed_base_url: String,

    /// Sent as the `User-Agent` header, Wikimedia rejects anonymous clients
    pub user_agent: String,

    /// No timeout unless explicitly configured
    pub request_timeout: Option<Duration>,

    /// Upper bound on days probed by skip-ahead navigation
    pub skip_ahead_limit: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            feed_base_url: DEFAULT_FEED_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: None,
            skip_ahead_limit: DEFAULT_SKIP_AHEAD_LIMIT,
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = non_empty(lookup("BIRTHDAY_FEED_BASE_URL")) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::Config(format!(
                    "BIRTHDAY_FEED_BASE_URL must be an http(s) URL, got '{}'",
                    url
                )));
            }
            config.feed_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(agent) = non_empty(lookup("BIRTHDAY_USER_AGENT")) {
            config.user_agent = agent;
        }

        if let Some(secs) = non_empty(lookup("BIRTHDAY_REQUEST_TIMEOUT_SECS")) {
            let secs: u64 = secs.parse()?;
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(limit) = non_empty(lookup("BIRTHDAY_SKIP_AHEAD_LIMIT")) {
            config.skip_ahead_limit = limit.parse()?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
