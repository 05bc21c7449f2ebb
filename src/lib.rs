pub mod modules;
pub mod shared;

use modules::explorer::BirthdayExplorerController;
use modules::history::{BirthsFeed, WikimediaClient};
use shared::{utils::init_logger, AppResult, ExplorerConfig};
use std::sync::Arc;

/// Build a ready-to-use explorer from the process environment
///
/// Reads `.env` and `BIRTHDAY_*` variables, installs the logger and wires the
/// Wikimedia feed into a fresh controller.
pub fn bootstrap() -> AppResult<Arc<BirthdayExplorerController>> {
    let config = ExplorerConfig::from_env()?;
    init_logger();
    bootstrap_with_config(&config)
}

pub fn bootstrap_with_config(
    config: &ExplorerConfig,
) -> AppResult<Arc<BirthdayExplorerController>> {
    let feed = WikimediaClient::from_config(config)?;
    log_info!(
        "Birthday explorer using {} feed at {}",
        feed.provider_name(),
        feed.base_url()
    );

    let controller = BirthdayExplorerController::new(Arc::new(feed))
        .with_skip_ahead_limit(config.skip_ahead_limit);
    Ok(Arc::new(controller))
}
