#![allow(dead_code)]

pub mod feed_server;
pub mod scripted_feed;

pub use scripted_feed::ScriptedFeed;

use birthday_explorer::modules::calendar::{CalendarDate, FixedClock};
use std::sync::Arc;

pub fn date(month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(month, day).expect("valid test date")
}

/// Date in the year the test clock reports
pub fn dated(month: u32, day: u32) -> CalendarDate {
    CalendarDate::with_year(2023, month, day).expect("valid test date")
}

/// Clock pinned to 2023-06-01
pub fn test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(dated(6, 1)))
}
