pub mod domain;

// Re-exports for easy external access
pub use domain::{CalendarDate, CalendarMath, Clock, FixedClock, SystemClock};
