pub mod calendar_date;
pub mod calendar_math;
pub mod clock;

pub use calendar_date::CalendarDate;
pub use calendar_math::CalendarMath;
pub use clock::{Clock, FixedClock, SystemClock};
