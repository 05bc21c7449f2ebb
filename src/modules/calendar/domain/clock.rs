use super::calendar_date::CalendarDate;
use chrono::Local;

/// Source of "today", used when navigating without a selected date
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}

/// Local wall-clock date
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(Local::now().date_naive())
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_has_year() {
        assert!(SystemClock.today().year().is_some());
    }

    #[test]
    fn test_fixed_clock() {
        let date = CalendarDate::with_year(2020, 12, 31).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
