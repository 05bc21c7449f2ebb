use super::calendar_date::CalendarDate;
use crate::shared::errors::{AppError, AppResult};

/// Pure date arithmetic used by the explorer
pub struct CalendarMath;

impl CalendarMath {
    /// The calendar day immediately following `date`
    ///
    /// Rolls over month ends and December 31st. A year, when present, is
    /// advanced on the year rollover; without one February has 29 days so that
    /// the leap day stays reachable.
    pub fn next_day(date: &CalendarDate) -> AppResult<CalendarDate> {
        if let Some(naive) = date.to_naive() {
            return naive
                .succ_opt()
                .map(CalendarDate::from_naive)
                .ok_or_else(|| AppError::InvalidDate(format!("no day follows {}", date)));
        }

        let (month, day) = (date.month(), date.day());
        if day < CalendarDate::days_in_month(month, None) {
            CalendarDate::new(month, day + 1)
        } else if month < 12 {
            CalendarDate::new(month + 1, 1)
        } else {
            CalendarDate::new(1, 1)
        }
    }

    /// `"{month}/{day}"`, or `"{month}/{day}/{year}"` when a year is known
    pub fn format(date: &CalendarDate) -> String {
        date.to_string()
    }

    /// `(month, day)` pair used for feed lookups
    pub fn month_day(date: &CalendarDate) -> (u32, u32) {
        (date.month(), date.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::with_year(year, month, day).unwrap()
    }

    #[test]
    fn test_next_day_within_month() {
        assert_eq!(
            CalendarMath::next_day(&ymd(2024, 3, 14)).unwrap(),
            ymd(2024, 3, 15)
        );
    }

    #[test]
    fn test_next_day_month_rollover() {
        assert_eq!(
            CalendarMath::next_day(&ymd(2023, 4, 30)).unwrap(),
            ymd(2023, 5, 1)
        );
        assert_eq!(
            CalendarMath::next_day(&ymd(2023, 2, 28)).unwrap(),
            ymd(2023, 3, 1)
        );
        assert_eq!(
            CalendarMath::next_day(&ymd(2024, 2, 28)).unwrap(),
            ymd(2024, 2, 29)
        );
    }

    #[test]
    fn test_next_day_year_rollover() {
        assert_eq!(
            CalendarMath::next_day(&ymd(1999, 12, 31)).unwrap(),
            ymd(2000, 1, 1)
        );
    }

    #[test]
    fn test_next_day_without_year() {
        let feb_28 = CalendarDate::new(2, 28).unwrap();
        let feb_29 = CalendarMath::next_day(&feb_28).unwrap();
        assert_eq!(feb_29, CalendarDate::new(2, 29).unwrap());
        assert_eq!(
            CalendarMath::next_day(&feb_29).unwrap(),
            CalendarDate::new(3, 1).unwrap()
        );
        assert_eq!(
            CalendarMath::next_day(&CalendarDate::new(12, 31).unwrap()).unwrap(),
            CalendarDate::new(1, 1).unwrap()
        );
    }

    #[test]
    fn test_next_day_walks_whole_year() {
        let mut date = CalendarDate::new(1, 1).unwrap();
        let mut steps = 0;
        loop {
            date = CalendarMath::next_day(&date).unwrap();
            steps += 1;
            if date == CalendarDate::new(1, 1).unwrap() {
                break;
            }
        }
        assert_eq!(steps, 366);
    }

    #[test]
    fn test_format() {
        assert_eq!(CalendarMath::format(&CalendarDate::new(2, 9).unwrap()), "2/9");
        assert_eq!(CalendarMath::format(&ymd(1809, 2, 12)), "2/12/1809");
    }
}
