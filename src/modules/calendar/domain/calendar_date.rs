use crate::shared::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A day-of-year selection
///
/// Lookups only ever use month and day. The year is carried along for display
/// and for rolling over December 31st; when it is absent February has 29 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCalendarDate")]
pub struct CalendarDate {
    month: u32,
    day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCalendarDate {
    month: u32,
    day: u32,
    #[serde(default)]
    year: Option<i32>,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = AppError;

    fn try_from(raw: RawCalendarDate) -> AppResult<Self> {
        match raw.year {
            Some(year) => Self::with_year(year, raw.month, raw.day),
            None => Self::new(raw.month, raw.day),
        }
    }
}

impl CalendarDate {
    /// Month/day without a year; February 29th is accepted
    pub fn new(month: u32, day: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidDate(format!(
                "month {} is out of range 1-12",
                month
            )));
        }
        let max_day = Self::days_in_month(month, None);
        if day == 0 || day > max_day {
            return Err(AppError::InvalidDate(format!(
                "day {} is out of range 1-{} for month {}",
                day, max_day, month
            )));
        }
        Ok(Self {
            month,
            day,
            year: None,
        })
    }

    /// Fully qualified date; validated against the real calendar
    pub fn with_year(year: i32, month: u32, day: u32) -> AppResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_naive)
            .ok_or_else(|| {
                AppError::InvalidDate(format!("{}/{}/{} is not a calendar date", month, day, year))
            })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
            year: Some(date.year()),
        }
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        self.year
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Number of days in `month`. Without a year February counts 29 days.
    pub fn days_in_month(month: u32, year: Option<i32>) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => match year {
                Some(year) if NaiveDate::from_ymd_opt(year, 2, 29).is_none() => 28,
                _ => 29,
            },
            _ => 0,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{}/{}/{}", self.month, self.day, year),
            None => write!(f, "{}/{}", self.month, self.day),
        }
    }
}
