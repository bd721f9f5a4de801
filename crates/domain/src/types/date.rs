//! Civil calendar date
//!
//! A date with no time-of-day or timezone component. Arithmetic delegates to
//! [`chrono::NaiveDate`] so month/day overflow is always normalized rather
//! than raised mid-calculation; only genuinely invalid input (e.g. February
//! 30th) is rejected at construction.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{MusterError, Result};

/// A civil date (year, month, day). Totally ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from civil components, rejecting invalid combinations.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self).ok_or_else(|| {
            MusterError::InvalidInput(format!("invalid calendar date {year:04}-{month:02}-{day:02}"))
        })
    }

    /// First day of the given civil month.
    pub fn first_of_month(year: i32, month: u32) -> Result<Self> {
        Self::new(year, month, 1)
    }

    /// Wrap an already-validated chrono date.
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Borrow the underlying chrono date.
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Shift by a signed number of days.
    pub fn add_days(self, days: i64) -> Result<Self> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Self).ok_or_else(|| {
            MusterError::InvalidInput(format!("date arithmetic out of range: {self} + {days} days"))
        })
    }

    /// Shift by a signed number of months, clamping the day of month to the
    /// target month's length (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(self, months: i32) -> Result<Self> {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.map(Self).ok_or_else(|| {
            MusterError::InvalidInput(format!(
                "date arithmetic out of range: {self} + {months} months"
            ))
        })
    }

    /// Day of week with 0 = Sunday, matching the grid's first column.
    pub fn day_of_week(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Number of days in this date's month.
    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// The next calendar day, if representable.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Number of days in the given civil month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(0, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(date(2024, 12, 31) < date(2025, 1, 1));
        assert!(date(2025, 1, 31) < date(2025, 2, 1));
        assert!(date(2025, 3, 9) < date(2025, 3, 10));
        assert_eq!(date(2025, 3, 9), date(2025, 3, 9));
    }

    #[test]
    fn rejects_invalid_components() {
        assert!(CalendarDate::new(2025, 2, 30).is_err());
        assert!(CalendarDate::new(2025, 13, 1).is_err());
        assert!(CalendarDate::new(2025, 0, 1).is_err());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
    }

    #[test]
    fn add_days_crosses_month_and_year_boundaries() {
        assert_eq!(date(2025, 1, 30).add_days(3).unwrap(), date(2025, 2, 2));
        assert_eq!(date(2024, 12, 30).add_days(5).unwrap(), date(2025, 1, 4));
        assert_eq!(date(2025, 3, 1).add_days(-1).unwrap(), date(2025, 2, 28));
    }

    #[test]
    fn add_months_clamps_day_of_month() {
        assert_eq!(date(2025, 1, 31).add_months(1).unwrap(), date(2025, 2, 28));
        assert_eq!(date(2024, 1, 31).add_months(1).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2025, 3, 31).add_months(-1).unwrap(), date(2025, 2, 28));
        assert_eq!(date(2025, 12, 15).add_months(1).unwrap(), date(2026, 1, 15));
    }

    #[test]
    fn day_of_week_is_sunday_based() {
        // 2025-01-05 was a Sunday
        assert_eq!(date(2025, 1, 5).day_of_week(), 0);
        assert_eq!(date(2025, 1, 6).day_of_week(), 1);
        assert_eq!(date(2025, 1, 4).day_of_week(), 6);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn succ_steps_one_day() {
        assert_eq!(date(2024, 12, 31).succ(), Some(date(2025, 1, 1)));
        assert_eq!(date(2025, 2, 28).succ(), Some(date(2025, 3, 1)));
    }

    #[test]
    fn display_is_iso_like() {
        assert_eq!(date(2025, 1, 5).to_string(), "2025-01-05");
    }
}
