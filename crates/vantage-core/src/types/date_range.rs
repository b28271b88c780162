//! Date ranges for price requests.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A half-open range of calendar dates, `[start, end)`.
///
/// The end date is exclusive, matching how daily-bar providers interpret a
/// request window: asking for `2024-01-02 .. 2024-01-05` yields bars for the
/// 2nd, 3rd and 4th.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range. `start` must not be after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Year-to-date window: January 2nd of `today`'s year up to `today`.
    ///
    /// On January 1st the window is empty (`today .. today`).
    pub fn year_to_date(today: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year(), 1, 2)
            .map_or(today, |jan2| jan2.min(today));
        Self { start, end: today }
    }

    /// First date of the range (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the range (exclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when `date` lies in `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// True when the range holds no dates.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of calendar days covered.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_half_open() {
        let r = DateRange::new(d(2024, 1, 2), d(2024, 1, 5)).unwrap();
        assert!(r.contains(d(2024, 1, 2)));
        assert!(r.contains(d(2024, 1, 4)));
        assert!(!r.contains(d(2024, 1, 5)));
        assert!(!r.contains(d(2024, 1, 1)));
        assert_eq!(r.days(), 3);
    }

    #[test]
    fn test_rejects_inverted() {
        assert!(matches!(
            DateRange::new(d(2024, 2, 1), d(2024, 1, 1)),
            Err(CoreError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_year_to_date() {
        let r = DateRange::year_to_date(d(2025, 6, 30));
        assert_eq!(r.start(), d(2025, 1, 2));
        assert_eq!(r.end(), d(2025, 6, 30));

        let jan1 = DateRange::year_to_date(d(2025, 1, 1));
        assert!(jan1.is_empty());
    }

    #[test]
    fn test_display() {
        let r = DateRange::new(d(2024, 1, 2), d(2024, 3, 1)).unwrap();
        assert_eq!(r.to_string(), "2024-01-02..2024-03-01");
    }
}
