//! Single-valued date series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A date-indexed series of scalar returns, such as a portfolio's daily
/// returns. Dates are strictly ascending and every value is finite.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReturnSeries {
    points: Vec<(NaiveDate, f64)>,
}

impl ReturnSeries {
    /// Creates a series, validating ordering and finiteness.
    pub fn new(points: Vec<(NaiveDate, f64)>) -> CoreResult<Self> {
        for pair in points.windows(2) {
            if pair[0].0 >= pair[1].0 {
                return Err(CoreError::UnorderedDates {
                    previous: pair[0].0,
                    next: pair[1].0,
                });
            }
        }
        if let Some(&(date, value)) = points.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CoreError::InvalidValue {
                ticker: "portfolio".to_string(),
                date,
                value,
            });
        }
        Ok(Self { points })
    }

    /// `(date, value)` pairs in date order.
    pub fn points(&self) -> &[(NaiveDate, f64)] {
        &self.points
    }

    /// Values in date order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, v)| v).collect()
    }

    /// Dates in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|&(d, _)| d).collect()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First date, if any.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|&(d, _)| d)
    }

    /// Last date, if any.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|&(d, _)| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn test_accessors() {
        let s = ReturnSeries::new(vec![(d(1), 0.01), (d(2), -0.02)]).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.values(), vec![0.01, -0.02]);
        assert_eq!(s.first_date(), Some(d(1)));
        assert_eq!(s.last_date(), Some(d(2)));
    }

    #[test]
    fn test_rejects_unordered() {
        let err = ReturnSeries::new(vec![(d(2), 0.0), (d(1), 0.0)]).unwrap_err();
        assert!(matches!(err, CoreError::UnorderedDates { .. }));
    }

    #[test]
    fn test_rejects_nan() {
        let err = ReturnSeries::new(vec![(d(1), f64::NAN)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidValue { .. }));
    }

    #[test]
    fn test_empty_default() {
        let s = ReturnSeries::default();
        assert!(s.is_empty());
        assert_eq!(s.first_date(), None);
    }
}
