use crate::utils::formatting::{round2, secs2hours};
use chrono::NaiveDate;

/// Seconds worked on one calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub seconds_worked: f64,
}

impl DailyTotal {
    pub fn hours(&self) -> f64 {
        secs2hours(self.seconds_worked)
    }
}

/// Result of one aggregation run over a user's file.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub user: String,
    pub total_hours: f64,
    pub daily: Vec<DailyTotal>,
    pub expected_hours: Option<f64>,
}

/// Worked hours compared with the expected target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Balance {
    Overtime(f64),
    Undertime(f64),
    Exact,
}

impl AggregateResult {
    /// `total_hours - expected_hours`, rounded to 2 decimals.
    pub fn delta(&self) -> Option<f64> {
        self.expected_hours
            .map(|expected| round2(self.total_hours - expected))
    }

    /// Missing expectation counts as a target of zero hours.
    pub fn balance(&self) -> Balance {
        let delta = self
            .delta()
            .unwrap_or_else(|| round2(self.total_hours));

        if delta > 0.0 {
            Balance::Overtime(delta)
        } else if delta < 0.0 {
            Balance::Undertime(delta.abs())
        } else {
            Balance::Exact
        }
    }

    /// Sum of the daily buckets (zero for a scalar-total report).
    pub fn breakdown_seconds(&self) -> f64 {
        self.daily.iter().map(|d| d.seconds_worked).sum()
    }
}
