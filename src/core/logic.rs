use crate::core::calculator::expected::validate_expected;
use crate::core::calculator::intervals;
use crate::errors::AppResult;
use crate::input::{RecordTable, records_to_events};
use crate::models::{AggregateResult, Event};
use crate::utils::{round2, secs2hours};

pub struct Core;

impl Core {
    /// Scalar variant: one total, no daily breakdown.
    pub fn total_report(table: &RecordTable, expected: Option<f64>) -> AppResult<AggregateResult> {
        let events = records_to_events(table)?;
        Self::total_from_events(&events, expected)
    }

    /// Daily variant: per-date breakdown, same-day sessions only.
    pub fn daily_report(table: &RecordTable, expected: Option<f64>) -> AppResult<AggregateResult> {
        let events = records_to_events(table)?;
        Self::daily_from_events(&events, expected)
    }

    pub fn total_from_events(
        events: &[Event],
        expected: Option<f64>,
    ) -> AppResult<AggregateResult> {
        let expected_hours = expected.map(validate_expected).transpose()?;
        let total_seconds = intervals::aggregate_total(events);

        Ok(AggregateResult {
            user: first_user(events),
            total_hours: secs2hours(total_seconds),
            daily: Vec::new(),
            expected_hours,
        })
    }

    pub fn daily_from_events(
        events: &[Event],
        expected: Option<f64>,
    ) -> AppResult<AggregateResult> {
        let expected_hours = expected.map(validate_expected).transpose()?;
        let daily = intervals::aggregate_daily(events);

        // sum of the rounded daily values, so the exported table adds up
        let total_hours = round2(daily.iter().map(|d| d.hours()).sum());

        Ok(AggregateResult {
            user: first_user(events),
            total_hours,
            daily,
            expected_hours,
        })
    }
}

/// User label of the earliest record; other rows' users are not checked.
fn first_user(events: &[Event]) -> String {
    events
        .iter()
        .min_by_key(|e| e.timestamp)
        .map(|e| e.user.clone())
        .unwrap_or_default()
}
