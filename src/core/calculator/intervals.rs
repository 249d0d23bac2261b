//! Pairing of check-in / check-out events into worked seconds.
//!
//! Both variants are a single fold over the events sorted by timestamp
//! (stable: rows with the same timestamp keep file order). The only state is
//! the pending check-in:
//!
//! - a check-in always replaces the pending one (the older one is lost);
//! - a check-out closes the pending check-in, adding the duration when it is
//!   positive, then clears it whatever the sign;
//! - a check-out with nothing pending is a no-op;
//! - a check-in still pending at the end contributes nothing.
//!
//! The daily variant also requires the check-out to fall on the same
//! calendar date as the check-in. Otherwise the pair is dropped unaccounted.

use crate::models::{Action, DailyTotal, Event};
use crate::utils::time::seconds_between;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Events ordered by timestamp, ties in file order.
pub fn sorted_by_time(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);
    sorted
}

fn note_replaced(previous: Option<NaiveDateTime>, ev: &Event) {
    if let Some(prev) = previous {
        debug!(
            discarded = %prev,
            replaced_by = %ev.timestamp,
            "check-in without check-out discarded"
        );
    }
}

/// Total worked seconds, with no same-day constraint.
pub fn aggregate_total(events: &[Event]) -> f64 {
    let (total, pending) = sorted_by_time(events).into_iter().fold(
        (0.0_f64, None::<NaiveDateTime>),
        |(total, pending), ev| match (&ev.action, pending) {
            (Action::CheckIn, previous) => {
                note_replaced(previous, ev);
                (total, Some(ev.timestamp))
            }
            (Action::CheckOut, Some(start)) => {
                let secs = seconds_between(start, ev.timestamp);
                if secs > 0.0 {
                    (total + secs, None)
                } else {
                    trace!(%start, end = %ev.timestamp, "non-positive session ignored");
                    (total, None)
                }
            }
            (Action::CheckOut, None) => {
                trace!(at = %ev.timestamp, "check-out without check-in ignored");
                (total, None)
            }
            (Action::Other(_), pending) => (total, pending),
        },
    );

    if let Some(open) = pending {
        debug!(%open, "trailing check-in discarded");
    }

    total
}

/// Worked seconds per calendar date, date ascending.
///
/// Only dates with at least one positive same-day session are present.
pub fn aggregate_daily(events: &[Event]) -> Vec<DailyTotal> {
    let (buckets, pending) = sorted_by_time(events).into_iter().fold(
        (
            BTreeMap::<NaiveDate, f64>::new(),
            None::<(NaiveDateTime, NaiveDate)>,
        ),
        |(mut buckets, pending), ev| match (&ev.action, pending) {
            (Action::CheckIn, previous) => {
                note_replaced(previous.map(|(ts, _)| ts), ev);
                (buckets, Some((ev.timestamp, ev.date())))
            }
            (Action::CheckOut, Some((start, day))) if ev.date() == day => {
                let secs = seconds_between(start, ev.timestamp);
                if secs > 0.0 {
                    *buckets.entry(day).or_insert(0.0) += secs;
                } else {
                    trace!(%start, end = %ev.timestamp, "non-positive session ignored");
                }
                (buckets, None)
            }
            (Action::CheckOut, Some((start, _))) => {
                debug!(%start, end = %ev.timestamp, "session crossing midnight dropped");
                (buckets, None)
            }
            (Action::CheckOut, None) => {
                trace!(at = %ev.timestamp, "check-out without check-in ignored");
                (buckets, None)
            }
            (Action::Other(_), pending) => (buckets, pending),
        },
    );

    if let Some((open, _)) = pending {
        debug!(%open, "trailing check-in discarded");
    }

    buckets
        .into_iter()
        .map(|(date, seconds_worked)| DailyTotal {
            date,
            seconds_worked,
        })
        .collect()
}
