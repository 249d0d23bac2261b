use super::action::Action;
use chrono::{NaiveDate, NaiveDateTime};

/// One row of the input sheet, already parsed.
#[derive(Debug, Clone)]
pub struct Event {
    pub timestamp: NaiveDateTime, // ⇔ "timestamp" column
    pub user: String,             // ⇔ "user" column
    pub action: Action,           // ⇔ "check-in / check-out" column
}

impl Event {
    pub fn new(timestamp: NaiveDateTime, user: impl Into<String>, action: Action) -> Self {
        Self {
            timestamp,
            user: user.into(),
            action,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
