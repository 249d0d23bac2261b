//! Required column lookup on a normalized header row.

use crate::errors::{AppError, AppResult};

pub const COL_TIMESTAMP: &str = "timestamp";
pub const COL_USER: &str = "user";
pub const COL_ACTION: &str = "check-in / check-out";

/// Positions of the three required columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub timestamp: usize,
    pub user: usize,
    pub action: usize,
}

pub fn normalize_header(h: &str) -> String {
    h.trim().trim_start_matches('\u{feff}').trim().to_lowercase()
}

impl ColumnMap {
    /// Match headers case-insensitively after trimming.
    /// The first occurrence wins when a name is repeated.
    pub fn resolve(headers: &[String]) -> AppResult<Self> {
        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let find = |name: &str| normalized.iter().position(|h| h == name);

        let timestamp = find(COL_TIMESTAMP);
        let user = find(COL_USER);
        let action = find(COL_ACTION);

        match (timestamp, user, action) {
            (Some(timestamp), Some(user), Some(action)) => Ok(Self {
                timestamp,
                user,
                action,
            }),
            _ => {
                let missing = [
                    (COL_TIMESTAMP, timestamp),
                    (COL_USER, user),
                    (COL_ACTION, action),
                ]
                .iter()
                .filter(|(_, pos)| pos.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
                Err(AppError::MissingColumns(missing))
            }
        }
    }
}
