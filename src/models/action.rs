#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CheckIn,
    CheckOut,
    /// Any other text found in the action column; ignored when pairing.
    Other(String),
}

impl Action {
    /// Match the raw cell text, trimmed and case-insensitive.
    pub fn from_cell(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "check-in" => Action::CheckIn,
            "check-out" => Action::CheckOut,
            _ => Action::Other(normalized),
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, Action::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, Action::CheckOut)
    }
}
