//! US state codes accepted by the venue and artist forms

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::BookingError;

/// Two-letter codes for the 50 states plus DC, in form order
pub const US_STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Returns true if `code` is one of [`US_STATE_CODES`]
pub fn is_state_code(code: &str) -> bool {
    US_STATE_CODES.contains(&code)
}

/// A validated state code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UsState(&'static str);

impl UsState {
    pub fn code(self) -> &'static str {
        self.0
    }
}

impl FromStr for UsState {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        US_STATE_CODES
            .iter()
            .copied()
            .find(|code| *code == s)
            .map(UsState)
            .ok_or_else(|| BookingError::UnknownState(s.to_string()))
    }
}

impl TryFrom<String> for UsState {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UsState> for String {
    fn from(state: UsState) -> Self {
        state.0.to_string()
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
