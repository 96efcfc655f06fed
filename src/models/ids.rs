//! Strongly-typed expense identifier
//!
//! Ids are positive integers handed out by the store in increasing order.
//! Wrapping them keeps raw counts and amounts from being passed where an id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Identifier of a single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(NonZeroU32);

impl ExpenseId {
    /// The first id handed out by an empty store
    pub const FIRST: ExpenseId = ExpenseId(NonZeroU32::MIN);

    /// Create an id from a raw value, rejecting zero
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Get the underlying integer
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a positive integer id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseExpenseIdError(String);

impl fmt::Display for ParseExpenseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a positive integer id", self.0)
    }
}

impl std::error::Error for ParseExpenseIdError {}

impl FromStr for ExpenseId {
    type Err = ParseExpenseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroU32>()
            .map(Self)
            .map_err(|_| ParseExpenseIdError(s.to_string()))
    }
}
