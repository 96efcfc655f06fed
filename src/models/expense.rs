//! Expense model
//!
//! An expense is created by the store with its id and timestamp already
//! assigned. Callers only ever supply a `NewExpense` (description and amount).

use chrono::{DateTime, Datelike, Local, Month};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// Fields supplied by the user when adding an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub description: String,
    /// Whole currency units
    pub amount: i64,
}

impl NewExpense {
    pub fn new(description: impl Into<String>, amount: i64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }

    /// Validate user input before it is turned into an expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// When the expense was recorded
    pub date: DateTime<Local>,

    /// What the money was spent on
    pub description: String,

    /// Whole currency units
    pub amount: i64,
}

impl Expense {
    /// Build an expense from user input, stamping the given id and date
    pub fn from_new(new: NewExpense, id: ExpenseId, date: DateTime<Local>) -> Self {
        Self {
            id,
            date,
            description: new.description,
            amount: new.amount,
        }
    }

    /// Check whether the expense was recorded in the given month of any year
    pub fn is_in_month(&self, month: Month) -> bool {
        self.date.month() == month.number_from_month()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.description, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn august_expense() -> Expense {
        let date = Local.with_ymd_and_hms(2024, 8, 15, 12, 30, 0).unwrap();
        Expense::from_new(NewExpense::new("Lunch", 20), ExpenseId::FIRST, date)
    }

    #[test]
    fn test_from_new() {
        let expense = august_expense();
        assert_eq!(expense.id, ExpenseId::FIRST);
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.amount, 20);
    }

    #[test]
    fn test_validation() {
        assert!(NewExpense::new("Lunch", 20).validate().is_ok());
        assert_eq!(
            NewExpense::new("   ", 20).validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_is_in_month() {
        let expense = august_expense();
        assert!(expense.is_in_month(Month::August));
        assert!(!expense.is_in_month(Month::September));
    }

    #[test]
    fn test_serialized_field_names() {
        let expense = august_expense();
        let value = serde_json::to_value(&expense).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["id"], 1);
        assert_eq!(object["description"], "Lunch");
        assert_eq!(object["amount"], 20);
        assert!(object["date"].as_str().unwrap().starts_with("2024-08-15T12:30:00"));
    }

    #[test]
    fn test_deserializes_offset_dates() {
        let json = r#"{"id": 3, "date": "2025-08-10T14:33:12.1234567+02:00", "description": "Taxi", "amount": 15}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.get(), 3);
        assert_eq!(expense.amount, 15);
    }
}
