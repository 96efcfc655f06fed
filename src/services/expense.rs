//! Expense service
//!
//! Provides the add, list, delete, summary and lookup operations. Every
//! mutation goes through here so ids stay unique and increasing and the
//! file always mirrors the last change.

use std::path::Path;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, NewExpense};
use crate::parser::SummaryRequest;
use crate::storage::{LoadOutcome, Storage};

/// Expenses as read from disk
#[derive(Debug, Clone)]
pub struct ExpenseListing {
    /// Expenses in insertion order
    pub expenses: Vec<Expense>,
    /// True when there was no expenses file to read
    pub file_missing: bool,
}

/// Total for a summary request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub request: SummaryRequest,
    /// Sum of matching amounts, in whole currency units
    pub total: i64,
    /// Number of expenses that matched
    pub count: usize,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense and persist the collection
    ///
    /// The id comes from the store's counter and the date is the current
    /// local time.
    pub fn add(&mut self, new: NewExpense) -> ExpenseResult<ExpenseId> {
        new.validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let id = self.storage.expenses.allocate_id()?;
        let expense = Expense::from_new(new, id, Local::now());

        self.storage.expenses.insert(expense.clone());
        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.remove(id);
            return Err(e);
        }

        if let Err(e) = self.storage.log_create(&expense) {
            warn!(id = %id, error = %e, "expense saved but audit entry was not written");
        }

        info!(id = %id, amount = expense.amount, "expense added");
        Ok(id)
    }

    /// Re-read the expenses file and return its contents
    ///
    /// A missing file is not an error: the listing is empty and flagged.
    pub fn list(&mut self) -> ExpenseResult<ExpenseListing> {
        let outcome = self.storage.expenses.load()?;
        debug!(count = self.storage.expenses.count(), "expenses listed");

        Ok(ExpenseListing {
            expenses: self.storage.expenses.get_all().to_vec(),
            file_missing: outcome == LoadOutcome::Missing,
        })
    }

    /// Delete an expense by ID
    ///
    /// Returns the removed expense, or `None` when no expense has that id.
    /// The file is only rewritten when something was removed.
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let Some((index, expense)) = self.storage.expenses.remove(id) else {
            debug!(id = %id, "no expense to delete");
            return Ok(None);
        };

        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.restore(index, expense);
            return Err(e);
        }

        if let Err(e) = self.storage.log_delete(&expense) {
            warn!(id = %id, error = %e, "expense deleted but audit entry was not written");
        }

        info!(id = %id, "expense deleted");
        Ok(Some(expense))
    }

    /// Total the amounts of all expenses, or of one month across all years
    pub fn summary(&mut self, request: SummaryRequest) -> ExpenseResult<Summary> {
        let listing = self.list()?;

        let matching: Vec<&Expense> = listing
            .expenses
            .iter()
            .filter(|e| match request {
                SummaryRequest::Overall => true,
                SummaryRequest::Month(month) => e.is_in_month(month),
            })
            .collect();

        let total = matching
            .iter()
            .try_fold(0i64, |total, e| total.checked_add(e.amount))
            .ok_or_else(|| {
                ExpenseError::Validation("Total is too large to calculate".to_string())
            })?;

        Ok(Summary {
            request,
            total,
            count: matching.len(),
        })
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.storage.expenses.get(id)
    }

    pub fn file_path(&self) -> &Path {
        self.storage.expenses.path()
    }
}
