//! Expense repository for JSON storage
//!
//! Owns the in-memory expense collection, the id counter, and the
//! `expenses.json` file they are persisted to. The file holds a bare JSON
//! array in insertion order.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::settings::IdPolicy;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Result of reading the expenses file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and held this many expenses
    Loaded(usize),
    /// No file yet; the collection is now empty
    Missing,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: Vec<Expense>,
    /// Next id to hand out; wider than an id so exhaustion is detectable
    next_id: u64,
    id_policy: IdPolicy,
}

impl ExpenseRepository {
    /// Create an empty repository backed by `path`
    pub fn new(path: PathBuf, id_policy: IdPolicy) -> Self {
        Self {
            path,
            data: Vec::new(),
            next_id: u64::from(ExpenseId::FIRST.get()),
            id_policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory collection with the contents of the file
    ///
    /// Under [`IdPolicy::Resume`] the id counter is moved past the highest
    /// persisted id. It never moves backwards.
    pub fn load(&mut self) -> ExpenseResult<LoadOutcome> {
        let Some(expenses) = read_json::<Vec<Expense>, _>(&self.path)? else {
            info!(path = %self.path.display(), "expenses file not found, starting empty");
            self.data.clear();
            return Ok(LoadOutcome::Missing);
        };

        self.data = expenses;

        if self.id_policy == IdPolicy::Resume {
            if let Some(max) = self.data.iter().map(|e| e.id.get()).max() {
                self.next_id = self.next_id.max(u64::from(max) + 1);
            }
        }

        debug!(
            count = self.data.len(),
            next_id = self.next_id,
            "loaded expenses"
        );
        Ok(LoadOutcome::Loaded(self.data.len()))
    }

    /// Overwrite the file with the full collection
    pub fn save(&self) -> ExpenseResult<()> {
        write_json_atomic(&self.path, &self.data)?;
        debug!(count = self.data.len(), path = %self.path.display(), "saved expenses");
        Ok(())
    }

    /// Take the next id from the counter
    pub fn allocate_id(&mut self) -> ExpenseResult<ExpenseId> {
        let id = u32::try_from(self.next_id)
            .ok()
            .and_then(ExpenseId::new)
            .ok_or_else(|| ExpenseError::Validation("No expense ids left to assign".into()))?;

        self.next_id += 1;
        Ok(id)
    }

    /// Append an expense, keeping insertion order
    pub fn insert(&mut self, expense: Expense) {
        self.data.push(expense);
    }

    /// Remove an expense by ID, returning it with its former position
    pub fn remove(&mut self, id: ExpenseId) -> Option<(usize, Expense)> {
        let index = self.data.iter().position(|e| e.id == id)?;
        Some((index, self.data.remove(index)))
    }

    /// Put a removed expense back where it was
    pub fn restore(&mut self, index: usize, expense: Expense) {
        let index = index.min(self.data.len());
        self.data.insert(index, expense);
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.data.iter().find(|e| e.id == id)
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> &[Expense] {
        &self.data
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }
}
