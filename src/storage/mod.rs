//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail that accompanies every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, LoadOutcome};
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;
use crate::models::Expense;

/// Main storage coordinator
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths, settings: &Settings) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file(), settings.id_policy),
            audit,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<LoadOutcome, ExpenseError> {
        self.expenses.load()
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an added expense in the audit log
    pub fn log_create(&self, expense: &Expense) -> Result<(), ExpenseError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(expense)),
            None => Ok(()),
        }
    }

    /// Record a deleted expense in the audit log
    pub fn log_delete(&self, expense: &Expense) -> Result<(), ExpenseError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(expense)),
            None => Ok(()),
        }
    }
}
