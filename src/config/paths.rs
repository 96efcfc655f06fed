//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DIR` environment variable (if set)
//! 2. The current working directory
//!
//! The expenses file itself can be pointed elsewhere with `--file` or
//! `EXPENSE_TRACKER_FILE`, which only affects `expenses_file()`.

use std::path::PathBuf;

use crate::error::ExpenseError;

/// Default name of the persisted expense collection
pub const EXPENSES_FILE_NAME: &str = "expenses.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for settings, data and the audit log
    base_dir: PathBuf,
    /// Explicit location of the expenses file, if overridden
    expenses_override: Option<PathBuf>,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var("EXPENSE_TRACKER_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine current directory: {}", e))
            })?
        };

        Ok(Self {
            base_dir,
            expenses_override: None,
        })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            expenses_override: None,
        }
    }

    /// Point the expenses file at an explicit location
    pub fn with_expenses_file(mut self, path: PathBuf) -> Self {
        self.expenses_override = Some(path);
        self
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the persisted expense collection
    pub fn expenses_file(&self) -> PathBuf {
        self.expenses_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join(EXPENSES_FILE_NAME))
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("expense-tracker.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("expenses.audit.log")
    }

    /// Ensure the base directory and the expenses file's parent exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            ExpenseError::Persistence(format!("Failed to create base directory: {}", e))
        })?;

        if let Some(parent) = self.expenses_file().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Persistence(format!("Failed to create data directory: {}", e))
                })?;
            }
        }

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
