//! Expense Tracker - single-user command-line expense tracking
//!
//! This library provides the core functionality for the expense tracker:
//! parsing command lines, keeping the expense collection, and persisting it
//! to a local JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: The expense model and its id type
//! - `parser`: Tokenizer and command parsers
//! - `storage`: JSON file storage layer
//! - `services`: Add, list, delete and summary operations
//! - `audit`: Audit logging of every mutation
//! - `display`: Terminal formatting
//! - `cli`: Interactive shell and one-shot command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{TrackerPaths, Settings};
//! use expense_tracker::models::NewExpense;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let id = ExpenseService::new(&mut storage).add(NewExpense::new("Lunch", 20))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
