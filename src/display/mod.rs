//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_amount, format_expense_table, format_summary, help_text};
