//! Audit logging for the expense tracker
//!
//! Records every added and deleted expense in an append-only log, one JSON
//! object per line.
//!
//! - `AuditEntry`: a single entry with timestamp, operation, and the expense
//!   before or after the change.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
