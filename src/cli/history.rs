//! Audit history command
//!
//! Reads the audit log back and prints the most recent entries.

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Render the last `limit` audit entries, oldest first
pub fn format_history(storage: &Storage, limit: usize) -> ExpenseResult<String> {
    let Some(logger) = storage.audit() else {
        return Ok("Audit logging is disabled.".to_string());
    };

    let total = logger.entry_count()?;
    if total == 0 {
        return Ok(format!("No audit entries in {}", logger.path().display()));
    }

    let entries = logger.read_recent(limit)?;
    let mut output = format!(
        "Showing {} of {} entries from {}\n",
        entries.len(),
        total,
        logger.path().display()
    );
    for entry in &entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }

    Ok(output.trim_end().to_string())
}

/// Handle the one-shot `history` command
pub fn handle_history_command(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    println!("{}", format_history(storage, limit)?);
    Ok(())
}
