//! CLI command handlers
//!
//! Bridges parsed commands (from clap or from the interactive shell) with
//! the service layer and the display formatters.

pub mod history;
pub mod shell;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, NewExpense};
use crate::parser::{Command, SummaryRequest};
use crate::services::ExpenseService;
use crate::storage::Storage;

pub use history::{format_history, handle_history_command};
pub use shell::{Flow, Shell};

/// One-shot expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        #[arg(long)]
        description: String,
        /// Amount in whole currency units
        #[arg(long, allow_negative_numbers = true)]
        amount: i64,
    },
    /// List all expenses
    List,
    /// Delete an expense by ID
    Delete {
        /// Expense ID
        #[arg(long)]
        id: ExpenseId,
    },
    /// Show total expenses, optionally for one month
    Summary {
        /// Month number (1-12)
        #[arg(long)]
        month: Option<u8>,
    },
}

impl ExpenseCommands {
    /// Convert clap arguments into the same command the shell would parse
    pub fn into_command(self) -> ExpenseResult<Command> {
        let command = match self {
            ExpenseCommands::Add {
                description,
                amount,
            } => Command::Add(NewExpense::new(description, amount)),
            ExpenseCommands::List => Command::List,
            ExpenseCommands::Delete { id } => Command::Delete(id),
            ExpenseCommands::Summary { month: None } => Command::Summary(SummaryRequest::Overall),
            ExpenseCommands::Summary { month: Some(m) } => {
                let month = chrono::Month::try_from(m).map_err(|_| {
                    ExpenseError::invalid_value(
                        "--month",
                        &m.to_string(),
                        "a month number from 1 to 12",
                    )
                })?;
                Command::Summary(SummaryRequest::Month(month))
            }
        };

        Ok(command)
    }
}

/// Handle a one-shot expense command, printing its output
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let command = cmd.into_command()?;
    if let Some(output) = run_command(storage, settings, command)? {
        println!("{}", output);
    }
    Ok(())
}

/// Run a store command and render its result
///
/// Returns `None` for commands that do not touch the store (help, clear,
/// exit, blank or unknown input); those are the shell's business.
pub fn run_command(
    storage: &mut Storage,
    settings: &Settings,
    command: Command,
) -> ExpenseResult<Option<String>> {
    let mut service = ExpenseService::new(storage);

    let output = match command {
        Command::Add(new) => {
            let id = service.add(new)?;
            format!("Expense added successfully ID: {}", id)
        }
        Command::List => {
            let listing = service.list()?;
            let mut output = String::new();
            if listing.file_missing {
                output.push_str(&format!(
                    "File not found: {}\n",
                    service.file_path().display()
                ));
            }
            output.push_str(&format_expense_table(&listing.expenses, settings));
            output.trim_end().to_string()
        }
        Command::Delete(id) => match service.delete(id)? {
            Some(_) => "Expense deleted successfully".to_string(),
            None => format!("No expense found with ID {}", id),
        },
        Command::Summary(request) => {
            let summary = service.summary(request)?;
            format_summary(&summary, settings)
        }
        Command::Help | Command::Clear | Command::Exit | Command::Empty | Command::Unknown(_) => {
            return Ok(None)
        }
    };

    Ok(Some(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn run(storage: &mut Storage, line: &str) -> ExpenseResult<Option<String>> {
        let command = Command::parse(line)?;
        run_command(storage, &Settings::default(), command)
    }

    #[test]
    fn test_add_and_summary() {
        let (_temp_dir, mut storage) = create_test_storage();

        let output = run(&mut storage, r#"add --description "Lunch" --amount 20"#).unwrap();
        assert_eq!(output.unwrap(), "Expense added successfully ID: 1");

        run(&mut storage, "add --description Bus --amount 3").unwrap();
        let output = run(&mut storage, "summary").unwrap();
        assert_eq!(output.unwrap(), "Total expenses: $23");
    }

    #[test]
    fn test_list_without_file() {
        let (_temp_dir, mut storage) = create_test_storage();

        let output = run(&mut storage, "list").unwrap().unwrap();
        assert!(output.starts_with("File not found:"));
        assert!(output.contains("No expenses recorded."));
    }

    #[test]
    fn test_delete_messages() {
        let (_temp_dir, mut storage) = create_test_storage();
        run(&mut storage, "add --description Bus --amount 3").unwrap();

        let output = run(&mut storage, "delete --id 1").unwrap().unwrap();
        assert_eq!(output, "Expense deleted successfully");

        let output = run(&mut storage, "delete --id 1").unwrap().unwrap();
        assert_eq!(output, "No expense found with ID 1");
    }

    #[test]
    fn test_shell_commands_are_not_handled() {
        let (_temp_dir, mut storage) = create_test_storage();
        assert!(run(&mut storage, "help").unwrap().is_none());
        assert!(run(&mut storage, "bogus").unwrap().is_none());
    }

    #[test]
    fn test_clap_summary_month_out_of_range() {
        let cmd = ExpenseCommands::Summary { month: Some(13) };
        assert!(matches!(cmd.into_command(), Err(ExpenseError::Format(_))));

        let cmd = ExpenseCommands::Summary { month: Some(8) };
        assert_eq!(
            cmd.into_command().unwrap(),
            Command::Summary(SummaryRequest::Month(chrono::Month::August))
        );
    }
}
