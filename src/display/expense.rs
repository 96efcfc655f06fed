//! Expense display formatting
//!
//! Provides utilities for formatting expenses and summaries for terminal
//! display.

use crate::config::settings::Settings;
use crate::models::Expense;
use crate::parser::SummaryRequest;
use crate::services::Summary;

/// Format an amount with the configured currency symbol
pub fn format_amount(amount: i64, currency_symbol: &str) -> String {
    if amount < 0 {
        format!("-{}{}", currency_symbol, amount.unsigned_abs())
    } else {
        format!("{}{}", currency_symbol, amount)
    }
}

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:<5} {:<12} {:<30} {:>10}",
        expense.id.to_string(),
        expense.date.format(&settings.date_format).to_string(),
        truncate(&expense.description, 30),
        format_amount(expense.amount, &settings.currency_symbol)
    )
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<5} {:<12} {:<30} {:>10}\n",
        "ID", "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    if expenses.is_empty() {
        output.push_str("No expenses recorded.\n");
        return output;
    }

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}

/// Format a summary total
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    let total = format_amount(summary.total, &settings.currency_symbol);
    match summary.request {
        SummaryRequest::Overall => format!("Total expenses: {}", total),
        SummaryRequest::Month(month) => {
            format!("Total expenses for {}: {}", month.name(), total)
        }
    }
}

/// List of commands understood by the interactive shell
pub fn help_text() -> &'static str {
    "Here are the available commands:\n\
     help: Show available commands\n\
     add --description \"...\" --amount 30: Add a new expense\n\
     list: Lists all expenses\n\
     delete --id 1: Delete expense by ID\n\
     summary: Show total expenses\n\
     summary --month 8: Show total for a specific month (e.g., 8 = August)\n\
     clear: Clears the console\n\
     exit: Exit the app\n"
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, NewExpense};
    use chrono::{Local, Month, TimeZone};

    fn sample(description: &str, amount: i64) -> Expense {
        Expense::from_new(
            NewExpense::new(description, amount),
            ExpenseId::new(12).unwrap(),
            Local.with_ymd_and_hms(2024, 8, 3, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(20, "$"), "$20");
        assert_eq!(format_amount(-5, "$"), "-$5");
        assert_eq!(format_amount(0, "€"), "€0");
    }

    #[test]
    fn test_format_row() {
        let row = format_expense_row(&sample("Lunch", 20), &Settings::default());
        assert!(row.starts_with("12    2024-08-03"));
        assert!(row.contains("Lunch"));
        assert!(row.ends_with("$20"));
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "x".repeat(40);
        let row = format_expense_row(&sample(&long, 1), &Settings::default());
        assert!(row.contains(&format!("{}...", "x".repeat(27))));
        assert!(!row.contains(&long));
    }

    #[test]
    fn test_empty_table() {
        let table = format_expense_table(&[], &Settings::default());
        assert!(table.starts_with("ID"));
        assert!(table.contains("No expenses recorded."));
    }

    #[test]
    fn test_table_has_row_per_expense() {
        let expenses = vec![sample("A", 1), sample("B", 2)];
        let table = format_expense_table(&expenses, &Settings::default());
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_format_summary() {
        let settings = Settings::default();
        let overall = Summary {
            request: SummaryRequest::Overall,
            total: 35,
            count: 3,
        };
        assert_eq!(format_summary(&overall, &settings), "Total expenses: $35");

        let august = Summary {
            request: SummaryRequest::Month(Month::August),
            total: 30,
            count: 2,
        };
        assert_eq!(
            format_summary(&august, &settings),
            "Total expenses for August: $30"
        );
    }
}
