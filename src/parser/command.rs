//! Command parsing
//!
//! Turns tokenized input into typed commands. Flag names are matched
//! exactly and case-sensitively; the value of a flag is the token right
//! after it.

use chrono::Month;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, NewExpense};

use super::tokenizer::split_command_line;

pub const DESCRIPTION_FLAG: &str = "--description";
pub const AMOUNT_FLAG: &str = "--amount";
pub const ID_FLAG: &str = "--id";
pub const MONTH_FLAG: &str = "--month";

/// What a summary should total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryRequest {
    /// Every recorded expense
    Overall,
    /// Expenses recorded in this month of any year
    Month(Month),
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(NewExpense),
    List,
    Delete(ExpenseId),
    Summary(SummaryRequest),
    Help,
    Clear,
    Exit,
    /// Blank input
    Empty,
    /// First word is not a known command
    Unknown(String),
}

impl Command {
    /// Parse one raw input line
    ///
    /// The command word is matched case-insensitively; arguments are passed
    /// through untouched.
    pub fn parse(line: &str) -> ExpenseResult<Self> {
        let tokens = split_command_line(line);

        let Some(verb) = tokens.first() else {
            return Ok(Command::Empty);
        };

        let command = match verb.to_lowercase().as_str() {
            "add" => Command::Add(parse_add(&tokens)?),
            "list" => Command::List,
            "delete" => Command::Delete(parse_delete(&tokens)?),
            "summary" => Command::Summary(parse_summary(&tokens)?),
            "help" => Command::Help,
            "clear" => Command::Clear,
            "exit" => Command::Exit,
            _ => Command::Unknown(verb.clone()),
        };

        Ok(command)
    }
}

/// Find the value following `flag`
///
/// Returns `Ok(None)` when the flag is absent and an argument error when the
/// flag is the last token or is directly followed by another flag.
fn find_flag_value<'a>(tokens: &'a [String], flag: &str) -> ExpenseResult<Option<&'a str>> {
    match tokens.iter().position(|t| t == flag) {
        None => Ok(None),
        Some(index) => tokens
            .get(index + 1)
            .filter(|value| !value.starts_with("--"))
            .map(|value| Some(value.as_str()))
            .ok_or_else(|| ExpenseError::missing_argument(flag)),
    }
}

fn require_flag_value<'a>(tokens: &'a [String], flag: &str) -> ExpenseResult<&'a str> {
    find_flag_value(tokens, flag)?.ok_or_else(|| ExpenseError::missing_argument(flag))
}

/// Parse `add --description <text> --amount <integer>`
///
/// Only the description and amount are set; the store assigns id and date.
pub fn parse_add(tokens: &[String]) -> ExpenseResult<NewExpense> {
    let description = require_flag_value(tokens, DESCRIPTION_FLAG)?;
    let amount = require_flag_value(tokens, AMOUNT_FLAG)?;

    let amount = amount
        .parse::<i64>()
        .map_err(|_| ExpenseError::invalid_value(AMOUNT_FLAG, amount, "an integer"))?;

    Ok(NewExpense::new(description, amount))
}

/// Parse `delete --id <integer>`
pub fn parse_delete(tokens: &[String]) -> ExpenseResult<ExpenseId> {
    let value = require_flag_value(tokens, ID_FLAG)?;

    value
        .parse::<ExpenseId>()
        .map_err(|_| ExpenseError::invalid_value(ID_FLAG, value, "a positive integer"))
}

/// Parse `summary` or `summary --month <1-12>`
pub fn parse_summary(tokens: &[String]) -> ExpenseResult<SummaryRequest> {
    if tokens.len() <= 1 {
        return Ok(SummaryRequest::Overall);
    }

    let value = require_flag_value(tokens, MONTH_FLAG)?;
    parse_month(value).map(SummaryRequest::Month)
}

fn parse_month(value: &str) -> ExpenseResult<Month> {
    let invalid = || ExpenseError::invalid_value(MONTH_FLAG, value, "a month number from 1 to 12");

    let number = value.parse::<u8>().map_err(|_| invalid())?;
    Month::try_from(number).map_err(|_| invalid())
}
