//! Command parser
//!
//! Converts one line of user input into a [`Command`]. Tokenizing and flag
//! extraction live here; nothing in this module touches storage.

pub mod command;
pub mod tokenizer;

pub use command::{parse_add, parse_delete, parse_summary, Command, SummaryRequest};
pub use tokenizer::split_command_line;
