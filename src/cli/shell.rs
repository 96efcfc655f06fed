//! Interactive command shell
//!
//! Reads one command per line, runs it, and reports the outcome. Errors are
//! printed and the loop carries on; only `exit` or end of input stop it.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::settings::Settings;
use crate::display::help_text;
use crate::parser::Command;
use crate::storage::Storage;

use super::run_command;

const BANNER: &str =
    "Expense Tracker - enter a command or \"help\" to list the available commands or \"exit\" to quit: ";

/// ANSI sequence that clears the screen and homes the cursor
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Line-oriented shell over any reader and writer
pub struct Shell<'a> {
    storage: &'a mut Storage,
    settings: &'a Settings,
}

impl<'a> Shell<'a> {
    pub fn new(storage: &'a mut Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Run until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", BANNER)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, out)? == Flow::Exit {
                break;
            }
            out.flush()?;
        }

        Ok(())
    }

    /// Handle a single line of input
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };
        debug!(?command, "parsed command");

        match command {
            Command::Exit => return Ok(Flow::Exit),
            Command::Empty => writeln!(out, "Please enter a command: ")?,
            Command::Help => write!(out, "{}", help_text())?,
            Command::Clear => {
                write!(out, "{}", CLEAR_SCREEN)?;
                writeln!(out, "{}", BANNER)?;
            }
            Command::Unknown(_) => writeln!(out, "Invalid command. Please try again:")?,
            command => match run_command(self.storage, self.settings, command) {
                Ok(Some(output)) => writeln!(out, "{}", output)?,
                Ok(None) => {}
                Err(e) => writeln!(out, "{}", e)?,
            },
        }

        Ok(Flow::Continue)
    }
}
