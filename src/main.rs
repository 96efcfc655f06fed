use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use expense_tracker::cli::{
    handle_expense_command, handle_history_command, ExpenseCommands, Shell,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::storage::Storage;
use expense_tracker::ExpenseError;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Single-user command-line expense tracker",
    long_about = "Track expenses from the command line. Run without a command to \
                  start the interactive shell, or pass a command to run it once."
)]
struct Cli {
    /// Path to the expenses file (defaults to expenses.json in the data directory)
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Print diagnostic logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell
    Shell,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show recent entries from the audit log
    History {
        /// Number of entries to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    }
}

/// Exit with 2 for bad input, like clap does for bad arguments, and 1 otherwise
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ExpenseError>() {
        Some(e) if e.is_input_error() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut paths = TrackerPaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_expenses_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            let existed = paths.is_initialized();
            settings.save(&paths)?;
            if existed {
                println!("Settings rewritten at {}", paths.settings_file().display());
            } else {
                println!("Settings written to {}", paths.settings_file().display());
            }
            println!("Expenses will be stored in {}", paths.expenses_file().display());
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no (using defaults)" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Id policy:       {:?}", settings.id_policy);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Some(Commands::History { limit }) => {
            let storage = Storage::new(paths, &settings)?;
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Expense(cmd)) => {
            let mut storage = open_storage(paths, &settings)?;
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        None | Some(Commands::Shell) => {
            let mut storage = open_storage(paths, &settings)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Shell::new(&mut storage, &settings).run(stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}

/// Open storage and load the expenses file so the id counter is seeded
fn open_storage(paths: TrackerPaths, settings: &Settings) -> Result<Storage> {
    let mut storage = Storage::new(paths, settings)?;
    storage.load_all()?;
    Ok(storage)
}
