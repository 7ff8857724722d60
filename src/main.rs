use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_add_command, handle_balance_command, handle_export_command, handle_history_command,
    handle_import_command,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::logging::{init_tracing, LogTarget};
use fintrack::models::TransactionType;
use fintrack::services::Ledger;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "fintrack records income and expense entries in a JSON ledger, \
                  keeps a running balance, and lets you search your history \
                  from the command line or an interactive terminal UI."
)]
struct Cli {
    /// Ledger file to use instead of the default transactions.json
    #[arg(short, long, global = true, env = "FINTRACK_LEDGER")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Record income
    Income {
        /// Amount (e.g. "50000" or "12.50")
        amount: String,
        /// Description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Record an expense (rejected if it exceeds the balance)
    Expense {
        /// Amount (e.g. "15000" or "12.50")
        amount: String,
        /// Description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Show the current balance with income/expense totals
    Balance,

    /// Show transaction history, newest first
    History {
        /// Only show transactions matching this keyword
        #[arg(short, long)]
        search: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Show every transaction
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
    },

    /// Search descriptions, types and amounts
    Search {
        /// Keyword (case-insensitive)
        keyword: String,
    },

    /// Export history to a CSV file
    Export {
        /// Output path
        path: PathBuf,
    },

    /// Import transactions from a CSV file
    Import {
        /// CSV file with a type,amount,description header
        path: PathBuf,
    },

    /// Create the data directory and write config.json
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?.with_ledger_file(cli.file);
    let settings = Settings::load_or_create(&paths)?;

    let is_tui = matches!(cli.command, Some(Commands::Tui));
    if is_tui {
        paths.ensure_directories()?;
        init_tracing(LogTarget::File(paths.log_file()), &settings.log_level)?;
    } else {
        init_tracing(LogTarget::Stderr, &settings.log_level)?;
    }

    let (mut ledger, load_error) = Ledger::open(paths.ledger_file());

    // The TUI shows this in a popup instead
    if !is_tui {
        if let Some(ref err) = load_error {
            eprintln!("Warning: {}", err);
            eprintln!("Starting with an empty ledger.");
        }
    }

    match cli.command {
        Some(Commands::Tui) => {
            fintrack::tui::run_tui(&mut ledger, &settings, load_error)?;
        }
        Some(Commands::Income {
            amount,
            description,
        }) => {
            handle_add_command(
                &mut ledger,
                &settings,
                TransactionType::Income,
                &amount,
                &description,
            )?;
        }
        Some(Commands::Expense {
            amount,
            description,
        }) => {
            handle_add_command(
                &mut ledger,
                &settings,
                TransactionType::Expense,
                &amount,
                &description,
            )?;
        }
        Some(Commands::Balance) => {
            handle_balance_command(&ledger, &settings)?;
        }
        Some(Commands::History { search, limit, all }) => {
            handle_history_command(&ledger, &settings, search.as_deref(), limit, all)?;
        }
        Some(Commands::Search { keyword }) => {
            handle_history_command(&ledger, &settings, Some(keyword.as_str()), None, true)?;
        }
        Some(Commands::Export { path }) => {
            handle_export_command(&ledger, &path)?;
        }
        Some(Commands::Import { path }) => {
            handle_import_command(&mut ledger, &path)?;
        }
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Wrote settings to {}", paths.settings_file().display());
            println!("Edit it to change the currency symbol or timestamp format.");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Log file (TUI): {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Timestamp format: {}", settings.timestamp_format);
            println!("  History limit:    {}", settings.history_limit);
            println!("  Log level:        {}", settings.log_level);
        }
        None => {
            println!("fintrack - personal income and expense tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack tui' to launch the interactive interface.");
        }
    }

    Ok(())
}
