//! fintrack - personal income and expense tracker
//!
//! This library provides the core of the fintrack application: an
//! append-only ledger of income and expense entries persisted to a JSON
//! file, a running balance, input validation, and keyword search.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Transactions and money
//! - `storage`: JSON file storage layer
//! - `services`: Validation, balance, search and the `Ledger` context
//! - `display`: Text formatting for terminal output
//! - `export`: CSV export and import
//! - `cli`: CLI command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,no_run
//! use fintrack::services::Ledger;
//!
//! let (mut ledger, _load_error) = Ledger::open("transactions.json");
//! ledger.add_income("50000", "gaji").unwrap();
//! ledger.add_expense("15000", "makan").unwrap();
//! assert!(ledger.add_expense("40000", "belanja").is_err());
//! println!("{}", ledger.current_balance());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{PersistenceError, TrackerError, TrackerResult, ValidationError};
