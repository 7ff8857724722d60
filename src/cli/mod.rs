//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the service layer.

pub mod exchange;
pub mod transaction;

pub use exchange::{handle_export_command, handle_import_command};
pub use transaction::{handle_add_command, handle_balance_command, handle_history_command};
