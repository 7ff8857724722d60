//! Configuration module for fintrack
//!
//! - Path resolution for the settings, ledger and log files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
