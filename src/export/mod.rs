//! CSV exchange for the ledger history

pub mod csv;

pub use self::csv::{export_history_csv, import_csv, ImportReport, RejectedRow};
