//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{
    format_balance, format_history, format_timestamp, format_totals, format_transaction_row,
    type_label,
};
