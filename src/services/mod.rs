//! Service layer for fintrack
//!
//! Business logic on top of the storage layer: validation, the running
//! balance and search, tied together by the `Ledger` context.

pub mod balance;
pub mod ledger;
pub mod search;
pub mod validation;

pub use balance::{compute_balance, Totals};
pub use ledger::{Ledger, Recorded};
pub use validation::{validate_entry, ValidEntry};
