//! Core data models for fintrack
//!
//! Transactions and the fixed-point money type they carry.

pub mod money;
pub mod transaction;

pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType};
