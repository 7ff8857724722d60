//! Entry validation
//!
//! Rules run in a fixed order and the first failure wins:
//! amount, then description, then (expenses only) overdraft.

use crate::error::ValidationError;
use crate::models::{Money, TransactionType};

/// Input that passed every rule, ready to become a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    pub kind: TransactionType,
    pub amount: Money,
    /// Trimmed description
    pub description: String,
}

/// Validate raw user input against the current balance
pub fn validate_entry(
    kind: TransactionType,
    amount: &str,
    description: &str,
    balance: Money,
) -> Result<ValidEntry, ValidationError> {
    let amount = match Money::parse(amount) {
        Ok(amount) if amount.is_positive() => amount,
        _ => return Err(ValidationError::InvalidAmount { kind }),
    };

    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription { kind });
    }

    if kind == TransactionType::Expense && amount > balance {
        return Err(ValidationError::Overdraft { amount, balance });
    }

    Ok(ValidEntry {
        kind,
        amount,
        description: description.to_string(),
    })
}
