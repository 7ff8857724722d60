//! Transaction model
//!
//! A ledger entry is either income or expense. Entries are immutable once
//! created; the on-disk shape is `{type, amount, description, date}`.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// The lowercase name used on disk and matched by search
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parse the on-disk name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    kind: TransactionType,

    /// Always positive; the sign comes from `kind`
    amount: Money,

    description: String,

    /// Local time of entry
    date: NaiveDateTime,
}

impl Transaction {
    /// Create a transaction stamped with the current local time
    pub fn new(kind: TransactionType, amount: Money, description: impl Into<String>) -> Self {
        Self::with_date(kind, amount, description, Local::now().naive_local())
    }

    /// Create a transaction with an explicit timestamp
    pub fn with_date(
        kind: TransactionType,
        amount: Money,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            kind,
            amount,
            description: description.into(),
            date,
        }
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// Effect on the balance: +amount for income, -amount for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind.as_str(),
            self.amount,
            self.description
        )
    }
}
