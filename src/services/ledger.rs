//! Ledger context
//!
//! `Ledger` is the single owner of the transaction store and the running
//! balance. Front ends borrow it and go through these operations; nothing
//! else mutates the ledger.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{PersistenceError, ValidationError};
use crate::models::{Money, Transaction, TransactionType};
use crate::storage::LedgerStore;

use super::balance::{self, Totals};
use super::search;
use super::validation::validate_entry;

/// Outcome of a successful append
///
/// The transaction is in the ledger either way; `save_error` is set when it
/// could not be written to disk.
#[derive(Debug)]
pub struct Recorded {
    pub transaction: Transaction,
    pub save_error: Option<PersistenceError>,
}

impl Recorded {
    pub fn is_persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

/// The ledger plus its running totals
#[derive(Debug)]
pub struct Ledger {
    store: LedgerStore,
    totals: Totals,
}

impl Ledger {
    /// Create an empty ledger backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: LedgerStore::new(path),
            totals: Totals::default(),
        }
    }

    /// Create a ledger and load it, returning the load error if any
    ///
    /// The ledger is usable either way; on error it starts empty.
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<PersistenceError>) {
        let mut ledger = Self::new(path);
        let error = ledger.load().err();
        (ledger, error)
    }

    /// Reload from disk and recompute the totals from scratch
    pub fn load(&mut self) -> Result<usize, PersistenceError> {
        let result = self.store.load();
        // The store refuses files whose totals overflow
        self.totals = balance::totals(self.store.transactions()).unwrap_or_default();
        result
    }

    pub fn save(&self) -> Result<(), PersistenceError> {
        self.store.save()
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Record an income entry
    pub fn add_income(&mut self, amount: &str, description: &str) -> Result<Recorded, ValidationError> {
        self.record(TransactionType::Income, amount, description)
    }

    /// Record an expense entry; rejected if it would overdraw the balance
    pub fn add_expense(&mut self, amount: &str, description: &str) -> Result<Recorded, ValidationError> {
        self.record(TransactionType::Expense, amount, description)
    }

    /// Validate raw input, then append and persist
    pub fn record(
        &mut self,
        kind: TransactionType,
        amount: &str,
        description: &str,
    ) -> Result<Recorded, ValidationError> {
        let entry = validate_entry(kind, amount, description, self.current_balance())
            .inspect_err(|err| {
                debug!(%kind, error = %err, "entry rejected");
            })?;

        let txn = Transaction::new(entry.kind, entry.amount, entry.description);
        let Some(totals) = self.totals.checked_add(&txn) else {
            let err = ValidationError::TotalOverflow { kind };
            debug!(%kind, error = %err, "entry rejected");
            return Err(err);
        };
        self.totals = totals;
        let save_error = self.store.append(txn.clone()).err();

        info!(
            kind = txn.kind().as_str(),
            amount = %txn.amount(),
            balance = %self.current_balance(),
            persisted = save_error.is_none(),
            "recorded transaction"
        );

        Ok(Recorded {
            transaction: txn,
            save_error,
        })
    }

    pub fn current_balance(&self) -> Money {
        self.totals.balance()
    }

    /// All transactions in the order they were entered
    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    /// Transactions matching `keyword`, in entry order
    pub fn search(&self, keyword: &str) -> Vec<&Transaction> {
        search::filter(self.store.transactions(), keyword)
    }

    /// History in entry order, optionally narrowed by a search keyword
    pub fn ordered_history(&self, filter: Option<&str>) -> Vec<&Transaction> {
        self.search(filter.unwrap_or(""))
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
