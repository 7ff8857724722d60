//! Ledger repository for JSON storage
//!
//! Owns the ordered transaction list and the file it is persisted to.
//! The file is a bare JSON array and is rewritten in full on every save.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::PersistenceError;
use crate::models::{Money, Transaction};

use super::file_io::{read_json, write_json_atomic};

/// Repository for the append-only transaction ledger
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    /// Create an empty store backed by `path`; nothing is read until `load`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            transactions: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load transactions from disk
    ///
    /// A missing file yields an empty ledger. On any read or parse failure
    /// the in-memory ledger is reset to empty and the error is returned for
    /// the caller to report; the damaged file is left untouched until the
    /// next save overwrites it.
    pub fn load(&mut self) -> Result<usize, PersistenceError> {
        match self.read_file() {
            Ok(transactions) => {
                info!(
                    path = %self.path.display(),
                    count = transactions.len(),
                    "loaded ledger"
                );
                self.transactions = transactions;
                Ok(self.transactions.len())
            }
            Err(err) => {
                warn!(error = %err, "ledger could not be loaded, starting empty");
                self.transactions.clear();
                Err(err)
            }
        }
    }

    fn read_file(&self) -> Result<Vec<Transaction>, PersistenceError> {
        let transactions: Vec<Transaction> = read_json(&self.path)?;

        if let Some(pos) = transactions.iter().position(|t| !t.amount().is_positive()) {
            return Err(PersistenceError::Corrupt {
                path: self.path.clone(),
                reason: format!("entry {} has a non-positive amount", pos + 1),
            });
        }

        // Income and expense are summed separately, as the balance is
        let (mut income, mut expense) = (Money::zero(), Money::zero());
        for (pos, txn) in transactions.iter().enumerate() {
            let total = if txn.is_income() {
                &mut income
            } else {
                &mut expense
            };
            *total = total
                .checked_add(txn.amount())
                .ok_or_else(|| PersistenceError::Corrupt {
                    path: self.path.clone(),
                    reason: format!("ledger total overflows at entry {}", pos + 1),
                })?;
        }

        Ok(transactions)
    }

    /// Save the full ledger to disk
    pub fn save(&self) -> Result<(), PersistenceError> {
        write_json_atomic(&self.path, &self.transactions).inspect_err(|err| {
            warn!(error = %err, "failed to save ledger");
        })?;
        info!(
            path = %self.path.display(),
            count = self.transactions.len(),
            "saved ledger"
        );
        Ok(())
    }

    /// Append an already-validated transaction and persist
    ///
    /// The transaction stays in memory even when the write fails.
    pub fn append(&mut self, txn: Transaction) -> Result<(), PersistenceError> {
        self.transactions.push(txn);
        self.save()
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
