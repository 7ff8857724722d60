//! Balance calculation
//!
//! The balance is never stored. It is summed from the ledger on load and
//! then moved incrementally as entries are appended. All sums are checked;
//! `None` means the ledger total no longer fits in `Money`.

use crate::models::{Money, Transaction, TransactionType};

/// Income/expense breakdown of a ledger
///
/// Both sums are non-negative, so `balance()` cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub income_count: usize,
    pub expense_count: usize,
}

impl Totals {
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }

    pub fn count(&self) -> usize {
        self.income_count + self.expense_count
    }

    /// Totals after appending `txn`, or `None` on overflow
    pub fn checked_add(&self, txn: &Transaction) -> Option<Totals> {
        let mut next = *self;
        match txn.kind() {
            TransactionType::Income => {
                next.income = next.income.checked_add(txn.amount())?;
                next.income_count += 1;
            }
            TransactionType::Expense => {
                next.expense = next.expense.checked_add(txn.amount())?;
                next.expense_count += 1;
            }
        }
        Some(next)
    }
}

/// Compute totals for a ledger in one pass
pub fn totals(transactions: &[Transaction]) -> Option<Totals> {
    transactions
        .iter()
        .try_fold(Totals::default(), |acc, txn| acc.checked_add(txn))
}

/// Sum of income minus sum of expense over the whole ledger
pub fn compute_balance(transactions: &[Transaction]) -> Option<Money> {
    totals(transactions).map(|t| t.balance())
}
