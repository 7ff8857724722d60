//! Transaction display formatting
//!
//! Formats the history, balance and totals for terminal output.

use std::fmt::Write;

use crate::config::Settings;
use crate::models::{Money, Transaction, TransactionType};
use crate::services::Totals;

/// Short label for the transaction type
pub fn type_label(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "+ Income",
        TransactionType::Expense => "- Expense",
    }
}

/// Format a timestamp with the configured format
///
/// Falls back to `YYYY-MM-DD HH:MM:SS` if the configured format is invalid.
pub fn format_timestamp(txn: &Transaction, settings: &Settings) -> String {
    let mut out = String::new();
    if write!(out, "{}", txn.date().format(&settings.timestamp_format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", txn.date().format("%Y-%m-%d %H:%M:%S"));
    }
    out
}

/// Format a single history row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{:<10} {:19} {:>16}  {}",
        type_label(txn.kind()),
        format_timestamp(txn, settings),
        txn.amount().format_with_symbol(&settings.currency_symbol),
        txn.description()
    )
}

/// Format transactions as a history listing, newest first
///
/// `transactions` is in entry order; at most `limit` of the most recent
/// entries are shown.
pub fn format_history(
    transactions: &[&Transaction],
    settings: &Settings,
    limit: Option<usize>,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:19} {:>16}  {}\n",
        "Type", "Date", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    let shown = limit.unwrap_or(transactions.len());
    for txn in transactions.iter().rev().take(shown) {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    if shown < transactions.len() {
        output.push_str(&format!(
            "... {} older transaction(s) not shown\n",
            transactions.len() - shown
        ));
    }

    output
}

/// One-line balance
pub fn format_balance(balance: Money, settings: &Settings) -> String {
    format!(
        "Current balance: {}",
        balance.format_with_symbol(&settings.currency_symbol)
    )
}

/// Balance with the income/expense breakdown
pub fn format_totals(totals: &Totals, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();
    output.push_str(&format_balance(totals.balance(), settings));
    output.push('\n');
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Income:   {:>16}  ({})\n",
        totals.income.format_with_symbol(symbol),
        entries(totals.income_count)
    ));
    output.push_str(&format!(
        "Expense:  {:>16}  ({})\n",
        totals.expense.format_with_symbol(symbol),
        entries(totals.expense_count)
    ));
    output
}

fn entries(count: usize) -> String {
    match count {
        1 => "1 entry".to_string(),
        n => format!("{} entries", n),
    }
}
