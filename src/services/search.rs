//! Keyword search over the ledger
//!
//! A linear scan with no index; the ledger is a personal one and small.

use crate::models::Transaction;

/// Does `txn` match an already case-folded, non-empty keyword?
fn matches(txn: &Transaction, keyword: &str) -> bool {
    txn.description().to_lowercase().contains(keyword)
        || txn.kind().as_str().contains(keyword)
        || txn.amount().to_decimal_string().contains(keyword)
}

/// Transactions whose description, type name or amount contains `keyword`
///
/// Matching is case-insensitive. A blank keyword matches everything.
/// Order is preserved.
pub fn filter<'a>(transactions: &'a [Transaction], keyword: &str) -> Vec<&'a Transaction> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return transactions.iter().collect();
    }

    transactions
        .iter()
        .filter(|txn| matches(txn, &keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction::new(TransactionType::Income, Money::from_units(50000), "Gaji Januari"),
            Transaction::new(TransactionType::Expense, Money::from_units(15000), "makan siang"),
            Transaction::new(TransactionType::Expense, Money::from_hundredths(1250), "Jajan"),
        ]
    }

    fn descriptions(found: &[&Transaction]) -> Vec<String> {
        found.iter().map(|t| t.description().to_string()).collect()
    }

    #[test]
    fn test_blank_keyword_returns_everything() {
        let ledger = ledger();
        assert_eq!(filter(&ledger, "").len(), 3);
        assert_eq!(filter(&ledger, "   ").len(), 3);
    }

    #[test]
    fn test_no_match_is_empty() {
        let ledger = ledger();
        assert!(filter(&ledger, "liburan").is_empty());
    }

    #[test]
    fn test_description_case_insensitive() {
        let ledger = ledger();
        assert_eq!(descriptions(&filter(&ledger, "JAJAN")), vec!["Jajan"]);
        assert_eq!(descriptions(&filter(&ledger, "gaji")), vec!["Gaji Januari"]);
    }

    #[test]
    fn test_type_name() {
        let ledger = ledger();
        assert_eq!(
            descriptions(&filter(&ledger, "Expense")),
            vec!["makan siang", "Jajan"]
        );
        assert_eq!(filter(&ledger, "income").len(), 1);
    }

    #[test]
    fn test_amount_rendering() {
        let ledger = ledger();
        assert_eq!(descriptions(&filter(&ledger, "15000")), vec!["makan siang"]);
        assert_eq!(descriptions(&filter(&ledger, "12.5")), vec!["Jajan"]);
        // "5000" appears inside both 50000 and 15000
        assert_eq!(filter(&ledger, "5000").len(), 2);
    }

    #[test]
    fn test_keyword_is_trimmed() {
        let ledger = ledger();
        assert_eq!(filter(&ledger, "  siang ").len(), 1);
    }
}
