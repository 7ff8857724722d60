//! Transaction CLI commands
//!
//! Recording entries, showing the balance, and listing/searching history.

use crate::config::Settings;
use crate::display::{format_balance, format_history, format_totals, format_transaction_row};
use crate::error::{TrackerError, TrackerResult};
use crate::models::TransactionType;
use crate::services::Ledger;

/// Handle `income` / `expense`
///
/// Returns an error for rejected input and for a failed save; in the latter
/// case the entry was still recorded for this run.
pub fn handle_add_command(
    ledger: &mut Ledger,
    settings: &Settings,
    kind: TransactionType,
    amount: &str,
    description: &[String],
) -> TrackerResult<()> {
    let description = description.join(" ");
    let recorded = ledger.record(kind, amount, &description)?;

    println!(
        "Recorded {}",
        format_transaction_row(&recorded.transaction, settings).trim_end()
    );
    println!("{}", format_balance(ledger.current_balance(), settings));

    match recorded.save_error {
        Some(err) => Err(TrackerError::Persistence(err)),
        None => Ok(()),
    }
}

/// Handle `balance`
pub fn handle_balance_command(ledger: &Ledger, settings: &Settings) -> TrackerResult<()> {
    print!("{}", format_totals(&ledger.totals(), settings));
    Ok(())
}

/// Handle `history` and `search`
pub fn handle_history_command(
    ledger: &Ledger,
    settings: &Settings,
    search: Option<&str>,
    limit: Option<usize>,
    all: bool,
) -> TrackerResult<()> {
    let history = ledger.ordered_history(search);
    let limit = if all {
        None
    } else {
        Some(limit.unwrap_or(settings.history_limit))
    };

    if let Some(keyword) = search.filter(|k| !k.trim().is_empty()) {
        println!(
            "{} of {} transactions match '{}'",
            history.len(),
            ledger.len(),
            keyword.trim()
        );
        println!();
    }

    print!("{}", format_history(&history, settings, limit));
    println!();
    println!("{}", format_balance(ledger.current_balance(), settings));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_add_joins_description_words() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("transactions.json"));
        let settings = Settings::default();

        handle_add_command(
            &mut ledger,
            &settings,
            TransactionType::Income,
            "50000",
            &["gaji".to_string(), "januari".to_string()],
        )
        .unwrap();

        assert_eq!(ledger.transactions()[0].description(), "gaji januari");
        assert_eq!(ledger.current_balance(), Money::from_units(50000));
    }

    #[test]
    fn test_add_rejection_is_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("transactions.json"));

        let err = handle_add_command(
            &mut ledger,
            &Settings::default(),
            TransactionType::Expense,
            "10",
            &["kopi".to_string()],
        )
        .unwrap_err();

        assert!(err.is_validation());
        assert!(ledger.is_empty());
    }
}
