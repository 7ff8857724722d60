//! CSV export and import
//!
//! Both directions use the header `type,amount,description,date`. Imported
//! rows go through the normal validation path, so an expense row that would
//! overdraw the balance at that point in the file is rejected.

use std::io::{Read, Write};

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionType};
use crate::services::Ledger;

const HEADER: [&str; 4] = ["type", "amount", "description", "date"];

/// Export transactions to CSV in the order given
pub fn export_history_csv<W: Write>(transactions: &[Transaction], writer: W) -> TrackerResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(HEADER)?;
    for txn in transactions {
        let amount = txn.amount().to_decimal_string();
        let date = txn.date().format("%Y-%m-%dT%H:%M:%S%.f").to_string();
        csv.write_record([
            txn.kind().as_str(),
            amount.as_str(),
            txn.description(),
            date.as_str(),
        ])?;
    }

    csv.flush()
        .map_err(|e| TrackerError::Export(format!("Failed to flush CSV: {}", e)))?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct ImportRow {
    #[serde(rename = "type")]
    kind: String,
    amount: String,
    description: String,
}

/// A row that was not imported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the file, header included
    pub line: usize,
    pub reason: String,
}

/// Result of an import operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub rejected: Vec<RejectedRow>,
}

/// Import rows from CSV into the ledger
///
/// Malformed or invalid rows are skipped and reported. A failure to save
/// the ledger aborts the import; rows recorded so far stay in memory.
pub fn import_csv<R: Read>(ledger: &mut Ledger, reader: R) -> TrackerResult<ImportReport> {
    let mut csv = ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);
    let headers = csv.headers()?.clone();

    let mut report = ImportReport::default();

    for result in csv.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                report.rejected.push(RejectedRow {
                    line: line_of(e.position()),
                    reason: format!("malformed row: {}", e),
                });
                continue;
            }
        };

        // Quoted fields may span lines, so count from the reader's position
        let line = line_of(record.position());
        let reject = |reason: String| RejectedRow { line, reason };

        let row: ImportRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                report.rejected.push(reject(format!("malformed row: {}", e)));
                continue;
            }
        };

        let Some(kind) = TransactionType::parse(&row.kind) else {
            report
                .rejected
                .push(reject(format!("unknown transaction type '{}'", row.kind)));
            continue;
        };

        match ledger.record(kind, &row.amount, &row.description) {
            Ok(recorded) => {
                report.imported += 1;
                if let Some(err) = recorded.save_error {
                    warn!(line, error = %err, "import aborted");
                    return Err(err.into());
                }
            }
            Err(err) => report.rejected.push(reject(err.to_string())),
        }
    }

    info!(
        imported = report.imported,
        rejected = report.rejected.len(),
        "csv import finished"
    );
    Ok(report)
}

fn line_of(position: Option<&::csv::Position>) -> usize {
    position.map_or(0, |p| p.line() as usize)
}
