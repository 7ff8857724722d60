//! CSV export/import CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_history_csv, import_csv};
use crate::services::Ledger;

/// Handle `export <path>`
pub fn handle_export_command(ledger: &Ledger, path: &Path) -> TrackerResult<()> {
    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    export_history_csv(ledger.transactions(), BufWriter::new(file))?;
    println!(
        "Exported {} transaction(s) to {}",
        ledger.len(),
        path.display()
    );
    Ok(())
}

/// Handle `import <path>`
pub fn handle_import_command(ledger: &mut Ledger, path: &Path) -> TrackerResult<()> {
    let file = File::open(path).map_err(|e| {
        TrackerError::Export(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let report = import_csv(ledger, file)?;

    println!("Imported {} transaction(s)", report.imported);
    if !report.rejected.is_empty() {
        println!("Skipped {} row(s):", report.rejected.len());
        for row in &report.rejected {
            println!("  line {}: {}", row.line, row.reason);
        }
    }
    Ok(())
}
