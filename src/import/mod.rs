use crate::error::Result;
use crate::process::BranchRecord;
use crate::store::TableSink;
use tracing::{error, info};

/// Log identity for rows whose CSV has no IFSC column.
pub const UNKNOWN_IFSC: &str = "Unknown IFSC";

/// What happened to one CSV row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Imported { ifsc: String },
    Failed { ifsc: String, detail: String },
}

/// Per-row outcomes for one run. Inspected for logging only; a failed row
/// never changes control flow.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub outcomes: Vec<RowOutcome>,
}

impl ImportSummary {
    pub fn imported(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RowOutcome::Imported { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.imported()
    }
}

/// Parse `body` as headered CSV and insert every row into `table`.
///
/// A failed insert is logged with the row's IFSC and recorded in the
/// summary, then the loop continues; a single row must never abort the
/// batch. A malformed CSV record, by contrast, propagates and ends the run.
/// Short rows are tolerated: columns without a value simply never reach the
/// normalizer.
pub async fn import_csv(
    body: &str,
    table: &str,
    sink: &(impl TableSink + ?Sized),
) -> Result<ImportSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());
    let headers = reader.headers()?.clone();

    let mut summary = ImportSummary::default();
    for row in reader.records() {
        let row = row?;
        let record = BranchRecord::normalize(headers.iter().zip(row.iter()));
        let ifsc = record.ifsc().unwrap_or(UNKNOWN_IFSC).to_string();

        match sink.insert(table, &record).await {
            Ok(()) => {
                info!(ifsc = %ifsc, "imported row");
                summary.outcomes.push(RowOutcome::Imported { ifsc });
            }
            Err(err) => {
                error!(ifsc = %ifsc, error = %err, "failed to import row");
                summary.outcomes.push(RowOutcome::Failed {
                    ifsc,
                    detail: err.to_string(),
                });
            }
        }
    }
    Ok(summary)
}
