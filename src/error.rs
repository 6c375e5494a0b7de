use thiserror::Error;

/// Failure taxonomy for a sync run.
///
/// `Insert` is the only variant that is absorbed locally (per-row
/// skip-and-continue in the importer); everything else surfaces to the
/// orchestrator.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Required environment variable absent or empty. Fatal before any
    /// network activity; no notification is attempted.
    #[error("missing required environment variable `{0}`")]
    MissingConfig(&'static str),

    /// Transport failure or non-success HTTP status while fetching the CSV.
    #[error("download failed: {0}")]
    Download(String),

    /// Malformed CSV payload.
    #[error("csv parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A single row's insert against the storage service failed.
    #[error("insert failed: {0}")]
    Insert(String),

    /// The outbound status message could not be delivered.
    #[error("notification failed: {0}")]
    Notify(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
