use crate::config::Config;
use crate::error::{Result, SyncError};
use crate::fetch::download_csv;
use crate::import::{import_csv, ImportSummary};
use crate::notify::Notifier;
use crate::store::TableSink;
use reqwest::Client;
use tracing::{error, info};

pub const SUCCESS_MESSAGE: &str = "CSV import to Supabase completed successfully!";

/// One full run: fetch, import, notify.
///
/// Row-level failures are absorbed inside the importer and do not reach the
/// error notifications; the success message is sent once the loop completes
/// regardless of how many individual rows failed. A notification delivery
/// failure propagates out of here uncaught.
pub async fn run(
    http: &Client,
    config: &Config,
    sink: &(impl TableSink + ?Sized),
    notifier: &(impl Notifier + ?Sized),
) -> Result<()> {
    let outcome = sync_once(http, config, sink).await;
    report(outcome, notifier).await
}

async fn sync_once(
    http: &Client,
    config: &Config,
    sink: &(impl TableSink + ?Sized),
) -> Result<ImportSummary> {
    let body = download_csv(http, &config.csv_url).await?;
    import_csv(&body, &config.table_name, sink).await
}

/// Send the single status message for the run.
async fn report(
    outcome: Result<ImportSummary>,
    notifier: &(impl Notifier + ?Sized),
) -> Result<()> {
    match outcome {
        Ok(summary) => {
            info!(
                imported = summary.imported(),
                failed = summary.failed(),
                "import complete"
            );
            notifier.send(SUCCESS_MESSAGE).await
        }
        Err(err @ SyncError::Download(_)) => {
            let message = format!("Error occurred while downloading or processing CSV: {err}");
            error!("{message}");
            notifier.send(&message).await
        }
        Err(err) => {
            let message = format!("An unexpected error occurred: {err}");
            error!("{message}");
            notifier.send(&message).await
        }
    }
}
