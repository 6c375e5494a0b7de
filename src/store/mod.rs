use crate::error::{Result, SyncError};
use crate::process::BranchRecord;
use async_trait::async_trait;
use reqwest::Client;

/// Destination for normalized rows. The importer only needs this seam, so
/// tests can swap in an in-memory sink.
#[async_trait]
pub trait TableSink: Send + Sync {
    async fn insert(&self, table: &str, record: &BranchRecord) -> Result<()>;
}

/// Thin client for the Supabase REST interface; one POST per row, no
/// batching or upsert semantics.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(http: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn table_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[async_trait]
impl TableSink for SupabaseClient {
    async fn insert(&self, table: &str, record: &BranchRecord) -> Result<()> {
        let resp = self
            .http
            .post(self.table_endpoint(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| SyncError::Insert(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Insert(format!("{status}: {body}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_endpoint_joins_base_and_table() {
        let client = SupabaseClient::new(Client::new(), "https://abc.supabase.co", "key");
        assert_eq!(
            client.table_endpoint("bank_branches"),
            "https://abc.supabase.co/rest/v1/bank_branches"
        );
    }

    #[test]
    fn table_endpoint_tolerates_trailing_slash() {
        let client = SupabaseClient::new(Client::new(), "https://abc.supabase.co/", "key");
        assert_eq!(
            client.table_endpoint("bank_branches"),
            "https://abc.supabase.co/rest/v1/bank_branches"
        );
    }
}
