use crate::error::{Result, SyncError};
use std::env;

/// Everything one run needs, resolved from the environment at startup.
///
/// Variable names are fixed by the existing deployment and must not change.
#[derive(Debug, Clone)]
pub struct Config {
    pub csv_url: String,
    pub supabase_url: String,
    pub supabase_key: String,
    pub table_name: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Config {
    /// All six variables are required; an absent or empty value is a fatal
    /// configuration error raised before any client is constructed.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            csv_url: required("CSV_URL")?,
            supabase_url: required("SUPABASE_URL")?,
            supabase_key: required("SUPABASE_KEY")?,
            table_name: required("SUPABASE_TABLE_NAME")?,
            telegram_token: required("TELEGRAM_BOT_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
        })
    }
}

fn required(name: &'static str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(SyncError::MissingConfig(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_returns_present_value() {
        env::set_var("BRANCHSYNC_TEST_PRESENT", "https://example.com/data.csv");
        let value = required("BRANCHSYNC_TEST_PRESENT").unwrap();
        assert_eq!(value, "https://example.com/data.csv");
        env::remove_var("BRANCHSYNC_TEST_PRESENT");
    }

    #[test]
    fn required_rejects_missing_variable() {
        env::remove_var("BRANCHSYNC_TEST_MISSING");
        let err = required("BRANCHSYNC_TEST_MISSING").unwrap_err();
        assert!(matches!(err, SyncError::MissingConfig("BRANCHSYNC_TEST_MISSING")));
    }

    #[test]
    fn required_rejects_empty_value() {
        env::set_var("BRANCHSYNC_TEST_EMPTY", "");
        let err = required("BRANCHSYNC_TEST_EMPTY").unwrap_err();
        assert!(matches!(err, SyncError::MissingConfig(_)));
        env::remove_var("BRANCHSYNC_TEST_EMPTY");
    }
}
