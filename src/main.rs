use anyhow::Result;
use branchsync::{config::Config, notify::TelegramNotifier, run::run, store::SupabaseClient};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load config (fatal if incomplete, no notification yet) ───
    let config = Config::from_env()?;

    // ─── 3) build the two client handles once ────────────────────────
    let http = Client::new();
    let sink = SupabaseClient::new(http.clone(), &config.supabase_url, &config.supabase_key);
    let notifier =
        TelegramNotifier::new(http.clone(), &config.telegram_token, &config.telegram_chat_id);

    // ─── 4) fetch → import → notify ──────────────────────────────────
    run(&http, &config, &sink, &notifier).await?;

    info!("all done");
    Ok(())
}
