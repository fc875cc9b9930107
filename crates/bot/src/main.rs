use std::time::Duration;

use homework_bot::fetcher::ApiClient;
use homework_bot::poller::{StatusPoller, unix_now};
use homework_common::config::AppConfig;
use homework_notifier::TelegramNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "homework_bot=info,homework_engine=info,homework_notifier=info,homework_common=info"
                    .into()
            }),
        )
        .json()
        .init();

    tracing::info!("Homework bot starting...");

    // Missing tokens are logged by check_tokens; exit non-zero without polling
    let config = AppConfig::from_env()?;

    let timeout = Duration::from_secs(config.http_timeout_secs);
    let api = ApiClient::new(config.endpoint.clone(), config.practicum_token.clone(), timeout)?;
    let notifier = TelegramNotifier::new(&config.telegram_api_url, &config.telegram_token, timeout)?;

    let mut poller = StatusPoller::new(
        api,
        notifier,
        config.telegram_chat_id,
        config.retry_time_secs,
        unix_now(),
    );

    // Run until Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("Homework bot stopped.");
    Ok(())
}
