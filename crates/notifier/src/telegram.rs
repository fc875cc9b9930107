//! Telegram delivery through a `teloxide` bot.

use std::time::Duration;

use reqwest::Url;
use teloxide::prelude::*;

use homework_common::error::AppError;

use crate::Notifier;

/// Sends messages through a Telegram bot.
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    /// Create a notifier for `token` against the Bot API at `api_url`
    /// (normally `https://api.telegram.org`).
    pub fn new(api_url: &str, token: &str, timeout: Duration) -> Result<Self, AppError> {
        let api_url = Url::parse(api_url)
            .map_err(|e| AppError::Config(format!("TELEGRAM_API_URL is not a valid URL: {}", e)))?;

        let client = teloxide::net::default_reqwest_settings()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build Telegram client: {}", e)))?;

        Ok(Self {
            bot: Bot::with_client(token, client).set_api_url(api_url),
        })
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, chat_id: i64, text: &str) -> Result<(), AppError> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .await
            .map(|_| ())
            .map_err(|e| AppError::Delivery(e.to_string()))
    }
}
