//! Notification delivery.
//!
//! A `Notifier` performs one raw delivery attempt and reports failures as
//! `AppError::Delivery`. Callers go through [`send_message`], which never
//! fails: delivery problems are logged and the polling loop carries on.

pub mod telegram;

use homework_common::error::AppError;

pub use telegram::TelegramNotifier;

/// A channel able to deliver plain-text messages to a chat.
pub trait Notifier {
    /// Attempt a single delivery of `text` to `chat_id`.
    fn send(&self, chat_id: i64, text: &str) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Deliver `text`, logging the outcome instead of propagating errors.
///
/// Returns `true` when the message was accepted by the channel.
pub async fn send_message<N: Notifier>(notifier: &N, chat_id: i64, text: &str) -> bool {
    match notifier.send(chat_id, text).await {
        Ok(()) => {
            tracing::info!(chat_id, message = %text, "Message sent to Telegram");
            true
        }
        Err(e) => {
            tracing::error!(chat_id, error = %e, "Message was not sent to Telegram");
            false
        }
    }
}
