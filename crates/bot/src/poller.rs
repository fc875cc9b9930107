use std::time::Duration;

use chrono::Utc;

use homework_common::error::AppError;
use homework_common::types::HomeworkRecord;
use homework_engine::{check_response, parse_status};
use homework_notifier::{Notifier, send_message};

use crate::fetcher::ApiClient;

/// Loop-owned mutable state. Lives for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (unix seconds) passed as `from_date` on the next request.
    pub from_time: u64,
    /// Set once the first failure has been reported to the chat.
    pub error_notified: bool,
}

/// What a single polling iteration ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A status change was formatted and handed to the notifier.
    Notified,
    /// The API reported no updated homework.
    Unchanged,
    /// The request or the response validation failed.
    Failed,
}

/// Polls the homework API and relays status changes to one chat.
pub struct StatusPoller<N> {
    api: ApiClient,
    notifier: N,
    chat_id: i64,
    retry_interval: Duration,
    state: PollState,
}

impl<N: Notifier> StatusPoller<N> {
    pub fn new(
        api: ApiClient,
        notifier: N,
        chat_id: i64,
        retry_interval_secs: u64,
        from_time: u64,
    ) -> Self {
        Self {
            api,
            notifier,
            chat_id,
            retry_interval: Duration::from_secs(retry_interval_secs),
            state: PollState {
                from_time,
                error_notified: false,
            },
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Start the polling loop. Runs indefinitely until the task is cancelled.
    pub async fn run(&mut self) {
        tracing::info!(
            endpoint = %self.api.endpoint(),
            chat_id = self.chat_id,
            from_time = self.state.from_time,
            retry_interval_secs = self.retry_interval.as_secs(),
            "Status poller started"
        );

        loop {
            let poll_started_at = unix_now();
            let outcome = self.tick().await;
            tracing::debug!(?outcome, "Poll finished, sleeping");

            tokio::time::sleep(self.retry_interval).await;
            self.advance(poll_started_at);
        }
    }

    /// Run one poll: fetch, validate, and either notify or handle the failure.
    ///
    /// Never touches `from_time`; the caller advances it after sleeping.
    pub async fn tick(&mut self) -> TickOutcome {
        match self.poll().await {
            Ok(Some(record)) => {
                let message = parse_status(&record);
                send_message(&self.notifier, self.chat_id, &message).await;
                TickOutcome::Notified
            }
            Ok(None) => {
                tracing::info!(from_time = self.state.from_time, "No homework status changes");
                TickOutcome::Unchanged
            }
            Err(e) => self.handle_failure(e).await,
        }
    }

    /// Move the request window forward to the start of the last poll.
    pub fn advance(&mut self, poll_started_at: u64) {
        self.state.from_time = poll_started_at;
    }

    async fn poll(&self) -> Result<Option<HomeworkRecord>, AppError> {
        let response = self.api.get_api_answer(self.state.from_time).await?;
        check_response(&response).into_result()
    }

    async fn handle_failure(&mut self, error: AppError) -> TickOutcome {
        if error.is_recoverable() {
            match error.upstream_status() {
                Some(status) => tracing::warn!(status, "Homework API is unavailable"),
                None => tracing::warn!(error = %error, "Homework poll failed"),
            }
        } else {
            tracing::error!(error = %error, "Unexpected error in polling loop");
        }

        let message = format!("Сбой в работе программы: {}", error);
        tracing::error!(already_notified = self.state.error_notified, "{}", message);

        if !self.state.error_notified {
            send_message(&self.notifier, self.chat_id, &message).await;
            self.state.error_notified = true;
        }

        TickOutcome::Failed
    }
}

/// Current unix time in seconds, clamped at zero.
pub fn unix_now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}
