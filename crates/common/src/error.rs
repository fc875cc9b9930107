use thiserror::Error;

/// Common error types used across the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Endpoint {endpoint} is unavailable. API status code: {status}")]
    UpstreamStatus { endpoint: String, status: u16 },

    #[error("Request to {endpoint} failed: {source}")]
    UpstreamTransport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed API response: {0}")]
    Shape(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl AppError {
    /// Whether the polling loop may retry after this error on its next iteration.
    ///
    /// Configuration errors only occur at startup and are always fatal.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Config(_) => false,
            AppError::UpstreamStatus { .. }
            | AppError::UpstreamTransport { .. }
            | AppError::Shape(_)
            | AppError::Delivery(_) => true,
        }
    }

    /// HTTP status reported by the homework API, if this is a status failure.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
