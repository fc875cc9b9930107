use crate::error::AppError;

/// Variables that must be present and non-empty for the bot to start.
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OAuth token for the homework API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: i64,

    /// Polling interval in seconds, also the retry delay after a failure (default: 600)
    pub retry_time_secs: u64,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Per-request HTTP timeout in seconds (default: 30)
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        check_tokens(&lookup)?;

        // check_tokens guarantees the required values are present
        let required = |key: &str| lookup(key).unwrap_or_default();

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN"),
            telegram_token: required("TELEGRAM_TOKEN"),
            telegram_chat_id: required("TELEGRAM_CHAT_ID")
                .trim()
                .parse()
                .map_err(|_| AppError::Config("TELEGRAM_CHAT_ID must be a valid i64".to_string()))?,
            retry_time_secs: lookup("RETRY_TIME")
                .unwrap_or_else(|| "600".to_string())
                .parse()
                .map_err(|_| AppError::Config("RETRY_TIME must be a valid u64".to_string()))?,
            endpoint: lookup("ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: lookup("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            http_timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map_err(|_| AppError::Config("HTTP_TIMEOUT_SECS must be a valid u64".to_string()))?,
        })
    }
}

/// Verify that every required variable is present and non-empty.
///
/// All missing names are reported at once.
pub fn check_tokens<F>(lookup: F) -> Result<(), AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let missing: Vec<&str> = REQUIRED_VARS
        .iter()
        .copied()
        .filter(|key| lookup(*key).is_none_or(|value| value.trim().is_empty()))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    tracing::error!(
        missing = ?missing,
        "Operation will be terminated: required environment variables are missing"
    );
    Err(AppError::Config(format!(
        "missing required environment variables: {}",
        missing.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            ("PRACTICUM_TOKEN", "practicum-secret"),
            ("TELEGRAM_TOKEN", "123:abc"),
            ("TELEGRAM_CHAT_ID", "251755913"),
        ])
    }

    #[test]
    fn test_defaults_applied() {
        let vars = full_env();
        let config = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.practicum_token, "practicum-secret");
        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(config.telegram_chat_id, 251755913);
        assert_eq!(config.retry_time_secs, 600);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let mut vars = full_env();
        vars.insert("RETRY_TIME".into(), "60".into());
        vars.insert("ENDPOINT".into(), "http://localhost:8080/hw".into());
        vars.insert("HTTP_TIMEOUT_SECS".into(), "5".into());

        let config = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.retry_time_secs, 60);
        assert_eq!(config.endpoint, "http://localhost:8080/hw");
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let mut vars = full_env();
        vars.remove("TELEGRAM_TOKEN");

        let err = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("TELEGRAM_TOKEN")));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut vars = full_env();
        vars.insert("PRACTICUM_TOKEN".into(), "   ".into());

        let err = check_tokens(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("PRACTICUM_TOKEN"));
    }

    #[test]
    fn test_all_missing_reported_together() {
        let err = check_tokens(|_| None).unwrap_err();
        let msg = err.to_string();
        for key in REQUIRED_VARS {
            assert!(msg.contains(key), "{msg} should mention {key}");
        }
    }

    #[test]
    fn test_invalid_chat_id() {
        let mut vars = full_env();
        vars.insert("TELEGRAM_CHAT_ID".into(), "not-a-number".into());

        let err = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_invalid_retry_time() {
        let mut vars = full_env();
        vars.insert("RETRY_TIME".into(), "-1".into());

        assert!(AppConfig::from_lookup(|k| vars.get(k).cloned()).is_err());
    }
}
