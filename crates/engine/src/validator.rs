//! Response validation for the homework statuses endpoint.
//!
//! The API answers with `{"homeworks": [...], "current_date": ...}`, newest
//! homework first. Only the first entry matters: it carries the latest review
//! status. Checks run in a fixed order so the same malformed body always
//! produces the same reason:
//! 1. `homeworks` key present
//! 2. `homeworks` is an array
//! 3. empty array means nothing changed
//! 4. first entry is an object with a non-empty `homework_name`
//! 5. first entry has a `status` from the known enumeration

use serde::Deserialize;
use serde_json::Value;

use homework_common::error::AppError;
use homework_common::types::{HomeworkRecord, HomeworkStatus};

/// Outcome of inspecting one API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseCheck {
    /// The latest homework has a status worth reporting.
    Changed(HomeworkRecord),
    /// No homework was updated since `from_date`.
    Unchanged,
    /// The body does not match the API contract.
    Invalid(String),
}

impl ResponseCheck {
    /// Collapse into a `Result`, turning `Invalid` into `AppError::Shape`.
    pub fn into_result(self) -> Result<Option<HomeworkRecord>, AppError> {
        match self {
            ResponseCheck::Changed(record) => Ok(Some(record)),
            ResponseCheck::Unchanged => Ok(None),
            ResponseCheck::Invalid(reason) => Err(AppError::Shape(reason)),
        }
    }
}

/// Validate an API response and extract the most recent homework.
pub fn check_response(response: &Value) -> ResponseCheck {
    let check = inspect(response);
    if let ResponseCheck::Invalid(reason) = &check {
        tracing::error!(reason = %reason, "API response failed validation");
    }
    check
}

fn inspect(response: &Value) -> ResponseCheck {
    let Some(homeworks) = response.get("homeworks") else {
        return ResponseCheck::Invalid("missing key \"homeworks\"".to_string());
    };

    let Some(homeworks) = homeworks.as_array() else {
        return ResponseCheck::Invalid(format!(
            "\"homeworks\" must be a list, got: {}",
            homeworks
        ));
    };

    let Some(latest) = homeworks.first() else {
        return ResponseCheck::Unchanged;
    };

    if !latest.is_object() {
        return ResponseCheck::Invalid(format!("homework entry must be an object, got: {}", latest));
    }

    let name = match latest.get("homework_name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => name,
        Some(_) => return ResponseCheck::Invalid("\"homework_name\" is empty".to_string()),
        None => return ResponseCheck::Invalid("\"homework_name\" is missing".to_string()),
    };

    let Some(status) = latest.get("status") else {
        return ResponseCheck::Invalid("\"status\" is missing".to_string());
    };

    match HomeworkStatus::deserialize(status) {
        Ok(status) => ResponseCheck::Changed(HomeworkRecord {
            name: name.to_string(),
            status,
        }),
        Err(_) => ResponseCheck::Invalid(format!(
            "unknown status key: {}",
            status.as_str().map(str::to_string).unwrap_or_else(|| status.to_string())
        )),
    }
}
