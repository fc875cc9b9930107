use serde::Deserialize;

/// Review status reported by the homework API.
///
/// The set is fixed by the API contract; unknown strings fail to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Human-readable verdict sent to the user for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена, в ней нашлись ошибки.",
        }
    }
}

impl std::fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// The most recent homework entry, validated against the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    /// `homework_name` on the wire; never empty.
    pub name: String,
    pub status: HomeworkStatus,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_code_round_trips_display() {
        for status in HomeworkStatus::ALL {
            let parsed: HomeworkStatus = serde_json::from_value(json!(status.to_string())).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for code in [json!("pending"), json!("Approved"), json!(""), json!(1)] {
            assert!(serde_json::from_value::<HomeworkStatus>(code).is_err());
        }
    }

    #[test]
    fn test_verdicts_are_distinct() {
        let verdicts: std::collections::HashSet<_> =
            HomeworkStatus::ALL.iter().map(|s| s.verdict()).collect();
        assert_eq!(verdicts.len(), 3);
    }
}
