use homework_common::types::HomeworkRecord;

/// Translate a validated homework record into the message sent to the user.
pub fn parse_status(record: &HomeworkRecord) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.name,
        record.status.verdict()
    )
}

#[cfg(test)]
mod tests {
    use homework_common::types::HomeworkStatus;

    use super::*;

    fn record(name: &str, status: HomeworkStatus) -> HomeworkRecord {
        HomeworkRecord {
            name: name.to_string(),
            status,
        }
    }

    #[test]
    fn test_every_status_has_name_and_verdict() {
        for status in HomeworkStatus::ALL {
            let message = parse_status(&record("project_sprint_7", status));
            assert!(message.contains("\"project_sprint_7\""));
            assert!(message.ends_with(status.verdict()));
        }
    }

    #[test]
    fn test_approved_message() {
        assert_eq!(
            parse_status(&record("hw1", HomeworkStatus::Approved)),
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_rejected_message() {
        assert_eq!(
            parse_status(&record("hw_api", HomeworkStatus::Rejected)),
            "Изменился статус проверки работы \"hw_api\". Работа проверена, в ней нашлись ошибки."
        );
    }
}
