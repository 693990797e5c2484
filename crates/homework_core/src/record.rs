use serde_json::Value;

use crate::{HomeworkStatus, RecordError};

const NAME_FIELD: &str = "homework_name";
const STATUS_FIELD: &str = "status";

/// A homework entry that passed per-record validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    /// Extracts the name and status from a raw API record.
    ///
    /// Other fields the API sends (reviewer comment, dates, ids) are ignored.
    pub fn from_value(raw: &Value) -> Result<Self, RecordError> {
        let name = raw
            .get(NAME_FIELD)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or(RecordError::MissingField { field: NAME_FIELD })?;
        let status = raw
            .get(STATUS_FIELD)
            .and_then(Value::as_str)
            .ok_or(RecordError::MissingField {
                field: STATUS_FIELD,
            })?
            .parse::<HomeworkStatus>()?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }

    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

/// Renders the notification text for one raw homework record.
pub fn parse_status(raw: &Value) -> Result<String, RecordError> {
    HomeworkRecord::from_value(raw).map(|record| record.message())
}
