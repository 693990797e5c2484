use serde_json::{Map, Value};

use crate::ShapeError;

/// Opaque API timestamp (Unix seconds) echoed back as `from_date`.
pub type Cursor = i64;

const HOMEWORKS_KEY: &str = "homeworks";
const CURSOR_KEY: &str = "current_date";

/// Top-level shape of a validated API answer.
///
/// Records stay raw so that one malformed entry cannot reject the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub homeworks: Vec<Value>,
    pub cursor: Cursor,
}

/// Checks the documented top-level shape and converts it to [`ApiResponse`].
pub fn validate(raw: Value) -> Result<ApiResponse, ShapeError> {
    let Value::Object(mut map) = raw else {
        return Err(ShapeError::NotAMapping);
    };

    let homeworks = match map.remove(HOMEWORKS_KEY) {
        Some(Value::Array(items)) => items,
        _ => return Err(ShapeError::Homeworks),
    };
    let cursor = read_cursor(&map)?;

    Ok(ApiResponse { homeworks, cursor })
}

fn read_cursor(map: &Map<String, Value>) -> Result<Cursor, ShapeError> {
    let value = map.get(CURSOR_KEY).ok_or(ShapeError::MissingCursor)?;
    match value {
        Value::Number(number) => number.as_i64().ok_or_else(|| ShapeError::InvalidCursor {
            value: number.to_string(),
        }),
        other => Err(ShapeError::InvalidCursor {
            value: other.to_string(),
        }),
    }
}
