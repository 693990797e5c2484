use serde_json::Value;

use crate::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The API answered with a JSON body (shape not yet checked).
    ResponseReceived(Value),
    /// The API request failed before a JSON body was available.
    FetchFailed(ApiError),
}
