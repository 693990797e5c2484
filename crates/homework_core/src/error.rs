use thiserror::Error;

/// Startup configuration problems. The only fatal error kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .names.join(", "))]
    Missing { names: Vec<&'static str> },
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Failure to obtain a JSON body from the review API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, DNS, timeout).
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    /// The server answered with a non-success status.
    #[error("unexpected http status {code}")]
    HttpStatus { code: u16 },
    /// The body of a successful response was not valid JSON.
    #[error("response body is not valid json: {message}")]
    Decode { message: String },
}

/// The parsed body does not have the documented top-level shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("response is not a mapping")]
    NotAMapping,
    #[error("missing or wrong-typed homeworks")]
    Homeworks,
    #[error("missing cursor")]
    MissingCursor,
    #[error("cursor is not an integer timestamp: {value}")]
    InvalidCursor { value: String },
}

/// A single homework record cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record has no \"{field}\" value")]
    MissingField { field: &'static str },
    #[error("undocumented homework status \"{status}\"")]
    UnknownStatus { status: String },
}

/// Anything that fails a whole cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
