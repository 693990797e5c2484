//! Homework core: pure validation, parsing and the poll state machine.
mod config;
mod effect;
mod error;
mod msg;
mod record;
mod response;
mod state;
mod update;
mod verdict;

pub use config::{missing_tokens, Config, REQUIRED_KEYS};
pub use effect::Effect;
pub use error::{ApiError, ConfigError, CycleError, RecordError, ShapeError};
pub use msg::Msg;
pub use record::{parse_status, HomeworkRecord};
pub use response::{validate, ApiResponse, Cursor};
pub use state::PollState;
pub use update::{update, FAILURE_PREFIX};
pub use verdict::HomeworkStatus;

use std::time::Duration;

/// Delay between two consecutive poll cycles.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);
