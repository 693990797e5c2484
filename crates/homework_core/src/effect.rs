use crate::{CycleError, RecordError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A status message differing from the last one sent.
    Notify { message: String },
    /// The cycle failed; log it and tell the user.
    ReportFailure { error: CycleError, message: String },
    /// One record could not be rendered; log only.
    RecordSkipped { index: usize, error: RecordError },
}
