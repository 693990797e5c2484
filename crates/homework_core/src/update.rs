use crate::{parse_status, validate, CycleError, Effect, Msg, PollState};

/// Prefix of the message sent to the user when a cycle fails.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Pure cycle step: applies a fetch outcome to state and returns the effects to run.
///
/// A failed cycle leaves the state untouched. A successful one always advances
/// the cursor and notifies at most once, with the last record in list order
/// whose message differs from the last message sent.
pub fn update(mut state: PollState, msg: Msg) -> (PollState, Vec<Effect>) {
    let raw = match msg {
        Msg::ResponseReceived(raw) => raw,
        Msg::FetchFailed(err) => return (state, vec![failure(err.into())]),
    };
    let response = match validate(raw) {
        Ok(response) => response,
        Err(err) => return (state, vec![failure(err.into())]),
    };

    let mut effects = Vec::new();
    let mut latest = None;
    for (index, record) in response.homeworks.iter().enumerate() {
        match parse_status(record) {
            // Repeats must not mask an earlier change in the same batch.
            Ok(message) if state.is_new_message(&message) => latest = Some(message),
            Ok(_) => {}
            Err(error) => effects.push(Effect::RecordSkipped { index, error }),
        }
    }

    if let Some(message) = latest {
        state.remember_message(message.clone());
        effects.push(Effect::Notify { message });
    }
    state.advance_cursor(response.cursor);

    (state, effects)
}

fn failure(error: CycleError) -> Effect {
    let message = format!("{FAILURE_PREFIX}: {error}");
    Effect::ReportFailure { error, message }
}
