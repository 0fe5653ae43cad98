//! Runtime transition errors.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors raised while applying an event to a state.
///
/// All variants signal a structurally invalid input against the machine
/// definition: a malformed definition or a caller passing a stale or foreign
/// identifier. None of them leave the instance mutated.
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("State '{state}' is not defined")]
    UndefinedState { state: StateId },

    #[error("Event '{event}' is not a valid event for state '{state}'")]
    UndefinedTransition { state: StateId, event: EventId },

    #[error("Transition '{event}' from state '{state}' targets undefined state '{target}'")]
    UndefinedTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}
