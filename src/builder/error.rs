//! Build errors for the machine builder.

use crate::core::{DefinitionError, EventId, StateId};
use thiserror::Error;

/// Errors that can occur when building a machine definition.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: StateId },

    #[error("Event '{event}' is declared more than once for state '{state}'")]
    DuplicateEvent { state: StateId, event: EventId },

    #[error(transparent)]
    Invalid(#[from] DefinitionError),
}
