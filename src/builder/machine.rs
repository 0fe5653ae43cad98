//! Builder for constructing machine definitions.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{MachineDef, StateDef, StateId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Builder for constructing a validated [`MachineDef`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use fstate::builder::{MachineBuilder, StateBuilder};
///
/// let def = MachineBuilder::new()
///     .initial("idle")
///     .state(StateBuilder::new("idle").on("start", "running"))
///     .state(StateBuilder::new("running").on("stop", "idle"))
///     .build()
///     .unwrap();
///
/// assert_eq!(def.initial_state().as_str(), "idle");
/// ```
pub struct MachineBuilder {
    initial: Option<StateId>,
    states: Vec<StateBuilder>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state.
    pub fn state(mut self, state: StateBuilder) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = StateBuilder>) -> Self {
        self.states.extend(states);
        self
    }

    /// Build the definition.
    ///
    /// Rejects missing required fields, duplicate state or event
    /// declarations, and definitions that fail the graph-closure check
    /// (undefined initial state or transition target).
    pub fn build(self) -> Result<MachineDef, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut states = HashMap::new();
        for builder in self.states {
            let (id, on_enter, on_exit, declared) = builder.into_parts();

            let mut transitions = HashMap::new();
            for (event, transition) in declared {
                match transitions.entry(event) {
                    Entry::Vacant(slot) => {
                        slot.insert(transition);
                    }
                    Entry::Occupied(slot) => {
                        return Err(BuildError::DuplicateEvent {
                            state: id,
                            event: slot.key().clone(),
                        });
                    }
                }
            }

            match states.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(StateDef::new(on_enter, on_exit, transitions));
                }
                Entry::Occupied(slot) => {
                    return Err(BuildError::DuplicateState {
                        state: slot.key().clone(),
                    });
                }
            }
        }

        let def = MachineDef::new(initial, states);
        def.validate()?;
        Ok(def)
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DefinitionError;

    #[test]
    fn builder_requires_initial_state() {
        let result = MachineBuilder::new()
            .state(StateBuilder::new("idle"))
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_states() {
        let result = MachineBuilder::new().initial("idle").build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn fluent_api_builds_definition() {
        let def = MachineBuilder::new()
            .initial("idle")
            .state(StateBuilder::new("idle").on("start", "running"))
            .state(StateBuilder::new("running").on("stop", "idle"))
            .build()
            .unwrap();

        assert_eq!(def.initial_state().as_str(), "idle");
        assert!(def.state(&"running".into()).is_some());
    }

    #[test]
    fn add_multiple_states() {
        let def = MachineBuilder::new()
            .initial("red")
            .states([
                StateBuilder::new("red").on("next", "green"),
                StateBuilder::new("green").on("next", "yellow"),
                StateBuilder::new("yellow").on("next", "red"),
            ])
            .build();

        assert!(def.is_ok());
    }

    #[test]
    fn duplicate_state_is_rejected() {
        let result = MachineBuilder::new()
            .initial("idle")
            .state(StateBuilder::new("idle"))
            .state(StateBuilder::new("idle"))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateState { ref state }) if state.as_str() == "idle"
        ));
    }

    #[test]
    fn duplicate_event_is_rejected() {
        let result = MachineBuilder::new()
            .initial("idle")
            .state(
                StateBuilder::new("idle")
                    .on("start", "running")
                    .on("start", "idle"),
            )
            .state(StateBuilder::new("running"))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateEvent { ref event, .. }) if event.as_str() == "start"
        ));
    }

    #[test]
    fn unclosed_definition_is_rejected() {
        let result = MachineBuilder::new()
            .initial("idle")
            .state(StateBuilder::new("idle").on("start", "missing"))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Invalid(DefinitionError::UnknownTarget { .. }))
        ));
    }
}
