//! Declarative machine definitions.
//!
//! A definition is pure data: states with entry/exit hooks and a mapping
//! from events to transitions. Definitions are immutable once built; the
//! engine holds one and never modifies it.

use super::hook::Hook;
use super::id::{EventId, StateId};
use std::collections::HashMap;
use thiserror::Error;

/// Structural validation failures for a machine definition.
///
/// Raised by [`MachineDef::validate`] before any instance exists, so a bad
/// reference can never surface mid-transition after hooks have already run.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Initial state '{state}' is not defined")]
    UnknownInitialState { state: StateId },

    #[error("Transition '{event}' from state '{state}' targets undefined state '{target}'")]
    UnknownTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}

/// An event-triggered move to a target state, with an action hook that
/// runs before the state-change hooks.
#[derive(Clone, Debug)]
pub struct TransitionDef {
    target: StateId,
    action: Hook,
}

impl TransitionDef {
    /// Create a transition to `target` with the given action hook.
    pub fn new(target: impl Into<StateId>, action: Hook) -> Self {
        Self {
            target: target.into(),
            action,
        }
    }

    /// The state this transition moves to.
    pub fn target(&self) -> &StateId {
        &self.target
    }

    /// The action hook run when this transition fires.
    pub fn action(&self) -> &Hook {
        &self.action
    }
}

/// A named state: entry/exit hooks plus the transitions leaving it.
#[derive(Clone, Debug, Default)]
pub struct StateDef {
    on_enter: Hook,
    on_exit: Hook,
    transitions: HashMap<EventId, TransitionDef>,
}

impl StateDef {
    /// Create a state with the given hooks and transition table.
    pub fn new(on_enter: Hook, on_exit: Hook, transitions: HashMap<EventId, TransitionDef>) -> Self {
        Self {
            on_enter,
            on_exit,
            transitions,
        }
    }

    /// Hook run when the machine enters this state.
    pub fn on_enter(&self) -> &Hook {
        &self.on_enter
    }

    /// Hook run when the machine leaves this state.
    pub fn on_exit(&self) -> &Hook {
        &self.on_exit
    }

    /// Look up the transition for `event`, if this state declares one.
    pub fn transition(&self, event: &EventId) -> Option<&TransitionDef> {
        self.transitions.get(event)
    }

    /// Iterate over declared (event, transition) pairs. Order is unspecified.
    pub fn transitions(&self) -> impl Iterator<Item = (&EventId, &TransitionDef)> {
        self.transitions.iter()
    }
}

/// A complete machine description: the initial state and every declared state.
///
/// # Example
///
/// ```rust
/// use fstate::core::{Hook, MachineDef, StateDef, TransitionDef};
/// use std::collections::HashMap;
///
/// let mut idle = HashMap::new();
/// idle.insert("start".into(), TransitionDef::new("running", Hook::noop()));
/// let mut running = HashMap::new();
/// running.insert("stop".into(), TransitionDef::new("idle", Hook::noop()));
///
/// let mut states = HashMap::new();
/// states.insert("idle".into(), StateDef::new(Hook::noop(), Hook::noop(), idle));
/// states.insert("running".into(), StateDef::new(Hook::noop(), Hook::noop(), running));
///
/// let def = MachineDef::new("idle", states);
/// assert!(def.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct MachineDef {
    initial: StateId,
    states: HashMap<StateId, StateDef>,
}

impl MachineDef {
    /// Assemble a definition from its parts. No validation happens here;
    /// call [`validate`](Self::validate) or construct an instance to check it.
    pub fn new(initial: impl Into<StateId>, states: HashMap<StateId, StateDef>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// The state an instance starts in.
    pub fn initial_state(&self) -> &StateId {
        &self.initial
    }

    /// Look up a state by identifier.
    pub fn state(&self, id: &StateId) -> Option<&StateDef> {
        self.states.get(id)
    }

    /// Iterate over declared (id, state) pairs. Order is unspecified.
    pub fn states(&self) -> impl Iterator<Item = (&StateId, &StateDef)> {
        self.states.iter()
    }

    /// Graph-closure check: the initial state and every transition target
    /// must name a declared state.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if !self.states.contains_key(&self.initial) {
            return Err(DefinitionError::UnknownInitialState {
                state: self.initial.clone(),
            });
        }

        for (id, state) in &self.states {
            for (event, transition) in state.transitions() {
                if !self.states.contains_key(transition.target()) {
                    return Err(DefinitionError::UnknownTarget {
                        state: id.clone(),
                        event: event.clone(),
                        target: transition.target().clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
