//! Builder for a single state's hooks and transitions.

use crate::core::{EventId, Hook, StateId, TransitionDef};

/// Builder for one state: its identifier, entry/exit hooks, and the
/// transitions leaving it.
///
/// Declared transitions are kept in declaration order so the machine builder
/// can reject duplicate events instead of silently overwriting them.
pub struct StateBuilder {
    id: StateId,
    on_enter: Hook,
    on_exit: Hook,
    transitions: Vec<(EventId, TransitionDef)>,
}

impl StateBuilder {
    /// Start building the state named `id`. Hooks default to no-ops.
    pub fn new(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            on_enter: Hook::noop(),
            on_exit: Hook::noop(),
            transitions: Vec::new(),
        }
    }

    /// Set the hook run when the machine enters this state.
    pub fn on_enter(mut self, hook: Hook) -> Self {
        self.on_enter = hook;
        self
    }

    /// Set the hook run when the machine leaves this state.
    pub fn on_exit(mut self, hook: Hook) -> Self {
        self.on_exit = hook;
        self
    }

    /// Declare that `event` moves this state to `target`, with no action.
    pub fn on(self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.on_with(event, target, Hook::noop())
    }

    /// Declare that `event` moves this state to `target`, running `action`
    /// before the state-change hooks.
    pub fn on_with(
        mut self,
        event: impl Into<EventId>,
        target: impl Into<StateId>,
        action: Hook,
    ) -> Self {
        self.transitions
            .push((event.into(), TransitionDef::new(target, action)));
        self
    }

    pub(crate) fn into_parts(self) -> (StateId, Hook, Hook, Vec<(EventId, TransitionDef)>) {
        (self.id, self.on_enter, self.on_exit, self.transitions)
    }
}
