//! The transition engine: a validated definition plus a current-state cursor.

use crate::core::{
    DefinitionError, EventId, MachineDef, StateId, TransitionLog, TransitionRecord,
};
use crate::engine::error::TransitionError;
use chrono::Utc;
use tracing::debug;

/// A running machine: an immutable [`MachineDef`] and one mutable cursor.
///
/// The cursor is the single source of truth for the current state. It is
/// exposed only through [`current_state`](Self::current_state) and updated
/// only by [`transition`](Self::transition), as the last step of a fully
/// successful transition.
///
/// Execution is synchronous and single-threaded: `transition` runs to
/// completion before returning, and exclusive access via `&mut self` is the
/// only serialization the engine provides.
///
/// # Example
///
/// ```rust
/// use fstate::builder::{MachineBuilder, StateBuilder};
/// use fstate::engine::MachineInstance;
///
/// let def = MachineBuilder::new()
///     .initial("idle")
///     .state(StateBuilder::new("idle").on("start", "running"))
///     .state(StateBuilder::new("running").on("stop", "idle"))
///     .build()
///     .unwrap();
///
/// let mut machine = MachineInstance::new(def).unwrap();
/// assert_eq!(machine.current_state().as_str(), "idle");
///
/// let next = machine.transition(&"idle".into(), &"start".into()).unwrap();
/// assert_eq!(next.as_str(), "running");
/// assert_eq!(machine.current_state(), &next);
/// ```
#[derive(Debug)]
pub struct MachineInstance {
    def: MachineDef,
    current: StateId,
    log: TransitionLog,
}

impl MachineInstance {
    /// Create an instance with its cursor bound to the definition's initial
    /// state.
    ///
    /// The definition is validated up front: the initial state and every
    /// transition target must be declared. A bad reference is rejected here
    /// as a whole, so it can never surface mid-transition after an action
    /// hook has already run.
    pub fn new(def: MachineDef) -> Result<Self, DefinitionError> {
        def.validate()?;
        let current = def.initial_state().clone();
        Ok(Self {
            def,
            current,
            log: TransitionLog::new(),
        })
    }

    /// The state the cursor currently points at.
    pub fn current_state(&self) -> &StateId {
        &self.current
    }

    /// The machine definition this instance executes.
    pub fn definition(&self) -> &MachineDef {
        &self.def
    }

    /// Log of the transitions this instance has completed.
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// Apply `event` to `state`, returning the new state.
    ///
    /// The order of observable effects is a contract:
    ///
    /// 1. Resolve `state`, its transition for `event`, and the destination
    ///    state. Any lookup failure returns an error before a single hook
    ///    runs, leaving the instance untouched.
    /// 2. Run the transition's action hook.
    /// 3. Run the source state's exit hook.
    /// 4. Run the destination state's enter hook.
    /// 5. Update the cursor to the target and return it.
    ///
    /// Each hook runs exactly once, never skipped or retried. Hooks are not
    /// sandboxed: a panic inside one propagates out with the cursor still on
    /// the old state, and effects of hooks that already ran are not rolled
    /// back.
    pub fn transition(
        &mut self,
        state: &StateId,
        event: &EventId,
    ) -> Result<StateId, TransitionError> {
        let source = self
            .def
            .state(state)
            .ok_or_else(|| TransitionError::UndefinedState {
                state: state.clone(),
            })?;

        let transition =
            source
                .transition(event)
                .ok_or_else(|| TransitionError::UndefinedTransition {
                    state: state.clone(),
                    event: event.clone(),
                })?;

        // Unreachable once new() has validated the definition, but resolved
        // before any hook runs so a bad target can never cause a partial
        // transition.
        let target = transition.target().clone();
        let destination =
            self.def
                .state(&target)
                .ok_or_else(|| TransitionError::UndefinedTarget {
                    state: state.clone(),
                    event: event.clone(),
                    target: target.clone(),
                })?;

        transition.action().run();
        source.on_exit().run();
        destination.on_enter().run();

        debug!(from = %state, event = %event, to = %target, "transition");

        self.log = self.log.record(TransitionRecord {
            from: state.clone(),
            event: event.clone(),
            to: target.clone(),
            timestamp: Utc::now(),
        });
        self.current = target.clone();
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{MachineBuilder, StateBuilder};
    use crate::core::Hook;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type CallLog = Arc<Mutex<Vec<&'static str>>>;

    fn tracer(calls: &CallLog, label: &'static str) -> Hook {
        let calls = Arc::clone(calls);
        Hook::new(move || calls.lock().unwrap().push(label))
    }

    fn idle_running(calls: &CallLog) -> MachineInstance {
        let def = MachineBuilder::new()
            .initial("idle")
            .state(
                StateBuilder::new("idle")
                    .on_enter(tracer(calls, "idle.enter"))
                    .on_exit(tracer(calls, "idle.exit"))
                    .on_with("start", "running", tracer(calls, "start.action")),
            )
            .state(
                StateBuilder::new("running")
                    .on_enter(tracer(calls, "running.enter"))
                    .on_exit(tracer(calls, "running.exit"))
                    .on_with("stop", "idle", tracer(calls, "stop.action")),
            )
            .build()
            .unwrap();
        MachineInstance::new(def).unwrap()
    }

    #[test]
    fn cursor_starts_at_initial_state() {
        let calls: CallLog = Arc::default();
        let machine = idle_running(&calls);

        assert_eq!(machine.current_state().as_str(), "idle");
        // Construction fires no hooks.
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn transition_returns_target_and_moves_cursor() {
        let calls: CallLog = Arc::default();
        let mut machine = idle_running(&calls);

        let next = machine
            .transition(&"idle".into(), &"start".into())
            .unwrap();

        assert_eq!(next.as_str(), "running");
        assert_eq!(machine.current_state(), &next);
    }

    #[test]
    fn hooks_fire_in_contract_order() {
        let calls: CallLog = Arc::default();
        let mut machine = idle_running(&calls);

        machine
            .transition(&"idle".into(), &"start".into())
            .unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            ["start.action", "idle.exit", "running.enter"]
        );
    }

    #[test]
    fn round_trip_fires_both_hook_sequences() {
        let calls: CallLog = Arc::default();
        let mut machine = idle_running(&calls);

        let running = machine
            .transition(&"idle".into(), &"start".into())
            .unwrap();
        assert_eq!(running.as_str(), "running");

        let idle = machine
            .transition(&"running".into(), &"stop".into())
            .unwrap();
        assert_eq!(idle.as_str(), "idle");

        assert_eq!(
            *calls.lock().unwrap(),
            [
                "start.action",
                "idle.exit",
                "running.enter",
                "stop.action",
                "running.exit",
                "idle.enter",
            ]
        );
    }

    #[test]
    fn undefined_state_is_detected() {
        let calls: CallLog = Arc::default();
        let mut machine = idle_running(&calls);

        let err = machine
            .transition(&"nope".into(), &"start".into())
            .unwrap_err();

        assert!(matches!(
            err,
            TransitionError::UndefinedState { ref state } if state.as_str() == "nope"
        ));
    }

    #[test]
    fn undefined_event_is_detected() {
        let calls: CallLog = Arc::default();
        let mut machine = idle_running(&calls);

        let err = machine
            .transition(&"idle".into(), &"go".into())
            .unwrap_err();

        assert!(matches!(
            err,
            TransitionError::UndefinedTransition { ref state, ref event }
                if state.as_str() == "idle" && event.as_str() == "go"
        ));
    }

    #[test]
    fn failed_transition_mutates_nothing() {
        let calls: CallLog = Arc::default();
        let mut machine = idle_running(&calls);

        machine
            .transition(&"idle".into(), &"go".into())
            .unwrap_err();

        assert_eq!(machine.current_state().as_str(), "idle");
        assert!(machine.log().is_empty());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn current_state_requery_is_stable() {
        let calls: CallLog = Arc::default();
        let mut machine = idle_running(&calls);
        machine
            .transition(&"idle".into(), &"start".into())
            .unwrap();

        let first = machine.current_state().clone();
        assert_eq!(machine.current_state(), &first);
        assert_eq!(machine.current_state(), &first);
    }

    #[test]
    fn log_records_successful_transitions_only() {
        let calls: CallLog = Arc::default();
        let mut machine = idle_running(&calls);

        machine
            .transition(&"idle".into(), &"start".into())
            .unwrap();
        machine
            .transition(&"running".into(), &"missing".into())
            .unwrap_err();

        let log = machine.log();
        assert_eq!(log.len(), 1);
        let record = log.last().unwrap();
        assert_eq!(record.from.as_str(), "idle");
        assert_eq!(record.event.as_str(), "start");
        assert_eq!(record.to.as_str(), "running");
    }

    #[test]
    fn invalid_definition_is_rejected_at_construction() {
        let def = MachineDef::new("idle", HashMap::new());

        let err = MachineInstance::new(def).unwrap_err();
        assert!(matches!(err, DefinitionError::UnknownInitialState { .. }));
    }

    #[test]
    fn panicking_hook_leaves_cursor_unmodified() {
        let def = MachineBuilder::new()
            .initial("idle")
            .state(
                StateBuilder::new("idle").on_with(
                    "start",
                    "running",
                    Hook::new(|| panic!("action failed")),
                ),
            )
            .state(StateBuilder::new("running"))
            .build()
            .unwrap();
        let machine = Arc::new(Mutex::new(MachineInstance::new(def).unwrap()));

        let poisoned = Arc::clone(&machine);
        let result = std::panic::catch_unwind(move || {
            poisoned
                .lock()
                .unwrap()
                .transition(&"idle".into(), &"start".into())
        });
        assert!(result.is_err());

        let machine = Arc::try_unwrap(machine)
            .unwrap_or_else(|_| panic!("machine still shared"))
            .into_inner()
            .unwrap_or_else(|e| e.into_inner());
        assert_eq!(machine.current_state().as_str(), "idle");
        assert!(machine.log().is_empty());
    }
}
