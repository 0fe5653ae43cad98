//! FState: a minimal finite state machine engine.
//!
//! A machine is described declaratively: named states with entry/exit hooks,
//! and event-triggered transitions with an action hook and a target state.
//! An instance executes one transition at a time, synchronously, running the
//! hooks in a fixed order and reporting the resulting state.
//!
//! # Core Concepts
//!
//! - **Definition**: immutable description of states and transitions,
//!   validated as a whole before any instance exists
//! - **Hook**: a named zero-argument side-effect run by the engine
//! - **Cursor**: the single mutable field tracking an instance's current
//!   state, updated only after every hook of a transition has completed
//!
//! # Example
//!
//! ```rust
//! use fstate::builder::{MachineBuilder, StateBuilder};
//! use fstate::core::Hook;
//! use fstate::engine::MachineInstance;
//!
//! let def = MachineBuilder::new()
//!     .initial("idle")
//!     .state(
//!         StateBuilder::new("idle")
//!             .on_enter(Hook::new(|| println!("entered idle")))
//!             .on("start", "running"),
//!     )
//!     .state(StateBuilder::new("running").on("stop", "idle"))
//!     .build()
//!     .unwrap();
//!
//! let mut machine = MachineInstance::new(def).unwrap();
//! let state = machine.transition(&"idle".into(), &"start".into()).unwrap();
//! assert_eq!(state.as_str(), "running");
//! assert_eq!(machine.current_state(), &state);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, StateBuilder};
pub use core::{DefinitionError, EventId, Hook, MachineDef, StateDef, StateId, TransitionDef};
pub use engine::{MachineInstance, TransitionError};
