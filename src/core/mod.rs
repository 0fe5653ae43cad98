//! Core data model for machine definitions.
//!
//! This module contains the pure data side of the crate:
//! - String-interned identifiers (`StateId`, `EventId`)
//! - Side-effect hooks as a named capability (`Hook`)
//! - Immutable machine definitions and their validation (`MachineDef`)
//! - Immutable transition logging (`TransitionLog`)
//!
//! Nothing here executes a transition; that is the engine's job.

mod definition;
mod hook;
mod id;
mod log;

pub use definition::{DefinitionError, MachineDef, StateDef, TransitionDef};
pub use hook::Hook;
pub use id::{EventId, StateId};
pub use log::{TransitionLog, TransitionRecord};
