//! The transition engine.
//!
//! One operation: apply an event to a state, running the transition action,
//! the source exit hook, and the destination enter hook in that order, then
//! advance the cursor. Everything is synchronous.

mod error;
mod machine;

pub use error::TransitionError;
pub use machine::MachineInstance;
