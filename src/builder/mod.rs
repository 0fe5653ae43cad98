//! Builder API for ergonomic machine construction.
//!
//! Fluent builders for assembling a [`MachineDef`](crate::core::MachineDef)
//! without hand-writing the transition maps. `build()` runs the same
//! validation as instance construction, so a definition that builds here is
//! guaranteed to validate there.

mod error;
mod machine;
mod state;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use state::StateBuilder;
