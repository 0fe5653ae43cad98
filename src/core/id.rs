//! Opaque identifiers for states and events.
//!
//! Identifiers are interned strings: cloning shares the underlying
//! allocation, and lookups borrow as `&str`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Name of a state. Unique within a machine definition.
///
/// # Example
///
/// ```rust
/// use fstate::core::StateId;
///
/// let idle = StateId::from("idle");
/// assert_eq!(idle.as_str(), "idle");
/// assert_eq!(idle, StateId::from("idle"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(Arc<str>);

/// Name of an event that may trigger a transition.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Arc<str>);

macro_rules! id_impls {
    ($name:ident) => {
        impl $name {
            /// View the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(Arc::from(s))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(Arc::from(s.as_str()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_impls!(StateId);
id_impls!(EventId);
