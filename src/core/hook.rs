//! Side-effect hooks attached to states and transitions.
//!
//! A hook is a named capability rather than a bare closure: the engine's
//! contract ("exactly these three hooks fire, in this order, per transition")
//! is carried by the `Hook` type instead of by convention.

use std::fmt;
use std::sync::Arc;

/// A zero-argument side-effecting operation.
///
/// Hooks run synchronously and return nothing. The engine never catches a
/// hook's panic; it propagates to the caller with the cursor unmodified.
///
/// # Example
///
/// ```rust
/// use fstate::core::Hook;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let count = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&count);
/// let hook = Hook::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// hook.run();
/// hook.run();
/// assert_eq!(count.load(Ordering::SeqCst), 2);
/// ```
#[derive(Clone)]
pub struct Hook(Arc<dyn Fn() + Send + Sync>);

impl Hook {
    /// Create a hook from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Hook(Arc::new(f))
    }

    /// A hook that does nothing when run.
    pub fn noop() -> Self {
        Hook(Arc::new(|| {}))
    }

    /// Run the hook's side effect.
    pub fn run(&self) {
        (self.0)()
    }
}

impl Default for Hook {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}
