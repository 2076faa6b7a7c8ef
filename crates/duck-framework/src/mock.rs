//! # Case Recorder & Testing Guide
//!
//! Reducers are pure functions, so most tests simply call them and compare states. What a
//! state comparison cannot show is *which* handler ran, or that none did. [`CaseRecorder`]
//! fills that gap: it wraps handlers so every invocation is logged before the wrapped
//! closure runs.
//!
//! This module is public instead of `#[cfg(test)]` so integration tests and downstream
//! crates can use it too.
//!
//! ## Testing Strategies
//!
//! | Strategy | Use it for |
//! |----------|------------|
//! | Call the reducer, compare states | Handler logic |
//! | `CaseRecorder` | Dispatch: which case ran, how often, with which action |
//! | Serialize actions with `serde_json` | Wire shape of actions handed to other systems |
//!
//! ```rust
//! use duck_framework::mock::CaseRecorder;
//! use duck_framework::{create_duck, Action, Cases};
//!
//! let duck = create_duck("counter", None);
//! let increment = duck.define_type("INCREMENT");
//! let recorder = CaseRecorder::<()>::new();
//!
//! let reducer = duck
//!     .create_reducer(
//!         Cases::new().on(&increment, recorder.record(|count: u32, _: &Action| count + 1)),
//!         0,
//!     )
//!     .unwrap();
//!
//! assert_eq!(reducer.reduce(0, &Action::new("counter/OTHER")), 0);
//! assert_eq!(reducer.reduce(0, &Action::new(&increment)), 1);
//!
//! recorder.verify(&["counter/INCREMENT"]);
//! ```

use crate::action::Action;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared log of handler invocations.
///
/// Clones share the same log, so a recorder can wrap handlers in several mappings.
pub struct CaseRecorder<P = (), M = ()> {
    calls: Arc<Mutex<Vec<Action<P, M>>>>,
}

impl<P, M> CaseRecorder<P, M>
where
    P: Clone + Send + 'static,
    M: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Wraps `handler`, logging each action it receives.
    pub fn record<S, F>(
        &self,
        handler: F,
    ) -> impl Fn(S, &Action<P, M>) -> S + Send + Sync + 'static
    where
        S: 'static,
        F: Fn(S, &Action<P, M>) -> S + Send + Sync + 'static,
    {
        let calls = Arc::clone(&self.calls);
        move |state, action: &Action<P, M>| {
            lock(&calls).push(action.clone());
            handler(state, action)
        }
    }

    /// A logging handler that returns the state unchanged.
    pub fn passthrough<S: 'static>(
        &self,
    ) -> impl Fn(S, &Action<P, M>) -> S + Send + Sync + 'static {
        self.record(|state, _| state)
    }

    /// Every recorded action, oldest first.
    pub fn calls(&self) -> Vec<Action<P, M>> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls_for(&self, action_type: &str) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|action| action.has_type(action_type))
            .count()
    }

    /// Panics unless the recorded action types are exactly `expected`, in order.
    pub fn verify(&self, expected: &[&str]) {
        let recorded: Vec<String> = lock(&self.calls)
            .iter()
            .map(|action| action.action_type.to_string())
            .collect();
        assert_eq!(
            recorded, expected,
            "Recorded handler calls do not match the expected action types"
        );
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}

impl<P, M> Clone for CaseRecorder<P, M> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

impl<P, M> Default for CaseRecorder<P, M>
where
    P: Clone + Send + 'static,
    M: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

// A handler that panicked mid-test must not hide the calls recorded before it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
