//! # Reducers
//!
//! A [`Reducer`] folds an action into the next state using a validated [`Cases`] table:
//!
//! - **Dispatch**: if the action's type is a case key, the result is exactly that handler's
//!   return value for `(state, action)`.
//! - **Identity**: any other type (including the sentinel) returns `state` untouched. The
//!   value is moved straight back to the caller, so no clone or rebuild takes place.
//!
//! Reducers are immutable after construction and hold no state of their own. Whoever owns
//! the application state (a store) decides when to call them.
//!
//! ```rust
//! use duck_framework::{Action, Cases, Reducer};
//!
//! let reducer = Reducer::new(
//!     Cases::<i64, i64>::new().on("counter/ADD", |count, action: &Action<i64>| {
//!         count + action.payload.unwrap_or(1)
//!     }),
//!     0,
//! )
//! .unwrap();
//!
//! assert_eq!(reducer.reduce(1, &Action::new("counter/ADD").with_payload(4)), 5);
//! assert_eq!(reducer.reduce(1, &Action::new("counter/UNKNOWN")), 1);
//! assert_eq!(reducer.initial_state(), 0);
//! ```

use crate::action::Action;
use crate::cases::{CaseKey, Cases};
use crate::error::CaseError;
use std::fmt::{self, Debug};
use tracing::trace;

/// A pure `(state, action) -> state` function built from a case mapping and a default state.
pub struct Reducer<S, P = (), M = ()> {
    cases: Cases<S, P, M>,
    default_state: S,
}

impl<S, P, M> Reducer<S, P, M> {
    /// Validates `cases` and builds the reducer.
    ///
    /// Fails with the first [`CaseError`] the keys trigger; nothing is built in that case.
    pub fn new(cases: Cases<S, P, M>, default_state: S) -> Result<Self, CaseError> {
        cases.validate()?;
        Ok(Self {
            cases,
            default_state,
        })
    }

    /// Applies `action` to `state`.
    pub fn reduce(&self, state: S, action: &Action<P, M>) -> S {
        match self.cases.get(action.action_type.as_str()) {
            Some(handler) => {
                trace!(action_type = %action.action_type, "Case matched");
                handler(state, action)
            }
            None => {
                trace!(action_type = %action.action_type, "No matching case");
                state
            }
        }
    }

    /// Applies each action in order, starting from `state`.
    pub fn fold<'a, I>(&self, state: S, actions: I) -> S
    where
        I: IntoIterator<Item = &'a Action<P, M>>,
        P: 'a,
        M: 'a,
    {
        actions
            .into_iter()
            .fold(state, |state, action| self.reduce(state, action))
    }

    pub fn default_state(&self) -> &S {
        &self.default_state
    }

    /// Whether an action of `action_type` would reach a handler.
    pub fn handles(&self, action_type: &str) -> bool {
        self.cases.contains(action_type)
    }

    pub fn case_keys(&self) -> impl Iterator<Item = &CaseKey> {
        self.cases.keys()
    }
}

impl<S: Clone, P, M> Reducer<S, P, M> {
    /// Reducer call with optional arguments.
    ///
    /// A missing `state` is replaced by a clone of the default state, a missing `action` by
    /// [`Action::sentinel`].
    pub fn call(&self, state: Option<S>, action: Option<&Action<P, M>>) -> S {
        let state = state.unwrap_or_else(|| self.default_state.clone());
        match action {
            Some(action) => self.reduce(state, action),
            None => self.reduce(state, &Action::sentinel()),
        }
    }

    /// The state a store starts from: the reducer called with no arguments.
    pub fn initial_state(&self) -> S {
        self.call(None, None)
    }
}

impl<S: Debug, P, M> Debug for Reducer<S, P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reducer")
            .field("cases", &self.cases)
            .field("default_state", &self.default_state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::INVALID_ACTION_TYPE;
    use crate::cases::UNDEFINED_CASE_KEY;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        count: u32,
    }

    fn counter_reducer() -> Reducer<Counter> {
        Reducer::new(
            Cases::new().on("counter/INCREMENT", |state: Counter, _: &Action| Counter {
                count: state.count + 1,
            }),
            Counter { count: 0 },
        )
        .unwrap()
    }

    #[test]
    fn matching_case_runs_its_handler() {
        let reducer = counter_reducer();

        let next = reducer.reduce(Counter { count: 2 }, &Action::new("counter/INCREMENT"));

        assert_eq!(next, Counter { count: 3 });
    }

    #[test]
    fn unknown_type_returns_state_untouched() {
        let reducer = Reducer::<Vec<u8>>::new(Cases::new().on("a", |_, _| Vec::new()), Vec::new())
            .unwrap();
        let state = vec![1, 2, 3];
        let ptr = state.as_ptr();

        let next = reducer.reduce(state, &Action::new("b"));

        // Same allocation: the state was moved through, not rebuilt.
        assert_eq!(next.as_ptr(), ptr);
        assert_eq!(next, [1, 2, 3]);
    }

    #[test]
    fn call_without_arguments_yields_default_state() {
        let reducer = counter_reducer();

        assert_eq!(reducer.call(None, None), Counter { count: 0 });
        assert_eq!(reducer.initial_state(), Counter { count: 0 });
    }

    #[test]
    fn call_without_action_uses_sentinel() {
        let reducer = counter_reducer();

        assert!(!reducer.handles(INVALID_ACTION_TYPE));
        assert_eq!(
            reducer.call(Some(Counter { count: 2 }), None),
            Counter { count: 2 }
        );
    }

    #[test]
    fn call_without_state_starts_from_default() {
        let reducer = counter_reducer();

        let next = reducer.call(None, Some(&Action::new("counter/INCREMENT")));

        assert_eq!(next, Counter { count: 1 });
    }

    #[test]
    fn fold_applies_actions_in_order() {
        let reducer = Reducer::<String, char>::new(
            Cases::new().on("text/PUSH", |mut text: String, action: &Action<char>| {
                text.extend(action.payload);
                text
            }),
            String::new(),
        )
        .unwrap();
        let actions = [
            Action::new("text/PUSH").with_payload('a'),
            Action::new("text/IGNORED").with_payload('x'),
            Action::new("text/PUSH").with_payload('b'),
        ];

        assert_eq!(reducer.fold(String::new(), &actions), "ab");
        assert_eq!(reducer.default_state(), "");
        let keys: Vec<&str> = reducer.case_keys().map(CaseKey::as_str).collect();
        assert_eq!(keys, ["text/PUSH"]);
    }

    #[test]
    fn invalid_mapping_builds_nothing() {
        let result = Reducer::<u32>::new(Cases::new().on(UNDEFINED_CASE_KEY, |s, _| s), 0);

        assert_eq!(result.unwrap_err(), CaseError::AllCasesUndefined);
    }
}
