//! # Case Mappings
//!
//! A [`Cases`] table maps action types to the state transitions a reducer runs for them.
//! It is the Rust counterpart of an object literal keyed by action-type constants:
//!
//! ```rust
//! use duck_framework::{Action, Cases};
//!
//! let cases = Cases::<u32>::new()
//!     .on("counter/INCREMENT", |count, _: &Action| count + 1)
//!     .on("counter/RESET", |_, _: &Action| 0);
//!
//! assert_eq!(cases.len(), 2);
//! assert!(cases.validate().is_ok());
//! ```
//!
//! ## The `"undefined"` key
//!
//! Action-type constants are sometimes optional (`Option<ActionType>`), for example when they
//! are looked up from a registry. Using a missing one as a key produces the literal key
//! [`UNDEFINED_CASE_KEY`]. Validation rejects such mappings so the mistake surfaces when the
//! reducer is built, not when the first action silently falls through.

use crate::action::{Action, ActionType};
use crate::error::CaseError;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display};

/// The key an unset action type turns into.
pub const UNDEFINED_CASE_KEY: &str = "undefined";

/// State transition run for a matching action.
pub type CaseFn<S, P = (), M = ()> = Box<dyn Fn(S, &Action<P, M>) -> S + Send + Sync>;

/// Key of a case mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseKey(String);

impl CaseKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_undefined(&self) -> bool {
        self.0 == UNDEFINED_CASE_KEY
    }
}

impl Display for CaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CaseKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CaseKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CaseKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for CaseKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ActionType> for CaseKey {
    fn from(value: ActionType) -> Self {
        Self(value.into_string())
    }
}

impl From<&ActionType> for CaseKey {
    fn from(value: &ActionType) -> Self {
        Self(value.as_str().to_owned())
    }
}

impl From<Option<ActionType>> for CaseKey {
    fn from(value: Option<ActionType>) -> Self {
        value.map_or_else(|| Self::from(UNDEFINED_CASE_KEY), Self::from)
    }
}

impl From<Option<&ActionType>> for CaseKey {
    fn from(value: Option<&ActionType>) -> Self {
        value.map_or_else(|| Self::from(UNDEFINED_CASE_KEY), Self::from)
    }
}

/// Ordered table of action type to handler.
///
/// Keys are unique: inserting a key twice replaces the first handler but keeps the key's
/// original position. Order only matters for validation messages; dispatch is a keyed lookup.
pub struct Cases<S, P = (), M = ()> {
    keys: Vec<CaseKey>,
    handlers: HashMap<CaseKey, CaseFn<S, P, M>>,
}

impl<S, P, M> Cases<S, P, M> {
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Builder form of [`Cases::insert`].
    pub fn on<K, F>(mut self, key: K, handler: F) -> Self
    where
        K: Into<CaseKey>,
        F: Fn(S, &Action<P, M>) -> S + Send + Sync + 'static,
    {
        self.insert(key, handler);
        self
    }

    /// Registers `handler` for `key`, returning the handler it replaced, if any.
    pub fn insert<K, F>(&mut self, key: K, handler: F) -> Option<CaseFn<S, P, M>>
    where
        K: Into<CaseKey>,
        F: Fn(S, &Action<P, M>) -> S + Send + Sync + 'static,
    {
        let key = key.into();
        let previous = self.handlers.insert(key.clone(), Box::new(handler));
        if previous.is_none() {
            self.keys.push(key);
        }
        previous
    }

    pub fn get(&self, action_type: &str) -> Option<&CaseFn<S, P, M>> {
        self.handlers.get(action_type)
    }

    pub fn contains(&self, action_type: &str) -> bool {
        self.get(action_type).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &CaseKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Validates this mapping's own keys. See [`validate_case_keys`].
    pub fn validate(&self) -> Result<(), CaseError> {
        validate_case_keys(self.keys())
    }
}

impl<S, P, M> Default for Cases<S, P, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, P, M> Debug for Cases<S, P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cases").field("keys", &self.keys).finish()
    }
}

/// Checks a sequence of case keys.
///
/// - no keys: [`CaseError::EmptyCaseSet`]
/// - only `"undefined"` keys: [`CaseError::AllCasesUndefined`]
/// - a mix: [`CaseError::SomeCasesUndefined`], listing the other keys in order
///
/// ```rust
/// use duck_framework::{validate_case_keys, CaseError};
///
/// let err = validate_case_keys(["valid", "undefined", "anotherValid"]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "One or more of your action types are undefined. Valid cases are: valid, anotherValid."
/// );
/// assert_eq!(validate_case_keys(Vec::<String>::new()), Err(CaseError::EmptyCaseSet));
/// ```
pub fn validate_case_keys<I, K>(keys: I) -> Result<(), CaseError>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut total = 0;
    let mut valid = Vec::new();
    for key in keys {
        total += 1;
        let key = key.as_ref();
        if key != UNDEFINED_CASE_KEY {
            valid.push(key.to_owned());
        }
    }

    if total == 0 {
        return Err(CaseError::EmptyCaseSet);
    }
    if valid.is_empty() {
        return Err(CaseError::AllCasesUndefined);
    }
    if valid.len() != total {
        return Err(CaseError::SomeCasesUndefined { valid });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keep(state: u32, _: &Action) -> u32 {
        state
    }

    #[test]
    fn reinserting_a_key_keeps_its_position() {
        let mut cases = Cases::<u32>::new().on("a", keep).on("b", keep);

        let replaced = cases.insert("a", |state, _| state + 1);

        assert!(replaced.is_some());
        let keys: Vec<&str> = cases.keys().map(CaseKey::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        let handler = cases.get("a").unwrap();
        assert_eq!(handler(1, &Action::new("a")), 2);
    }

    #[test]
    fn missing_action_type_becomes_undefined_key() {
        let missing: Option<ActionType> = None;

        assert!(CaseKey::from(missing).is_undefined());
        assert_eq!(CaseKey::from(Some(ActionType::from("x/y"))).as_str(), "x/y");
    }

    #[test]
    fn empty_mapping_is_rejected() {
        assert_eq!(Cases::<u32>::new().validate(), Err(CaseError::EmptyCaseSet));
    }

    #[test]
    fn all_undefined_keys_are_rejected() {
        let cases = Cases::<u32>::new().on(None::<ActionType>, keep);

        assert_eq!(cases.validate(), Err(CaseError::AllCasesUndefined));
    }

    #[test]
    fn mixed_keys_report_the_valid_ones() {
        let cases = Cases::<u32>::new()
            .on("valid", keep)
            .on(UNDEFINED_CASE_KEY, keep)
            .on("anotherValid", keep);

        assert_eq!(
            cases.validate(),
            Err(CaseError::SomeCasesUndefined {
                valid: vec!["valid".to_owned(), "anotherValid".to_owned()],
            })
        );
    }
}
