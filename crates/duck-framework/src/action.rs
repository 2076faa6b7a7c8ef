//! # Actions & Action Creators
//!
//! An [`Action`] is plain data describing an intent to change state. It follows the
//! flux-standard-action shape: a required `type`, plus optional `payload` and `meta`, and an
//! `error` flag.
//!
//! Actions are not built by hand in application code. A duck hands out an
//! [`ActionCreator`] per action type, and the creator stamps out actions with the right type
//! and error flag every time it is called.
//!
//! ```rust
//! use duck_framework::create_duck;
//!
//! let duck = create_duck("todos", Some("app"));
//! let added = duck.create_action::<u32, ()>(duck.define_type("ADDED"));
//!
//! let action = added.with_payload(7);
//! assert_eq!(action.action_type, "app/todos/ADDED");
//! assert_eq!(action.payload, Some(7));
//! assert!(!action.error);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;

/// Reserved type carried by the sentinel action.
///
/// A reducer invoked without an action uses [`Action::sentinel`], whose type is this value.
/// It is never expected to appear as a case key.
pub const INVALID_ACTION_TYPE: &str = "@@INVALID";

/// Namespaced, slash-delimited action type identifier (e.g. `app/duck/ACTION`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionType(String);

impl ActionType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ActionType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActionType {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ActionType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&ActionType> for ActionType {
    fn from(value: &ActionType) -> Self {
        value.clone()
    }
}

impl PartialEq<str> for ActionType {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ActionType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A flux-standard action.
///
/// `P` is the payload type and `M` the meta type; both default to `()` for actions that
/// carry nothing. Two actions are equal when all four fields are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action<P = (), M = ()> {
    #[serde(rename = "type")]
    pub action_type: ActionType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,

    #[serde(default)]
    pub error: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

impl<P, M> Action<P, M> {
    /// A bare action of the given type: no payload, no meta, not an error.
    pub fn new(action_type: impl Into<ActionType>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: None,
            error: false,
            meta: None,
        }
    }

    /// The action used when a reducer is called without one. Matches no case.
    pub fn sentinel() -> Self {
        Self::new(INVALID_ACTION_TYPE)
    }

    pub fn is_sentinel(&self) -> bool {
        self.action_type == INVALID_ACTION_TYPE
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn has_type(&self, action_type: &str) -> bool {
        self.action_type == action_type
    }

    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_meta(mut self, meta: M) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// Stateless factory for actions of one type.
///
/// Obtained from [`Duck::create_action`](crate::Duck::create_action) or
/// [`Duck::create_error_action`](crate::Duck::create_error_action). The error flag is fixed
/// when the creator is built, so every action it produces carries the same flag.
pub struct ActionCreator<P = (), M = ()> {
    action_type: ActionType,
    is_error: bool,
    _marker: PhantomData<fn(P, M)>,
}

impl<P, M> ActionCreator<P, M> {
    pub fn new(action_type: impl Into<ActionType>, is_error: bool) -> Self {
        Self {
            action_type: action_type.into(),
            is_error,
            _marker: PhantomData,
        }
    }

    pub fn action_type(&self) -> &ActionType {
        &self.action_type
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Builds `{ type, payload, error, meta }`. Absent arguments stay `None`.
    pub fn create(&self, payload: Option<P>, meta: Option<M>) -> Action<P, M> {
        Action {
            action_type: self.action_type.clone(),
            payload,
            error: self.is_error,
            meta,
        }
    }

    pub fn empty(&self) -> Action<P, M> {
        self.create(None, None)
    }

    pub fn with_payload(&self, payload: P) -> Action<P, M> {
        self.create(Some(payload), None)
    }

    pub fn with_payload_and_meta(&self, payload: P, meta: M) -> Action<P, M> {
        self.create(Some(payload), Some(meta))
    }

    /// Whether `action` has the type this creator produces.
    pub fn matches(&self, action: &Action<P, M>) -> bool {
        action.action_type == self.action_type
    }
}

// Manual impls: derives would demand `P: Clone` / `P: Debug` for a marker field.
impl<P, M> Clone for ActionCreator<P, M> {
    fn clone(&self) -> Self {
        Self {
            action_type: self.action_type.clone(),
            is_error: self.is_error,
            _marker: PhantomData,
        }
    }
}

impl<P, M> Debug for ActionCreator<P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCreator")
            .field("action_type", &self.action_type)
            .field("is_error", &self.is_error)
            .finish()
    }
}
