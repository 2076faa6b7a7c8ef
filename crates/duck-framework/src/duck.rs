//! # Ducks
//!
//! A [`Duck`] is the namespace a slice of application state lives under. It is the single
//! entry point of the framework and hands out the three building blocks of the slice:
//!
//! 1. [`Duck::define_type`] formats action types as `app/duck/ACTION` (or `duck/ACTION`).
//! 2. [`Duck::create_action`] returns an [`ActionCreator`] for one of those types.
//! 3. [`Duck::create_reducer`] validates a [`Cases`] table and returns a [`Reducer`].
//!
//! ```rust
//! use duck_framework::{create_duck, Action, Cases};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Counter { count: u32 }
//!
//! let duck = create_duck("duck-name", Some("app-name"));
//! let increment = duck.define_type("action-name");
//! assert_eq!(increment, "app-name/duck-name/action-name");
//!
//! let action = duck.create_action::<(), ()>(&increment);
//! let reducer = duck
//!     .create_reducer(
//!         Cases::new().on(&increment, |state: Counter, _: &Action| Counter {
//!             count: state.count + 1,
//!         }),
//!         Counter { count: 0 },
//!     )
//!     .unwrap();
//!
//! assert_eq!(reducer.call(None, Some(&action.empty())), Counter { count: 1 });
//! ```
//!
//! ## Configuration
//!
//! A duck is plain data, so namespaces can come from any serde source:
//!
//! ```rust
//! use duck_framework::Duck;
//!
//! let duck: Duck = serde_json::from_str(r#"{ "name": "todos", "app": "planner" }"#).unwrap();
//! assert_eq!(duck.define_type("ADDED"), "planner/todos/ADDED");
//! ```

use crate::action::{ActionCreator, ActionType};
use crate::cases::Cases;
use crate::error::CaseError;
use crate::reducer::Reducer;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use tracing::{debug, warn};

/// Namespace for one slice of state, optionally owned by an application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duck {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    app: Option<String>,
}

/// Creates a duck. `app`, when given, becomes the first segment of every action type.
pub fn create_duck(name: impl Into<String>, app: Option<&str>) -> Duck {
    Duck {
        name: name.into(),
        app: app.map(str::to_owned),
    }
}

impl Duck {
    /// A duck that belongs to no application.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            app: None,
        }
    }

    /// A duck namespaced under `app`.
    pub fn in_app(name: impl Into<String>, app: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            app: Some(app.into()),
        }
    }

    /// The duck's own segment of its action types.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning application, if any.
    pub fn app(&self) -> Option<&str> {
        self.app.as_deref()
    }

    /// `app/name`, or `name` for a duck without an application.
    ///
    /// An empty app counts as no app.
    pub fn namespace(&self) -> String {
        match &self.app {
            Some(app) if !app.is_empty() => format!("{app}/{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Formats the namespaced type for `action_name`.
    ///
    /// No validation takes place: an empty name shows up as an empty segment.
    pub fn define_type(&self, action_name: &str) -> ActionType {
        ActionType::new(format!("{}/{action_name}", self.namespace()))
    }

    /// Creator for non-error actions of `action_type`.
    pub fn create_action<P, M>(&self, action_type: impl Into<ActionType>) -> ActionCreator<P, M> {
        self.create_action_with(action_type, false)
    }

    /// Creator whose actions all carry `error: true`.
    pub fn create_error_action<P, M>(
        &self,
        action_type: impl Into<ActionType>,
    ) -> ActionCreator<P, M> {
        self.create_action_with(action_type, true)
    }

    pub fn create_action_with<P, M>(
        &self,
        action_type: impl Into<ActionType>,
        is_error: bool,
    ) -> ActionCreator<P, M> {
        ActionCreator::new(action_type, is_error)
    }

    /// Validates `cases` and builds a reducer starting from `default_state`.
    ///
    /// Misconfigured mappings fail here, when the duck is assembled, rather than on the
    /// first dispatched action.
    pub fn create_reducer<S, P, M>(
        &self,
        cases: Cases<S, P, M>,
        default_state: S,
    ) -> Result<Reducer<S, P, M>, CaseError> {
        let duck = self.namespace();
        let cases_len = cases.len();
        match Reducer::new(cases, default_state) {
            Ok(reducer) => {
                debug!(%duck, cases = cases_len, "Reducer created");
                Ok(reducer)
            }
            Err(e) => {
                warn!(%duck, error = %e, "Reducer rejected");
                Err(e)
            }
        }
    }
}

impl Display for Duck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.namespace())
    }
}
