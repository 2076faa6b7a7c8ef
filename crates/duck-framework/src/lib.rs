//! # Duck Framework
//!
//! Building blocks for namespaced state-update units ("ducks") in applications that fold
//! discrete, named actions into a single state value.
//!
//! A duck bundles three things, all created from one [`Duck`]:
//!
//! - **Action types**: [`Duck::define_type`] namespaces action names as `app/duck/NAME`.
//! - **Action creators**: [`Duck::create_action`] returns an [`ActionCreator`] that builds
//!   flux-standard [`Action`]s (`type`, `payload`, `meta`, `error`).
//! - **Reducers**: [`Duck::create_reducer`] turns a [`Cases`] table into a [`Reducer`],
//!   rejecting misconfigured tables up front with a [`CaseError`].
//!
//! The framework does not dispatch, store, combine, or persist anything. Reducers and
//! actions are handed to whatever owns the application state.
//!
//! ## Quick Start
//!
//! ```rust
//! use duck_framework::{create_duck, Action, Cases};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Todos { items: Vec<String> }
//!
//! let duck = create_duck("todos", Some("planner"));
//! let added = duck.create_action::<String, ()>(duck.define_type("ADDED"));
//!
//! let reducer = duck
//!     .create_reducer(
//!         Cases::new().on(added.action_type(), |mut todos: Todos, action: &Action<String>| {
//!             todos.items.extend(action.payload.clone());
//!             todos
//!         }),
//!         Todos { items: Vec::new() },
//!     )
//!     .expect("valid cases");
//!
//! let todos = reducer.call(None, Some(&added.with_payload("write docs".into())));
//! assert_eq!(todos.items, ["write docs"]);
//! ```
//!
//! ## Module Tour
//!
//! - [`duck`]: the entry point and namespace formatting.
//! - [`action`]: [`Action`], [`ActionType`], [`ActionCreator`] and the sentinel action.
//! - [`cases`]: [`Cases`] tables and key validation.
//! - [`reducer`]: the [`Reducer`] itself.
//! - [`error`]: [`CaseError`].
//! - [`mock`]: [`CaseRecorder`](mock::CaseRecorder) for asserting which handlers ran.
//! - [`tracing`](mod@crate::tracing): subscriber setup for applications.

pub mod action;
pub mod cases;
pub mod duck;
pub mod error;
pub mod mock;
pub mod reducer;
pub mod tracing;

// Re-export core types for convenience
pub use action::{Action, ActionCreator, ActionType, INVALID_ACTION_TYPE};
pub use cases::{validate_case_keys, CaseFn, CaseKey, Cases, UNDEFINED_CASE_KEY};
pub use duck::{create_duck, Duck};
pub use error::CaseError;
pub use reducer::Reducer;
