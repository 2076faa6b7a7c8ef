//! # Pond Lifecycle
//!
//! The framework stops at reducers; something still has to own the state and feed actions
//! through. [`Pond`] plays that part for the sample: it builds both ducks, wires Winnie's
//! types into Alfred, and applies every action to every slice in dispatch order.
//!
//! ```rust
//! use duck_sample::lifecycle::Pond;
//!
//! let pond = Pond::new().unwrap();
//! let state = pond.replay(&[
//!     pond.alfred.eat("bread", None),
//!     pond.winnie.go_to_work.empty(),
//! ]);
//!
//! assert_eq!(state.alfred.belly, ["bread"]);
//! assert!(!state.alfred.happy);
//! assert!(!state.winnie.home);
//! ```

use crate::alfred_duck::Alfred;
use crate::error::PondError;
use crate::model::{AlfredState, PondAction, WinnieState};
use crate::winnie_duck::Winnie;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// State of the whole pond, one slice per duck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PondState {
    pub alfred: AlfredState,
    pub winnie: WinnieState,
}

/// Both ducks of the pond.
pub struct Pond {
    pub alfred: Alfred,
    pub winnie: Winnie,
}

impl Pond {
    /// Builds every duck. Fails if any duck's case mapping is invalid.
    pub fn new() -> Result<Self, PondError> {
        // Winnie first: Alfred's reducer needs her action types.
        let winnie = Winnie::new()?;
        let alfred = Alfred::new(&winnie.types)?;
        info!("Pond assembled");
        Ok(Self { alfred, winnie })
    }

    /// Each reducer called without arguments.
    pub fn initial_state(&self) -> PondState {
        PondState {
            alfred: self.alfred.reducer.initial_state(),
            winnie: self.winnie.reducer.initial_state(),
        }
    }

    /// Passes `action` to every duck's reducer.
    pub fn reduce(&self, state: PondState, action: &PondAction) -> PondState {
        debug!(action_type = %action.action_type, "Dispatch");
        PondState {
            alfred: self.alfred.reducer.reduce(state.alfred, action),
            winnie: self.winnie.reducer.reduce(state.winnie, action),
        }
    }

    /// Replays `actions` from the initial state.
    pub fn replay<'a, I>(&self, actions: I) -> PondState
    where
        I: IntoIterator<Item = &'a PondAction>,
    {
        actions
            .into_iter()
            .fold(self.initial_state(), |state, action| self.reduce(state, action))
    }

    /// Parses a JSON array of actions and replays it.
    pub fn replay_json(&self, script: &str) -> Result<PondState, PondError> {
        let actions: Vec<PondAction> = serde_json::from_str(script)?;
        info!(actions = actions.len(), "Replaying script");
        Ok(self.replay(&actions))
    }
}
