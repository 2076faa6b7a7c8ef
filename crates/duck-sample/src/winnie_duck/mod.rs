//! # Winnie Duck
//!
//! Winnie commutes: she is either at home or at work. Her action types are public so other
//! ducks (Alfred) can react to them.

use crate::model::pond::APP;
use crate::model::{PondActionCreator, PondCases, PondReducer, WinnieState};
use duck_framework::{create_duck, ActionType, CaseError, Duck};

pub const NAME: &str = "winnie";

/// Namespaced action types of the Winnie duck.
#[derive(Debug, Clone, PartialEq)]
pub struct WinnieTypes {
    pub go_to_work: ActionType,
    pub return_home: ActionType,
}

impl WinnieTypes {
    pub fn new(duck: &Duck) -> Self {
        Self {
            go_to_work: duck.define_type("GO_TO_WORK"),
            return_home: duck.define_type("RETURN_HOME"),
        }
    }
}

/// The Winnie duck: action types, creators and reducer.
pub struct Winnie {
    pub types: WinnieTypes,
    pub go_to_work: PondActionCreator,
    pub return_home: PondActionCreator,
    pub reducer: PondReducer<WinnieState>,
}

impl Winnie {
    pub fn new() -> Result<Self, CaseError> {
        let duck = create_duck(NAME, Some(APP));
        let types = WinnieTypes::new(&duck);

        let reducer = duck.create_reducer(
            PondCases::new()
                .on(&types.go_to_work, |_: WinnieState, _| WinnieState { home: false })
                .on(&types.return_home, |_: WinnieState, _| WinnieState { home: true }),
            WinnieState::default(),
        )?;

        Ok(Self {
            go_to_work: duck.create_action(&types.go_to_work),
            return_home: duck.create_action(&types.return_home),
            types,
            reducer,
        })
    }
}
