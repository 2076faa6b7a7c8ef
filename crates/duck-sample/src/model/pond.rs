use duck_framework::{Action, ActionCreator, Cases, Reducer};
use serde::{Deserialize, Serialize};

/// Application segment of every pond action type.
pub const APP: &str = "pond";

pub type Food = String;

/// Free-form note attached to an action as `meta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment: String,
}

impl Comment {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }
}

/// Every duck in the pond shares one action shape, so each reducer can react to any
/// pond action.
pub type PondAction = Action<Food, Comment>;
pub type PondActionCreator = ActionCreator<Food, Comment>;
pub type PondReducer<S> = Reducer<S, Food, Comment>;
pub type PondCases<S> = Cases<S, Food, Comment>;
