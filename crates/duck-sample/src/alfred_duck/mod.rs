//! # Alfred Duck
//!
//! Alfred eats and sleeps. He also watches Winnie: he is unhappy while she is at work and
//! happy again once she is home. Winnie's reducer has no case for Alfred's types, so the
//! dependency only goes one way.

use crate::model::pond::APP;
use crate::model::{
    AlfredState, Comment, Food, PondAction, PondActionCreator, PondCases, PondReducer,
};
use crate::winnie_duck::WinnieTypes;
use duck_framework::{create_duck, ActionType, CaseError, Duck};

pub const NAME: &str = "alfred";

/// Namespaced action types of the Alfred duck.
#[derive(Debug, Clone, PartialEq)]
pub struct AlfredTypes {
    pub eat: ActionType,
    pub sleep: ActionType,
}

impl AlfredTypes {
    pub fn new(duck: &Duck) -> Self {
        Self {
            eat: duck.define_type("EAT"),
            sleep: duck.define_type("SLEEP"),
        }
    }
}

/// The Alfred duck: action types, creators and reducer.
pub struct Alfred {
    pub types: AlfredTypes,
    eat: PondActionCreator,
    pub sleep: PondActionCreator,
    pub reducer: PondReducer<AlfredState>,
}

impl Alfred {
    /// Builds the duck. `winnie` supplies the foreign types Alfred reacts to.
    pub fn new(winnie: &WinnieTypes) -> Result<Self, CaseError> {
        let duck = create_duck(NAME, Some(APP));
        let types = AlfredTypes::new(&duck);

        let reducer = duck.create_reducer(
            PondCases::new()
                .on(&types.eat, |mut state: AlfredState, action: &PondAction| {
                    state.belly.extend(action.payload.iter().cloned());
                    state
                })
                .on(&types.sleep, |state: AlfredState, _| AlfredState {
                    belly: Vec::new(),
                    ..state
                })
                .on(&winnie.go_to_work, |state: AlfredState, _| AlfredState {
                    happy: false,
                    ..state
                })
                .on(&winnie.return_home, |state: AlfredState, _| AlfredState {
                    happy: true,
                    ..state
                }),
            AlfredState::default(),
        )?;

        Ok(Self {
            eat: duck.create_action(&types.eat),
            sleep: duck.create_action(&types.sleep),
            types,
            reducer,
        })
    }

    /// `EAT` with the food as payload and an optional comment as meta.
    pub fn eat(&self, food: impl Into<Food>, comment: Option<&str>) -> PondAction {
        self.eat.create(Some(food.into()), comment.map(Comment::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::winnie_duck::Winnie;

    #[test]
    fn eating_fills_the_belly_and_sleep_empties_it() {
        let winnie = Winnie::new().unwrap();
        let alfred = Alfred::new(&winnie.types).unwrap();

        let fed = alfred.reducer.fold(
            AlfredState::default(),
            &[alfred.eat("bread", Some("breakfast")), alfred.eat("worm", None)],
        );
        assert_eq!(fed.belly, ["bread", "worm"]);

        let rested = alfred.reducer.reduce(fed, &alfred.sleep.empty());
        assert!(rested.belly.is_empty());
        assert!(rested.happy);
    }

    #[test]
    fn winnie_leaving_makes_alfred_unhappy() {
        let winnie = Winnie::new().unwrap();
        let alfred = Alfred::new(&winnie.types).unwrap();

        let sad = alfred
            .reducer
            .reduce(AlfredState::default(), &winnie.go_to_work.empty());
        assert!(!sad.happy);

        let glad = alfred.reducer.reduce(sad, &winnie.return_home.empty());
        assert!(glad.happy);
    }

    #[test]
    fn eat_carries_comment_as_meta() {
        let winnie = Winnie::new().unwrap();
        let alfred = Alfred::new(&winnie.types).unwrap();

        let action = alfred.eat("bread", Some("breakfast"));

        assert_eq!(action.action_type, "pond/alfred/EAT");
        assert_eq!(action.meta, Some(Comment::new("breakfast")));
        assert!(!action.error);
    }
}
