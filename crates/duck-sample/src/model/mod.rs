//! Data types shared by the pond's ducks.

pub mod alfred;
pub mod pond;
pub mod winnie;

pub use alfred::AlfredState;
pub use pond::{Comment, Food, PondAction, PondActionCreator, PondCases, PondReducer};
pub use winnie::WinnieState;
