//! # Duck Sample App Library
//!
//! A pond with two ducks, Alfred and Winnie, built on `duck_framework`. Exposed as a library
//! for integration testing.

pub mod alfred_duck;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod winnie_duck;
