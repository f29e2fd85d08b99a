//! The camel race engine.
//!
//! - `game`: `CamelUp`, the `RulesEngine` implementation
//! - `movement`: dice, camel stacks and desert tiles
//! - `scoring`: leg-end and game-end resolution

pub mod game;
mod movement;
mod scoring;

pub use game::CamelUp;
