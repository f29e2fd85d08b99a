//! Game rules.
//!
//! - `engine`: the `RulesEngine` trait and final standings
//! - `legal`: the legal-action generator and its per-kind predicates

pub mod engine;
pub mod legal;

pub use engine::{GameResult, RulesEngine};
pub use legal::{can_place_bet, can_place_desert_tile, can_take_leg_ticket, is_legal, legal_actions};
