//! # camel-race
//!
//! A deterministic rules engine for a camel racing and betting board game.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: `apply_action` takes a state and returns a new
//!    one. Inputs are never touched, so any state can be kept, compared or
//!    explored from later.
//!
//! 2. **Reproducible Dice**: All randomness comes from a seeded
//!    `GameRng`. Same seed and same actions give the same game.
//!
//! 3. **Configuration Over Convention**: Board length, payouts and decks
//!    live in `GameConfig`. The defaults are the standard table.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Stacks, hands and bet piles use
//!   `im-rs`, so cloning a state for search is cheap.
//!
//! - **Single Validation Path**: An action is legal exactly when it is in
//!   `legal_actions`. Rolling is always accepted while the race runs.
//!
//! ## Modules
//!
//! - `core`: Camels, players, actions, state, RNG, configuration, errors
//! - `board`: The track and its camel stacks
//! - `betting`: Leg tickets and overall winner/loser bets
//! - `rules`: `RulesEngine` trait and legal-action generation
//! - `engine`: `CamelUp`, the engine itself

pub mod core;
pub mod board;
pub mod betting;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Camel, CamelMap, CAMEL_COUNT,
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig,
    Action, ActionKind, DesertFace,
    DesertTile, DieRoll, GameState,
    ConfigError, GameError, InvariantViolation, ActionDecodeError,
};

pub use crate::board::{CamelStack, Landing, Track};

pub use crate::betting::{BetCards, BetKind, FinalBetCard, LegTicket, Payout};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::engine::CamelUp;
