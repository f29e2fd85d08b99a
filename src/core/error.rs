//! Error types.
//!
//! - `ConfigError`: rejected setup (player count or rule set). No state is
//!   produced.
//! - `GameError::IllegalAction`: the submitted action is not in the current
//!   legal set. Recoverable; the caller's state is untouched.
//! - `GameError::Invariant`: the state is corrupt. Not meant to be retried.

use thiserror::Error;

use super::action::Action;
use super::camel::Camel;
use super::player::PlayerId;

/// Invalid setup parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { got: usize, min: usize, max: usize },

    #[error("board needs at least {min} tiles for the opening placement, got {got}")]
    BoardTooShort { got: usize, min: usize },

    #[error("die must have at least one face")]
    NoDieFaces,

    #[error("leg ticket deck is empty")]
    EmptyTicketDeck,

    #[error("leg ticket values must be positive and non-increasing: {0:?}")]
    UnorderedTicketDeck(Vec<i64>),
}

/// Failure applying an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal action for {player}: {action:?}")]
    IllegalAction { player: PlayerId, action: Action },

    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Conditions unreachable through the public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{0} is not on the board")]
    CamelMissing(Camel),

    #[error("{camel} has {remaining} leg tickets remaining, deck holds {deck_size}")]
    TicketCount {
        camel: Camel,
        remaining: usize,
        deck_size: usize,
    },

    #[error("no camel dice available to roll")]
    NoDiceAvailable,

    #[error("race order is empty")]
    EmptyRaceOrder,
}

/// Malformed action payload on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionDecodeError {
    #[error("unknown camel index {0}")]
    UnknownCamel(u8),

    #[error("desert tile delta must be +1 or -1, got {0}")]
    InvalidDelta(i8),
}
