//! Player actions.
//!
//! A closed set of five move kinds, each variant carrying only its own
//! payload:
//! - `RollDie`: advance a random camel (earns the roller a coin)
//! - `PlaceDesertTile`: put your oasis/mirage marker on an empty tile
//! - `TakeLegTicket`: wager on a camel leading the current leg
//! - `BetWinner` / `BetLoser`: wager on the overall race result
//!
//! ## Wire shape
//!
//! ```
//! use camel_race::core::{Action, Camel, DesertFace};
//!
//! let action = Action::place_desert_tile(3, DesertFace::Mirage);
//! let json = serde_json::to_string(&action).unwrap();
//! assert_eq!(json, r#"{"PlaceDesertTile":{"tile":3,"move_delta":-1}}"#);
//!
//! let ticket: Action = serde_json::from_str(r#"{"TakeLegTicket":{"camel":1}}"#).unwrap();
//! assert_eq!(ticket, Action::take_leg_ticket(Camel::Green));
//! ```

use serde::{Deserialize, Serialize};

use super::camel::Camel;
use super::error::ActionDecodeError;

/// Which side of a desert tile faces up.
///
/// Serializes as its signed move delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum DesertFace {
    /// +1: arriving camels continue one tile and land on top.
    Oasis,
    /// -1: arriving camels fall back one tile and land underneath.
    Mirage,
}

impl DesertFace {
    /// Both faces, oasis first.
    pub const BOTH: [DesertFace; 2] = [DesertFace::Oasis, DesertFace::Mirage];

    /// Signed tile shift applied to camels landing on this tile.
    #[must_use]
    pub const fn delta(self) -> i8 {
        match self {
            DesertFace::Oasis => 1,
            DesertFace::Mirage => -1,
        }
    }
}

impl TryFrom<i8> for DesertFace {
    type Error = ActionDecodeError;

    fn try_from(delta: i8) -> Result<Self, Self::Error> {
        match delta {
            1 => Ok(DesertFace::Oasis),
            -1 => Ok(DesertFace::Mirage),
            other => Err(ActionDecodeError::InvalidDelta(other)),
        }
    }
}

impl From<DesertFace> for i8 {
    fn from(face: DesertFace) -> i8 {
        face.delta()
    }
}

/// Action tag without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    RollDie,
    PlaceDesertTile,
    TakeLegTicket,
    BetWinner,
    BetLoser,
}

/// A complete player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll one of the remaining camel dice.
    RollDie {},
    /// Place (or move) the player's desert tile.
    PlaceDesertTile { tile: usize, move_delta: DesertFace },
    /// Take the top leg ticket for a camel.
    TakeLegTicket { camel: Camel },
    /// Play a card on the overall winner.
    BetWinner { camel: Camel },
    /// Play a card on the overall loser.
    BetLoser { camel: Camel },
}

impl Action {
    #[must_use]
    pub const fn roll_die() -> Self {
        Action::RollDie {}
    }

    #[must_use]
    pub const fn place_desert_tile(tile: usize, move_delta: DesertFace) -> Self {
        Action::PlaceDesertTile { tile, move_delta }
    }

    #[must_use]
    pub const fn take_leg_ticket(camel: Camel) -> Self {
        Action::TakeLegTicket { camel }
    }

    #[must_use]
    pub const fn bet_winner(camel: Camel) -> Self {
        Action::BetWinner { camel }
    }

    #[must_use]
    pub const fn bet_loser(camel: Camel) -> Self {
        Action::BetLoser { camel }
    }

    /// The action's tag.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::RollDie {} => ActionKind::RollDie,
            Action::PlaceDesertTile { .. } => ActionKind::PlaceDesertTile,
            Action::TakeLegTicket { .. } => ActionKind::TakeLegTicket,
            Action::BetWinner { .. } => ActionKind::BetWinner,
            Action::BetLoser { .. } => ActionKind::BetLoser,
        }
    }
}
