//! Core types: camels, players, actions, state, RNG, configuration, errors.
//!
//! Everything here is plain data. Rules live in `rules` and `engine`.

pub mod action;
pub mod camel;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, DesertFace};
pub use camel::{Camel, CamelMap, CAMEL_COUNT};
pub use config::{validate_player_count, GameConfig, DEFAULT_BOARD_TILES, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ActionDecodeError, ConfigError, GameError, InvariantViolation};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{DesertTile, DieRoll, GameState};
