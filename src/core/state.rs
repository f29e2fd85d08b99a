//! Game state: one complete snapshot of the table.
//!
//! ## Contents
//!
//! - Track with every camel stack
//! - Money per player
//! - Which camel dice are still in the pyramid this leg
//! - Desert tiles (one per player at most) and the tile → owner lookup
//! - Leg ticket decks and the tickets each player holds
//! - Final bet stacks and the bet cards each player still holds
//!
//! ## Snapshots
//!
//! Containers that grow during play (stacks, ticket hands, bet stacks) use
//! `im` persistent structures, so a clone is cheap and shares nothing
//! mutable with its source. The engine always clones before writing and
//! never touches a state it has already returned.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::DesertFace;
use super::camel::{Camel, CamelMap, CAMEL_COUNT};
use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap};
use crate::betting::{BetCards, FinalBetCard, LegTicket};
use crate::board::Track;

/// An active desert tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesertTile {
    pub tile: usize,
    pub face: DesertFace,
}

/// Per-player desert tiles plus the tile → owner lookup.
///
/// Only the per-player records go over the wire; the lookup is rebuilt on
/// deserialize so the two can never disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PlayerMap<Option<DesertTile>>", into = "PlayerMap<Option<DesertTile>>")]
struct DesertTiles {
    by_player: PlayerMap<Option<DesertTile>>,
    owners: FxHashMap<usize, PlayerId>,
}

impl DesertTiles {
    fn new(player_count: usize) -> Self {
        Self {
            by_player: PlayerMap::with_default(player_count),
            owners: FxHashMap::default(),
        }
    }

    fn set(&mut self, player: PlayerId, tile: usize, face: DesertFace) {
        let Some(slot) = self.by_player.get_mut(player) else {
            return;
        };
        if let Some(previous) = slot.take() {
            self.owners.remove(&previous.tile);
        }
        *slot = Some(DesertTile { tile, face });
        self.owners.insert(tile, player);
    }

    fn clear(&mut self) {
        for (_, slot) in self.by_player.iter_mut() {
            *slot = None;
        }
        self.owners.clear();
    }
}

impl From<PlayerMap<Option<DesertTile>>> for DesertTiles {
    fn from(by_player: PlayerMap<Option<DesertTile>>) -> Self {
        let owners = by_player
            .iter()
            .filter_map(|(player, tile)| tile.as_ref().map(|t| (t.tile, player)))
            .collect();
        Self { by_player, owners }
    }
}

impl From<DesertTiles> for PlayerMap<Option<DesertTile>> {
    fn from(tiles: DesertTiles) -> Self {
        tiles.by_player
    }
}

/// Outcome of the most recent die roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieRoll {
    pub player: PlayerId,
    pub camel: Camel,
    pub distance: u8,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Camel stacks per tile.
    pub track: Track,

    /// Coins per player.
    pub money: PlayerMap<i64>,

    /// True while a camel's die has not been rolled this leg.
    pub dice_available: CamelMap<bool>,

    /// Each player's active desert tile, with the reverse lookup.
    desert_tiles: DesertTiles,

    /// Leg tickets left in each camel's deck.
    pub leg_tickets_remaining: CamelMap<usize>,

    /// Leg tickets each player took this leg, in order taken.
    pub leg_tickets: PlayerMap<Vector<LegTicket>>,

    /// Overall winner bets, in play order.
    pub winner_bets: Vector<FinalBetCard>,

    /// Overall loser bets, in play order.
    pub loser_bets: Vector<FinalBetCard>,

    /// Final bet cards each player still holds.
    pub bet_cards: PlayerMap<BetCards>,

    /// Player to move.
    pub current_player: PlayerId,

    /// Current leg (starts at 1).
    pub leg_number: u32,

    /// Set once a camel reaches the finish.
    pub terminal: bool,

    /// Most recent die roll, if any.
    pub last_roll: Option<DieRoll>,
}

impl GameState {
    /// Create a state with an empty track and fresh decks, dice and money.
    ///
    /// Camels still need their opening placement; see `CamelUp::new_game`,
    /// which also checks `player_count` against `MIN_PLAYERS..=MAX_PLAYERS`.
    /// This constructor does not: it is meant for the engine and for tests
    /// that build positions by hand.
    #[must_use]
    pub fn new(player_count: usize, config: &GameConfig) -> Self {
        Self {
            track: Track::new(config.board_tiles),
            money: PlayerMap::with_value(player_count, config.starting_money),
            dice_available: CamelMap::with_value(true),
            desert_tiles: DesertTiles::new(player_count),
            leg_tickets_remaining: CamelMap::with_value(config.leg_deck_size()),
            leg_tickets: PlayerMap::with_default(player_count),
            winner_bets: Vector::new(),
            loser_bets: Vector::new(),
            bet_cards: PlayerMap::with_default(player_count),
            current_player: PlayerId::new(0),
            leg_number: 1,
            terminal: false,
            last_roll: None,
        }
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.money.player_count()
    }

    /// Index of the finish tile.
    #[must_use]
    pub fn finish_tile(&self) -> usize {
        self.track.finish_tile()
    }

    /// Total camels on the track (always `CAMEL_COUNT` in a consistent state).
    #[must_use]
    pub fn camel_count_on_board(&self) -> usize {
        self.track.camel_count()
    }

    // === Turn ===

    /// Pass the turn to the next seat.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.next(self.player_count());
    }

    /// Add (or with a negative amount, remove) coins. Unoccupied seats are ignored.
    pub fn credit(&mut self, player: PlayerId, amount: i64) {
        if let Some(money) = self.money.get_mut(player) {
            *money += amount;
        }
    }

    // === Dice ===

    /// Camels whose dice are still available, in index order.
    #[must_use]
    pub fn available_dice(&self) -> SmallVec<[Camel; CAMEL_COUNT]> {
        self.dice_available
            .iter()
            .filter(|(_, available)| **available)
            .map(|(camel, _)| camel)
            .collect()
    }

    /// True while at least one die can still be rolled this leg.
    #[must_use]
    pub fn has_available_die(&self) -> bool {
        self.dice_available.values().any(|&available| available)
    }

    // === Desert Tiles ===

    /// A player's active desert tile.
    #[must_use]
    pub fn desert_tile(&self, player: PlayerId) -> Option<DesertTile> {
        self.desert_tiles.by_player.get(player).copied().flatten()
    }

    /// Owner of the desert tile on `tile`, if any.
    #[must_use]
    pub fn desert_tile_owner(&self, tile: usize) -> Option<PlayerId> {
        self.desert_tiles.owners.get(&tile).copied()
    }

    /// All active desert tiles with their owners, in seat order.
    pub fn desert_tiles(&self) -> impl Iterator<Item = (PlayerId, DesertTile)> + '_ {
        self.desert_tiles
            .by_player
            .iter()
            .filter_map(|(player, tile)| tile.as_ref().map(|&t| (player, t)))
    }

    /// Place a player's desert tile, picking up their previous one.
    pub fn set_desert_tile(&mut self, player: PlayerId, tile: usize, face: DesertFace) {
        self.desert_tiles.set(player, tile, face);
    }

    /// Return every desert tile to its owner.
    pub fn clear_desert_tiles(&mut self) {
        self.desert_tiles.clear();
    }

    // === Standings ===

    /// Camels from most to least advanced.
    #[must_use]
    pub fn race_order(&self) -> SmallVec<[Camel; CAMEL_COUNT]> {
        self.track.race_order()
    }

    /// The camel currently in front.
    #[must_use]
    pub fn leading_camel(&self) -> Option<Camel> {
        self.race_order().first().copied()
    }

    /// The camel currently at the back.
    #[must_use]
    pub fn trailing_camel(&self) -> Option<Camel> {
        self.race_order().last().copied()
    }
}
