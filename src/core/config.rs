//! Rule-set configuration.
//!
//! `GameConfig::default()` is the reference rule set: a 17-tile track,
//! three starting coins, 1-3 movement dice, a 5/3/2 leg ticket deck and
//! 8/5/3/2/1 final bet payouts. Variants can be described with the
//! `with_*` builders or deserialized from any serde format.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Tiles on the reference track (start and finish included).
pub const DEFAULT_BOARD_TILES: usize = 17;

/// Fewest players at the table.
pub const MIN_PLAYERS: usize = 2;

/// Most players at the table.
pub const MAX_PLAYERS: usize = 8;

/// Rule-set parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Track length. Tile 0 is the start area, the last tile the finish.
    pub board_tiles: usize,

    /// Coins each player starts with.
    pub starting_money: i64,

    /// Highest face on a camel die (faces run 1..=die_faces).
    pub die_faces: u8,

    /// Coins paid to the player who rolls.
    pub roll_reward: i64,

    /// Coins paid to a desert tile's owner when a camel lands on it.
    pub desert_toll: i64,

    /// Leg ticket face values per camel, in draw order.
    pub leg_ticket_values: Vec<i64>,

    /// Paid per ticket on the second-place camel at leg end.
    pub leg_second_place_payout: i64,

    /// Rewards for the first correct final bets, in placement order.
    pub final_bet_payouts: Vec<i64>,

    /// Reward for every correct final bet past `final_bet_payouts`.
    pub final_bet_floor_payout: i64,

    /// Coins lost per losing ticket or wrong final bet.
    pub wrong_bet_penalty: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_tiles: DEFAULT_BOARD_TILES,
            starting_money: 3,
            die_faces: 3,
            roll_reward: 1,
            desert_toll: 1,
            leg_ticket_values: vec![5, 3, 2],
            leg_second_place_payout: 1,
            final_bet_payouts: vec![8, 5, 3, 2],
            final_bet_floor_payout: 1,
            wrong_bet_penalty: 1,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_board_tiles(mut self, tiles: usize) -> Self {
        self.board_tiles = tiles;
        self
    }

    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    #[must_use]
    pub fn with_die_faces(mut self, faces: u8) -> Self {
        self.die_faces = faces;
        self
    }

    #[must_use]
    pub fn with_leg_ticket_values(mut self, values: Vec<i64>) -> Self {
        self.leg_ticket_values = values;
        self
    }

    #[must_use]
    pub fn with_final_bet_payouts(mut self, payouts: Vec<i64>, floor: i64) -> Self {
        self.final_bet_payouts = payouts;
        self.final_bet_floor_payout = floor;
        self
    }

    /// Index of the finish tile.
    #[must_use]
    pub fn finish_tile(&self) -> usize {
        self.board_tiles.saturating_sub(1)
    }

    /// Tickets per camel deck.
    #[must_use]
    pub fn leg_deck_size(&self) -> usize {
        self.leg_ticket_values.len()
    }

    /// Check the rule set is playable.
    ///
    /// The opening placement puts camels up to `die_faces` tiles out, which
    /// must stay short of the finish.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.die_faces == 0 {
            return Err(ConfigError::NoDieFaces);
        }

        let min_tiles = usize::from(self.die_faces) + 2;
        if self.board_tiles < min_tiles {
            return Err(ConfigError::BoardTooShort {
                got: self.board_tiles,
                min: min_tiles,
            });
        }

        if self.leg_ticket_values.is_empty() {
            return Err(ConfigError::EmptyTicketDeck);
        }

        let positive = self.leg_ticket_values.iter().all(|&v| v > 0);
        let descending = self.leg_ticket_values.windows(2).all(|w| w[0] >= w[1]);
        if !positive || !descending {
            return Err(ConfigError::UnorderedTicketDeck(self.leg_ticket_values.clone()));
        }

        Ok(())
    }
}

/// Check a requested table size.
pub fn validate_player_count(player_count: usize) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(ConfigError::PlayerCount {
            got: player_count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}
