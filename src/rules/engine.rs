//! Rules engine trait.
//!
//! Front ends, search code and tests drive a game only through this trait:
//! ask for the legal actions, submit one, receive the successor state.

use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Final standings of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One player finished with the most money.
    Winner(PlayerId),
    /// Several players tied for the most money.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Standings from final money: the richest player(s) win.
    #[must_use]
    pub fn from_money(state: &GameState) -> Self {
        let best = state.money.iter().map(|(_, &m)| m).max().unwrap_or(0);
        let mut leaders: Vec<_> = state
            .money
            .iter()
            .filter(|(_, &m)| m == best)
            .map(|(p, _)| p)
            .collect();

        if leaders.len() == 1 {
            GameResult::Winner(leaders.remove(0))
        } else {
            GameResult::Winners(leaders)
        }
    }

    /// Check if a player won (or shared the win).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the state is terminal
/// - `apply_action`: never mutates its input; on error nothing changed
/// - `is_terminal`: `None` while the race continues
pub trait RulesEngine {
    /// Get the rule set.
    fn config(&self) -> &GameConfig;

    /// Legal actions for the player to move, in a stable order.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Produce the successor of `state` after `action`.
    fn apply_action(&mut self, state: &GameState, action: &Action) -> Result<GameState, GameError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Check whether `action` may be submitted now.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }
}
