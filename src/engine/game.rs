//! The camel race transition engine.

use tracing::{debug, info, warn};

use super::{movement, scoring};
use crate::betting::{ticket_value, BetKind, FinalBetCard, LegTicket};
use crate::core::action::Action;
use crate::core::camel::Camel;
use crate::core::config::{validate_player_count, GameConfig};
use crate::core::error::{ConfigError, GameError, InvariantViolation};
use crate::core::player::PlayerId;
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::GameState;
use crate::rules::{legal, GameResult, RulesEngine};

/// Rules engine for the camel race.
///
/// Owns the rule set and the dice. Every state it hands out is a fresh
/// value; inputs are only read.
///
/// ## Example
///
/// ```
/// use camel_race::engine::CamelUp;
/// use camel_race::rules::RulesEngine;
///
/// let mut engine = CamelUp::new(7);
/// let state = engine.new_game(3).unwrap();
///
/// let actions = engine.legal_actions(&state);
/// let next = engine.apply_action(&state, &actions[0]).unwrap();
///
/// assert_eq!(next.current_player.index(), 1);
/// assert_eq!(state.current_player.index(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct CamelUp {
    config: GameConfig,
    rng: GameRng,
}

impl CamelUp {
    /// Engine with the reference rules.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            config: GameConfig::default(),
            rng: GameRng::new(seed),
        }
    }

    /// Engine with a custom rule set.
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: GameRng::new(seed),
        })
    }

    /// Resume an engine from a saved dice position.
    pub fn from_rng_state(config: GameConfig, rng: &GameRngState) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: GameRng::from_state(rng),
        })
    }

    /// Current dice position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// An engine with the same rules and an independent dice stream.
    ///
    /// Use one fork per exploratory branch to keep branches reproducible.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            config: self.config.clone(),
            rng: self.rng.fork(),
        }
    }

    /// Set up a new game: fresh money, decks and dice, camels placed by an
    /// opening roll of every die.
    pub fn new_game(&mut self, player_count: usize) -> Result<GameState, ConfigError> {
        validate_player_count(player_count)?;

        let mut state = GameState::new(player_count, &self.config);
        movement::place_opening(&mut state, &mut self.rng, &self.config);

        info!(player_count, seed = self.rng.seed(), "new game");
        Ok(state)
    }

    fn roll(&mut self, state: &mut GameState) -> Result<(), InvariantViolation> {
        if !state.has_available_die() {
            scoring::resolve_leg_end(state, &self.config)?;
        }

        let roll = movement::roll_die(state, &mut self.rng, &self.config)?;
        let destination = movement::move_camel(state, roll.camel, roll.distance, &self.config)?;
        state.credit(roll.player, self.config.roll_reward);
        state.last_roll = Some(roll);

        debug!(
            player = %roll.player,
            camel = %roll.camel,
            distance = roll.distance,
            destination,
            "die rolled"
        );

        if !state.track.is_empty(state.finish_tile()) {
            scoring::resolve_game_end(state, &self.config)?;
        } else if !state.has_available_die() {
            scoring::resolve_leg_end(state, &self.config)?;
        }
        Ok(())
    }

    fn take_leg_ticket(&self, state: &mut GameState, player: PlayerId, camel: Camel) -> Result<(), InvariantViolation> {
        let remaining = state.leg_tickets_remaining[camel];
        let value = ticket_value(&self.config.leg_ticket_values, camel, remaining)?;

        state.leg_tickets[player].push_back(LegTicket { camel, value });
        state.leg_tickets_remaining[camel] = remaining - 1;
        Ok(())
    }

    fn place_bet(state: &mut GameState, player: PlayerId, kind: BetKind, camel: Camel) {
        let card = FinalBetCard::new(player, camel);
        match kind {
            BetKind::Winner => state.winner_bets.push_back(card),
            BetKind::Loser => state.loser_bets.push_back(card),
        }
        state.bet_cards[player].consume(kind, camel);
    }
}

impl RulesEngine for CamelUp {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        legal::legal_actions(state)
    }

    fn apply_action(&mut self, state: &GameState, action: &Action) -> Result<GameState, GameError> {
        if state.terminal {
            return Ok(state.clone());
        }

        let player = state.current_player;
        if !matches!(action, Action::RollDie {}) && !legal::is_legal(state, action) {
            warn!(%player, ?action, "rejected illegal action");
            return Err(GameError::IllegalAction {
                player,
                action: *action,
            });
        }

        let mut next = state.clone();
        match *action {
            Action::RollDie {} => self.roll(&mut next)?,
            Action::PlaceDesertTile { tile, move_delta } => {
                next.set_desert_tile(player, tile, move_delta);
                debug!(%player, tile, face = ?move_delta, "desert tile placed");
            }
            Action::TakeLegTicket { camel } => self.take_leg_ticket(&mut next, player, camel)?,
            Action::BetWinner { camel } => Self::place_bet(&mut next, player, BetKind::Winner, camel),
            Action::BetLoser { camel } => Self::place_bet(&mut next, player, BetKind::Loser, camel),
        }

        next.advance_turn();
        Ok(next)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.terminal.then(|| GameResult::from_money(state))
    }
}
