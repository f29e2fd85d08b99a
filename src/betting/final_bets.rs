//! Final bet cards on the overall race winner and loser.
//!
//! Each player holds one winner card and one loser card per camel. Played
//! cards go face down onto a shared stack in play order; when the race ends
//! the earliest correct cards earn the most.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::Payout;
use crate::core::camel::{Camel, CamelMap};
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;

/// Which final stack a card goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetKind {
    Winner,
    Loser,
}

/// A played final bet card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FinalBetCard {
    pub player: PlayerId,
    pub camel: Camel,
}

impl FinalBetCard {
    #[must_use]
    pub const fn new(player: PlayerId, camel: Camel) -> Self {
        Self { player, camel }
    }
}

/// The final bet cards a player still holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BetCards {
    winner: CamelMap<bool>,
    loser: CamelMap<bool>,
}

impl Default for BetCards {
    fn default() -> Self {
        Self::full()
    }
}

impl BetCards {
    /// A full hand: one winner and one loser card per camel.
    #[must_use]
    pub fn full() -> Self {
        Self {
            winner: CamelMap::with_value(true),
            loser: CamelMap::with_value(true),
        }
    }

    /// Does the player still hold this card?
    #[must_use]
    pub fn is_available(&self, kind: BetKind, camel: Camel) -> bool {
        match kind {
            BetKind::Winner => self.winner[camel],
            BetKind::Loser => self.loser[camel],
        }
    }

    /// Remove a card from the hand.
    pub fn consume(&mut self, kind: BetKind, camel: Camel) {
        match kind {
            BetKind::Winner => self.winner[camel] = false,
            BetKind::Loser => self.loser[camel] = false,
        }
    }
}

/// Settle a final stack against the camel that actually won (or lost).
///
/// Correct cards earn `final_bet_payouts` in stack order and
/// `final_bet_floor_payout` once the tiers run out; wrong cards cost
/// `wrong_bet_penalty`. Payouts are returned in stack order.
#[must_use]
pub fn settle_final_bets(stack: &Vector<FinalBetCard>, actual: Camel, config: &GameConfig) -> Vec<Payout> {
    let mut correct = 0;
    stack
        .iter()
        .map(|card| {
            let amount = if card.camel == actual {
                let reward = config
                    .final_bet_payouts
                    .get(correct)
                    .copied()
                    .unwrap_or(config.final_bet_floor_payout);
                correct += 1;
                reward
            } else {
                -config.wrong_bet_penalty
            };
            Payout::new(card.player, amount)
        })
        .collect()
}
