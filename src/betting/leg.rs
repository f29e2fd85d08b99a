//! Leg tickets.
//!
//! Every camel has a small deck of tickets drawn highest value first
//! (5, 3, 2 in the reference rules). At leg end each ticket pays its face
//! value if its camel leads, a flat amount if the camel is second, and
//! costs the holder otherwise.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::Payout;
use crate::core::camel::Camel;
use crate::core::config::GameConfig;
use crate::core::error::InvariantViolation;
use crate::core::player::PlayerMap;

/// A leg ticket held by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegTicket {
    pub camel: Camel,
    pub value: i64,
}

/// Face value of the next ticket in a camel's deck.
///
/// `remaining` counts the tickets still in the deck, so the first draw
/// (all remaining) gets the highest value.
pub fn ticket_value(deck: &[i64], camel: Camel, remaining: usize) -> Result<i64, InvariantViolation> {
    if remaining == 0 || remaining > deck.len() {
        return Err(InvariantViolation::TicketCount {
            camel,
            remaining,
            deck_size: deck.len(),
        });
    }
    Ok(deck[deck.len() - remaining])
}

/// Settle every held ticket against the leg's first and second camels.
///
/// Payouts are listed player by player, in the order tickets were taken.
#[must_use]
pub fn settle_leg(
    hands: &PlayerMap<Vector<LegTicket>>,
    first: Camel,
    second: Option<Camel>,
    config: &GameConfig,
) -> Vec<Payout> {
    hands
        .iter()
        .flat_map(|(player, tickets)| {
            tickets.iter().map(move |ticket| {
                let amount = if ticket.camel == first {
                    ticket.value
                } else if Some(ticket.camel) == second {
                    config.leg_second_place_payout
                } else {
                    -config.wrong_bet_penalty
                };
                Payout::new(player, amount)
            })
        })
        .collect()
}
