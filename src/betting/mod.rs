//! Wagers and their settlement.
//!
//! - `leg`: per-camel leg tickets, settled when a leg ends
//! - `final_bets`: overall winner/loser cards, settled once when the race ends
//!
//! Settlement functions are pure: they read the wagers and return the
//! resulting `Payout`s for the engine to apply.

pub mod final_bets;
pub mod leg;

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

pub use final_bets::{settle_final_bets, BetCards, BetKind, FinalBetCard};
pub use leg::{settle_leg, ticket_value, LegTicket};

/// A signed change to one player's money.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payout {
    pub player: PlayerId,
    pub amount: i64,
}

impl Payout {
    #[must_use]
    pub const fn new(player: PlayerId, amount: i64) -> Self {
        Self { player, amount }
    }
}
