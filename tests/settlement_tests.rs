//! Settlement tests: leg tickets and overall bets, alone and through the engine.

use camel_race::betting::{settle_final_bets, settle_leg, FinalBetCard, LegTicket, Payout};
use camel_race::core::{Action, Camel, GameConfig, PlayerId, PlayerMap, CAMEL_COUNT};
use camel_race::engine::CamelUp;
use camel_race::rules::RulesEngine;
use im::Vector;

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

fn net(payouts: &[Payout], player_count: usize) -> Vec<i64> {
    let mut totals = vec![0; player_count];
    for payout in payouts {
        totals[payout.player.index()] += payout.amount;
    }
    totals
}

/// First pays face value, second pays one, everything else costs one.
#[test]
fn test_leg_settlement_tiers() {
    let config = GameConfig::default();
    let mut hands: PlayerMap<Vector<LegTicket>> = PlayerMap::with_default(3);
    hands[p(0)].push_back(LegTicket { camel: Camel::Orange, value: 5 });
    hands[p(0)].push_back(LegTicket { camel: Camel::White, value: 5 });
    hands[p(1)].push_back(LegTicket { camel: Camel::Orange, value: 3 });
    hands[p(2)].push_back(LegTicket { camel: Camel::Blue, value: 5 });

    let payouts = settle_leg(&hands, Camel::Orange, Some(Camel::White), &config);

    assert_eq!(net(&payouts, 3), vec![5 + 1, 3, -1]);
}

/// Without a second camel, only the leader's tickets pay.
#[test]
fn test_leg_settlement_without_second() {
    let config = GameConfig::default();
    let mut hands: PlayerMap<Vector<LegTicket>> = PlayerMap::with_default(2);
    hands[p(0)].push_back(LegTicket { camel: Camel::Green, value: 2 });
    hands[p(1)].push_back(LegTicket { camel: Camel::Blue, value: 5 });

    let payouts = settle_leg(&hands, Camel::Green, None, &config);

    assert_eq!(net(&payouts, 2), vec![2, -1]);
}

/// Correct cards past the listed tiers earn the floor payout.
#[test]
fn test_final_bets_floor_after_tiers() {
    let config = GameConfig::default();
    let stack: Vector<FinalBetCard> = (0..6)
        .map(|i| FinalBetCard::new(p(i), Camel::Yellow))
        .collect();

    let payouts = settle_final_bets(&stack, Camel::Yellow, &config);
    let amounts: Vec<_> = payouts.iter().map(|payout| payout.amount).collect();

    assert_eq!(amounts, vec![8, 5, 3, 2, 1, 1]);
}

/// Wrong cards do not use up a payout tier.
#[test]
fn test_final_bets_wrong_cards_skip_tiers() {
    let config = GameConfig::default();
    let stack: Vector<FinalBetCard> = [
        (0, Camel::White),
        (1, Camel::Green),
        (2, Camel::White),
        (0, Camel::Orange),
    ]
    .into_iter()
    .map(|(player, camel)| FinalBetCard::new(p(player), camel))
    .collect();

    let payouts = settle_final_bets(&stack, Camel::White, &config);

    assert_eq!(net(&payouts, 3), vec![8 - 1, -1, 5]);
}

/// Custom payout tables flow through settlement.
#[test]
fn test_custom_payouts() {
    let config = GameConfig::default().with_final_bet_payouts(vec![10, 4], 0);
    let stack: Vector<FinalBetCard> = (0..3)
        .map(|i| FinalBetCard::new(p(i), Camel::Blue))
        .collect();

    let payouts = settle_final_bets(&stack, Camel::Blue, &config);

    assert_eq!(net(&payouts, 3), vec![10, 4, 0]);
}

/// Tickets taken in a leg are paid against the standings when the leg closes.
#[test]
fn test_engine_pays_leg_tickets() {
    let mut engine = CamelUp::new(7);
    let mut state = engine.new_game(3).unwrap();

    // Players 0, 1 and 2 take tickets; the first two share a camel.
    for camel in [Camel::Blue, Camel::Blue, Camel::Green] {
        state = engine.apply_action(&state, &Action::take_leg_ticket(camel)).unwrap();
    }
    let held = state.leg_tickets.clone();
    let start = state.money.clone();

    // Five rolls by players 0, 1, 2, 0, 1 close the leg.
    for _ in 0..CAMEL_COUNT {
        state = engine.apply_action(&state, &Action::RollDie {}).unwrap();
    }
    assert!(!state.terminal);
    assert_eq!(state.leg_number, 2);

    // Leg end leaves the track as it was settled.
    let order = state.race_order();
    let expected_tickets = settle_leg(&held, order[0], order.get(1).copied(), engine.config());
    let mut expected = net(&expected_tickets, 3);
    for (player, rolls) in [(0, 2), (1, 2), (2, 1)] {
        expected[player] += rolls;
    }

    let gained: Vec<i64> = PlayerId::all(3).map(|pl| state.money[pl] - start[pl]).collect();
    assert_eq!(gained, expected);
    assert!(state.leg_tickets.iter().all(|(_, hand)| hand.is_empty()));
    assert!(state.leg_tickets_remaining.values().all(|&n| n == 3));
}

/// The next leg starts with full ticket decks at face value again.
#[test]
fn test_ticket_decks_refill_after_leg() {
    let mut engine = CamelUp::new(7);
    let mut state = engine.new_game(2).unwrap();

    state = engine.apply_action(&state, &Action::take_leg_ticket(Camel::White)).unwrap();
    state = engine.apply_action(&state, &Action::take_leg_ticket(Camel::White)).unwrap();
    assert_eq!(state.leg_tickets_remaining[Camel::White], 1);

    for _ in 0..CAMEL_COUNT {
        state = engine.apply_action(&state, &Action::RollDie {}).unwrap();
    }
    assert_eq!(state.leg_tickets_remaining[Camel::White], 3);

    state = engine.apply_action(&state, &Action::take_leg_ticket(Camel::White)).unwrap();
    let taker = PlayerId::new(1);
    assert_eq!(state.leg_tickets[taker][0], LegTicket { camel: Camel::White, value: 5 });
}
