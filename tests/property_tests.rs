//! Property tests over random seeded games.
//!
//! Each case plays a game by picking legal actions from a generated script
//! and checks the invariants that must hold after every transition.

use camel_race::core::{Action, Camel, GameState, CAMEL_COUNT};
use camel_race::engine::CamelUp;
use camel_race::rules::RulesEngine;
use proptest::prelude::*;

/// Play `script` from a fresh game, returning every state visited.
fn play(seed: u64, player_count: usize, script: &[usize]) -> Vec<GameState> {
    let mut engine = CamelUp::new(seed);
    let mut state = engine.new_game(player_count).unwrap();
    let mut visited = vec![state.clone()];

    for &choice in script {
        let actions = engine.legal_actions(&state);
        if actions.is_empty() {
            break;
        }
        state = engine.apply_action(&state, &actions[choice % actions.len()]).unwrap();
        visited.push(state.clone());
    }
    visited
}

fn assert_consistent(state: &GameState) {
    assert_eq!(state.camel_count_on_board(), CAMEL_COUNT);
    for camel in Camel::ALL {
        assert!(state.track.locate(camel).is_some(), "{camel} missing");
    }
    assert_eq!(state.race_order().len(), CAMEL_COUNT);

    for (owner, desert) in state.desert_tiles() {
        assert_eq!(state.desert_tile_owner(desert.tile), Some(owner));
        assert!(desert.tile > 0 && desert.tile < state.finish_tile());
    }
    assert!(state.leg_tickets_remaining.values().all(|&n| n <= 3));
    assert!(state.current_player.index() < state.player_count());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every camel stays on the board exactly once.
    #[test]
    fn prop_pieces_conserved(
        seed in any::<u64>(),
        players in 2usize..=8,
        script in prop::collection::vec(any::<usize>(), 0..120),
    ) {
        for state in play(seed, players, &script) {
            assert_consistent(&state);
        }
    }

    /// Each non-terminal transition hands the turn to the next seat.
    #[test]
    fn prop_turn_rotates(
        seed in any::<u64>(),
        players in 2usize..=8,
        script in prop::collection::vec(any::<usize>(), 1..80),
    ) {
        let visited = play(seed, players, &script);
        for pair in visited.windows(2) {
            let expected = pair[0].current_player.next(players);
            prop_assert_eq!(pair[1].current_player, expected);
        }
    }

    /// The same seed and script reproduce the same game.
    #[test]
    fn prop_deterministic(
        seed in any::<u64>(),
        players in 2usize..=8,
        script in prop::collection::vec(any::<usize>(), 0..80),
    ) {
        prop_assert_eq!(play(seed, players, &script), play(seed, players, &script));
    }

    /// Every offered action is accepted and leaves the input untouched.
    #[test]
    fn prop_legal_actions_apply(
        seed in any::<u64>(),
        players in 2usize..=8,
        script in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let mut engine = CamelUp::new(seed);
        let state = play(seed, players, &script).pop().unwrap();
        let snapshot = state.clone();

        for action in engine.legal_actions(&state) {
            let next = engine.apply_action(&state, &action);
            prop_assert!(next.is_ok(), "{:?} rejected", action);
            assert_consistent(&next.unwrap());
        }
        prop_assert_eq!(state, snapshot);
    }

    /// Once the race is over, every action returns the same state.
    #[test]
    fn prop_terminal_is_fixed_point(seed in any::<u64>(), players in 2usize..=8) {
        let mut engine = CamelUp::new(seed);
        let mut state = engine.new_game(players).unwrap();
        let mut turns = 0;
        while !state.terminal {
            state = engine.apply_action(&state, &Action::RollDie {}).unwrap();
            turns += 1;
            prop_assert!(turns < 500);
        }

        prop_assert!(engine.legal_actions(&state).is_empty());
        for action in [Action::RollDie {}, Action::take_leg_ticket(Camel::Blue), Action::bet_winner(Camel::Green)] {
            prop_assert_eq!(&engine.apply_action(&state, &action).unwrap(), &state);
        }
    }
}
