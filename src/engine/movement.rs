//! Dice and camel movement.
//!
//! A roll draws one of the remaining camel dice and a distance. The camel
//! moves with everything stacked on it; landing on a desert tile pays the
//! tile's owner and shifts the group one more tile forward (on top) or back
//! (underneath).

use tracing::debug;

use crate::board::Landing;
use crate::core::action::DesertFace;
use crate::core::camel::Camel;
use crate::core::config::GameConfig;
use crate::core::error::InvariantViolation;
use crate::core::rng::GameRng;
use crate::core::state::{DieRoll, GameState};

/// Draw one available die for the current player and roll its distance.
///
/// Marks the die as used.
pub(crate) fn roll_die(
    state: &mut GameState,
    rng: &mut GameRng,
    config: &GameConfig,
) -> Result<DieRoll, InvariantViolation> {
    let camel = rng
        .pick(&state.available_dice())
        .ok_or(InvariantViolation::NoDiceAvailable)?;
    let distance = rng.roll_distance(config.die_faces);
    state.dice_available[camel] = false;

    Ok(DieRoll {
        player: state.current_player,
        camel,
        distance,
    })
}

/// Move `camel` and the camels above it `distance` tiles.
///
/// Returns the tile the group ends on.
pub(crate) fn move_camel(
    state: &mut GameState,
    camel: Camel,
    distance: u8,
    config: &GameConfig,
) -> Result<usize, InvariantViolation> {
    let (from, carried) = state.track.lift(camel)?;
    let finish = state.finish_tile();
    let landed = (from + usize::from(distance)).min(finish);

    let desert = state
        .desert_tile_owner(landed)
        .and_then(|owner| state.desert_tile(owner).map(|tile| (owner, tile)))
        .filter(|(_, tile)| tile.tile == landed);

    let (destination, landing) = match desert {
        Some((owner, tile)) => {
            state.credit(owner, config.desert_toll);
            let shifted = landed
                .saturating_add_signed(isize::from(tile.face.delta()))
                .min(finish);
            let landing = match tile.face {
                DesertFace::Oasis => Landing::OnTop,
                DesertFace::Mirage => Landing::Underneath,
            };
            debug!(
                %camel,
                tile = landed,
                %owner,
                face = ?tile.face,
                destination = shifted,
                "camel hit desert tile"
            );
            (shifted, landing)
        }
        None => (landed, Landing::OnTop),
    };

    state.track.land(destination, &carried, landing);
    Ok(destination)
}

/// Opening placement: roll every die once and put each camel on the tile
/// matching its roll, then return all dice to the pyramid.
pub(crate) fn place_opening(state: &mut GameState, rng: &mut GameRng, config: &GameConfig) {
    while let Some(camel) = rng.pick(&state.available_dice()) {
        let distance = rng.roll_distance(config.die_faces);
        state.dice_available[camel] = false;
        state.track.place(camel, usize::from(distance));
    }
    state.dice_available.fill(true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camel::CAMEL_COUNT;
    use crate::core::player::PlayerId;

    fn state_with(placements: &[(Camel, usize)]) -> GameState {
        let mut state = GameState::new(3, &GameConfig::default());
        for &(camel, tile) in placements {
            state.track.place(camel, tile);
        }
        state
    }

    #[test]
    fn test_plain_move_carries_stack() {
        let config = GameConfig::default();
        let mut state = state_with(&[
            (Camel::Blue, 2),
            (Camel::Green, 2),
            (Camel::Yellow, 4),
        ]);

        let dest = move_camel(&mut state, Camel::Blue, 2, &config).unwrap();

        assert_eq!(dest, 4);
        assert_eq!(state.track.stack(4), vec![Camel::Yellow, Camel::Blue, Camel::Green]);
        assert!(state.track.is_empty(2));
    }

    #[test]
    fn test_move_clamps_at_finish() {
        let config = GameConfig::default();
        let mut state = state_with(&[(Camel::White, 15)]);

        let dest = move_camel(&mut state, Camel::White, 3, &config).unwrap();

        assert_eq!(dest, 16);
    }

    #[test]
    fn test_oasis_lands_on_top_and_pays_owner() {
        let config = GameConfig::default();
        let mut state = state_with(&[(Camel::Blue, 3), (Camel::Orange, 6)]);
        state.set_desert_tile(PlayerId::new(2), 5, DesertFace::Oasis);

        let dest = move_camel(&mut state, Camel::Blue, 2, &config).unwrap();

        assert_eq!(dest, 6);
        assert_eq!(state.track.stack(6), vec![Camel::Orange, Camel::Blue]);
        assert_eq!(state.money[PlayerId::new(2)], 4);
    }

    #[test]
    fn test_mirage_slides_underneath() {
        let config = GameConfig::default();
        let mut state = state_with(&[(Camel::Blue, 3), (Camel::Green, 4), (Camel::White, 3)]);
        state.set_desert_tile(PlayerId::new(0), 5, DesertFace::Mirage);

        // Blue carries White from 3 to 5, then falls back under Green on 4.
        let dest = move_camel(&mut state, Camel::Blue, 2, &config).unwrap();

        assert_eq!(dest, 4);
        assert_eq!(state.track.stack(4), vec![Camel::Blue, Camel::White, Camel::Green]);
        assert_eq!(state.money[PlayerId::new(0)], 4);
    }

    #[test]
    fn test_mirage_onto_start_tile() {
        let config = GameConfig::default();
        let mut state = state_with(&[(Camel::Yellow, 0), (Camel::Blue, 0)]);
        state.set_desert_tile(PlayerId::new(1), 1, DesertFace::Mirage);

        let dest = move_camel(&mut state, Camel::Blue, 1, &config).unwrap();

        assert_eq!(dest, 0);
        assert_eq!(state.track.stack(0), vec![Camel::Blue, Camel::Yellow]);
    }

    #[test]
    fn test_roll_die_uses_available_dice_only() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(3);
        let mut state = state_with(&[]);
        state.dice_available.fill(false);
        state.dice_available[Camel::Orange] = true;

        let roll = roll_die(&mut state, &mut rng, &config).unwrap();

        assert_eq!(roll.camel, Camel::Orange);
        assert!((1..=3).contains(&roll.distance));
        assert!(!state.has_available_die());
        assert_eq!(
            roll_die(&mut state, &mut rng, &config),
            Err(InvariantViolation::NoDiceAvailable)
        );
    }

    #[test]
    fn test_opening_places_every_camel_near_start() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(11);
        let mut state = state_with(&[]);

        place_opening(&mut state, &mut rng, &config);

        assert_eq!(state.camel_count_on_board(), CAMEL_COUNT);
        for camel in Camel::ALL {
            let (tile, _) = state.track.locate(camel).unwrap();
            assert!((1..=3).contains(&tile));
        }
        assert_eq!(state.available_dice().len(), CAMEL_COUNT);
    }
}
