//! The race track: tiles of stacked camels.
//!
//! Each tile holds its camels bottom to top. A camel carries everything
//! stacked above it when it moves, so movement is a `lift` followed by a
//! `land` at the destination.
//!
//! ## Usage
//!
//! ```
//! use camel_race::board::{Landing, Track};
//! use camel_race::core::Camel;
//!
//! let mut track = Track::new(17);
//! track.place(Camel::Blue, 2);
//! track.place(Camel::Green, 2);
//! track.place(Camel::White, 3);
//!
//! // Blue carries Green along.
//! let (from, carried) = track.lift(Camel::Blue).unwrap();
//! assert_eq!(from, 2);
//! track.land(3, &carried, Landing::OnTop);
//!
//! assert_eq!(track.race_order().to_vec(), vec![Camel::Green, Camel::Blue, Camel::White]);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::camel::{Camel, CAMEL_COUNT};
use crate::core::error::InvariantViolation;

/// A moving group of camels, bottom to top.
pub type CamelStack = SmallVec<[Camel; CAMEL_COUNT]>;

/// Where an arriving stack goes relative to camels already on the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Landing {
    /// Arriving camels end up above the existing stack.
    OnTop,
    /// Arriving camels slide beneath the existing stack.
    Underneath,
}

/// Fixed-length track of camel stacks.
///
/// Backed by `im::Vector` so cloning a track between game states is O(1)
/// and never aliases a mutable stack.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    tiles: Vector<Vector<Camel>>,
}

impl Track {
    /// Create an empty track.
    #[must_use]
    pub fn new(tile_count: usize) -> Self {
        Self {
            tiles: (0..tile_count).map(|_| Vector::new()).collect(),
        }
    }

    /// Number of tiles, start and finish included.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Index of the finish tile.
    #[must_use]
    pub fn finish_tile(&self) -> usize {
        self.tiles.len().saturating_sub(1)
    }

    /// Camels on a tile, bottom to top. Empty for tiles off the track.
    #[must_use]
    pub fn stack(&self, tile: usize) -> Vec<Camel> {
        self.tiles
            .get(tile)
            .map(|stack| stack.iter().copied().collect())
            .unwrap_or_default()
    }

    /// True if no camel stands on the tile.
    #[must_use]
    pub fn is_empty(&self, tile: usize) -> bool {
        self.tiles.get(tile).map_or(true, Vector::is_empty)
    }

    /// Total camels on the track.
    #[must_use]
    pub fn camel_count(&self) -> usize {
        self.tiles.iter().map(Vector::len).sum()
    }

    /// Find a camel: `(tile, height)` with height 0 at the bottom.
    #[must_use]
    pub fn locate(&self, camel: Camel) -> Option<(usize, usize)> {
        self.tiles.iter().enumerate().find_map(|(tile, stack)| {
            stack
                .iter()
                .position(|&c| c == camel)
                .map(|height| (tile, height))
        })
    }

    /// Put a camel on top of a tile. Tiles past the finish clamp to it.
    pub fn place(&mut self, camel: Camel, tile: usize) {
        self.land(tile, &[camel], Landing::OnTop);
    }

    /// Remove a camel and every camel above it.
    ///
    /// Returns the tile they left and the lifted group, bottom to top.
    pub fn lift(&mut self, camel: Camel) -> Result<(usize, CamelStack), InvariantViolation> {
        let (tile, height) = self
            .locate(camel)
            .ok_or(InvariantViolation::CamelMissing(camel))?;

        let carried = match self.tiles.get_mut(tile) {
            Some(stack) => stack.split_off(height),
            None => return Err(InvariantViolation::CamelMissing(camel)),
        };

        Ok((tile, carried.iter().copied().collect()))
    }

    /// Set a group of camels down on a tile. Tiles past the finish clamp to it.
    pub fn land(&mut self, tile: usize, carried: &[Camel], landing: Landing) {
        let tile = tile.min(self.finish_tile());
        let Some(stack) = self.tiles.get_mut(tile) else {
            return;
        };

        match landing {
            Landing::OnTop => stack.extend(carried.iter().copied()),
            Landing::Underneath => {
                let mut below: Vector<Camel> = carried.iter().copied().collect();
                below.append(stack.clone());
                *stack = below;
            }
        }
    }

    /// Camels from most to least advanced.
    ///
    /// Further along wins; on a shared tile, higher in the stack wins.
    #[must_use]
    pub fn race_order(&self) -> SmallVec<[Camel; CAMEL_COUNT]> {
        self.tiles
            .iter()
            .rev()
            .flat_map(|stack| stack.iter().rev().copied())
            .collect()
    }
}
