//! Camel identity and per-camel data storage.
//!
//! ## Camel
//!
//! The five racers. Each camel has a stable index (0-4) that doubles as its
//! wire representation.
//!
//! ## CamelMap
//!
//! Fixed-size per-camel storage backed by an array, indexed by `Camel`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::ActionDecodeError;

/// Number of racing camels.
pub const CAMEL_COUNT: usize = 5;

/// A racing camel.
///
/// Serializes as its index so actions keep a compact wire shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Camel {
    Blue,
    Green,
    Yellow,
    Orange,
    White,
}

impl Camel {
    /// All camels in index order.
    pub const ALL: [Camel; CAMEL_COUNT] = [
        Camel::Blue,
        Camel::Green,
        Camel::Yellow,
        Camel::Orange,
        Camel::White,
    ];

    /// Get the 0-based camel index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a camel by index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Camel> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable camel name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Camel::Blue => "Blue",
            Camel::Green => "Green",
            Camel::Yellow => "Yellow",
            Camel::Orange => "Orange",
            Camel::White => "White",
        }
    }
}

impl std::fmt::Display for Camel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Camel {
    type Error = ActionDecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Camel::from_index(usize::from(value)).ok_or(ActionDecodeError::UnknownCamel(value))
    }
}

impl From<Camel> for u8 {
    fn from(camel: Camel) -> u8 {
        camel as u8
    }
}

/// Per-camel data storage with O(1) access.
///
/// ```
/// use camel_race::core::{Camel, CamelMap};
///
/// let mut remaining: CamelMap<usize> = CamelMap::with_value(3);
/// remaining[Camel::Green] -= 1;
///
/// assert_eq!(remaining[Camel::Green], 2);
/// assert_eq!(remaining[Camel::Blue], 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CamelMap<T> {
    data: [T; CAMEL_COUNT],
}

impl<T> CamelMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Camel) -> T) -> Self {
        Self {
            data: Camel::ALL.map(factory),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Overwrite every entry with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Iterate over (Camel, &T) pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Camel, &T)> {
        Camel::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over values in camel index order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Camel> for CamelMap<T> {
    type Output = T;

    fn index(&self, camel: Camel) -> &Self::Output {
        &self.data[camel.index()]
    }
}

impl<T> IndexMut<Camel> for CamelMap<T> {
    fn index_mut(&mut self, camel: Camel) -> &mut Self::Output {
        &mut self.data[camel.index()]
    }
}
