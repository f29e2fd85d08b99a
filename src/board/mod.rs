//! Track representation and stacked-camel movement.

pub mod track;

pub use track::{CamelStack, Landing, Track};
