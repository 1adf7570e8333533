//! # trackwalk
//!
//! A parser and deterministic walker for ASCII track maps.
//!
//! A map is a rectangular character grid describing a track network:
//!
//!     @---A---+
//!             |
//!     x-B-+   C
//!         |   |
//!         +---+
//!
//! [`parse`](track::parse) validates the text into a [`Grid`](track::Grid),
//! and [`walk`](track::walk) follows the track from the unique `@` start
//! marker to the unique `x` end marker, collecting every letter it passes
//! (once, in first-visit order) and the full sequence of squares traversed.

pub mod track;

pub use track::{parse, walk, Cell, Facing, Grid, Location, ParseError, Position, WalkError};
