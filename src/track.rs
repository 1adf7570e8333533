//! Track map processing
//!
//!     This module hosts the complete pipeline from raw map text to a finished
//!     walk. The stages are:
//!
//!         1. Classification. Every character of the map is one [`Cell`] with a
//!            fixed role. The cell module is the single source of truth for
//!            which cells are legal in which direction of travel; nothing else
//!            re-implements character classes. See [cell](cell).
//!
//!         2. Parsing. Raw text becomes a validated, rectangular [`Grid`] or a
//!            [`ParseError`] naming the offending row and column. Parsing is a
//!            pure function of its input and re-serializing an accepted grid
//!            reproduces the text exactly. See [grid](grid).
//!
//!         3. Walking. The navigator drives an immutable chain of
//!            [`Location`] values from the start marker to the end marker,
//!            requiring a single legal continuation at every step. Zero legal
//!            continuations is a dead end, more than one is an ambiguous
//!            branch, and both fail the walk. See [navigator](navigator).
//!
//!     The walk's output accumulates in a [`PathCollector`]: the full visited
//!     square sequence plus the letters in first-visit order. See
//!     [collector](collector).
//!
//! Terminology
//!
//!     - square/cell: one character of the map
//!     - facing: the current cardinal direction of travel
//!     - crossroads: a cell where any non-backtracking turn is legal in
//!       principle (`+`, `@`, `x`, or a letter)

pub mod cell;
pub mod collector;
pub mod geometry;
pub mod grid;
pub mod navigator;

pub use cell::Cell;
pub use collector::{PathCollector, WalkReport};
pub use geometry::{Facing, Location, NonAdjacentError, Position};
pub use grid::{parse, Grid, ParseError};
pub use navigator::{walk, WalkError};
