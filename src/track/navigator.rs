//! Map traversal
//!
//!     The navigator drives a walk from the start marker to the end marker.
//!     At every step there must be exactly one legal continuation:
//!
//!         1. Going straight is preferred. A straight move is legal when the
//!            square ahead matches the direction of travel, or - the underpass
//!            rule - when the straight run crosses perpendicular track squares
//!            and eventually reaches a matching one.
//!
//!         2. If straight is not legal and the current square is a crossroads
//!            (`+`, `@`, `x`, or a letter), any non-backtracking neighbour
//!            whose square matches the facing needed to reach it is a
//!            candidate. U-turns are never legal.
//!
//!         3. A plain `-` or `|` square that cannot continue straight has no
//!            candidates at all.
//!
//!     Zero remaining candidates is a dead end, more than one is an ambiguous
//!     branch; both fail the walk with distinct errors. A walk also carries a
//!     step budget of one more than the number of distinct (position, facing)
//!     states: exceeding it proves a revisited state, so the track loops
//!     without ever reaching the end marker.

use std::fmt;

use crate::track::collector::PathCollector;
use crate::track::geometry::{Facing, Location, NonAdjacentError, Position};
use crate::track::grid::Grid;

/// Errors that end a walk without reaching the end marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// Start or end marker count is not exactly one
    InvalidEndpoints { starts: usize, ends: usize },
    /// Zero or multiple legal initial facings from the start marker
    AmbiguousStart { candidates: usize },
    /// No legal next location
    DeadEnd { position: Position },
    /// More than one legal next location
    AmbiguousBranch { position: Position, candidates: usize },
    /// The step budget ran out, so the track loops without reaching the end
    Cycle { steps: usize },
    /// Internal geometry misuse; a programming error if it ever surfaces
    NonAdjacent(NonAdjacentError),
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::InvalidEndpoints { starts, ends } => write!(
                f,
                "a map needs exactly one start (@) and one end (x), found {} and {}",
                starts, ends
            ),
            WalkError::AmbiguousStart { candidates } => write!(
                f,
                "expected exactly 1 initial facing from the start square, found {}",
                candidates
            ),
            WalkError::DeadEnd { position } => {
                write!(f, "no way forward from {}", position)
            }
            WalkError::AmbiguousBranch {
                position,
                candidates,
            } => write!(
                f,
                "expected exactly 1 next location from {}, found {}",
                position, candidates
            ),
            WalkError::Cycle { steps } => write!(
                f,
                "gave up after {} steps, the track loops without reaching the end",
                steps
            ),
            WalkError::NonAdjacent(inner) => inner.fmt(f),
        }
    }
}

impl std::error::Error for WalkError {}

impl From<NonAdjacentError> for WalkError {
    fn from(inner: NonAdjacentError) -> WalkError {
        WalkError::NonAdjacent(inner)
    }
}

fn endpoint_counts(grid: &Grid) -> (usize, usize) {
    let starts = grid.cells().filter(|(_, cell)| cell.is_start()).count();
    let ends = grid.cells().filter(|(_, cell)| cell.is_end()).count();
    (starts, ends)
}

/// Whether a map has exactly one start and one end marker. Any other count
/// could permit more than one path, so it fails the walk up front.
pub fn has_valid_endpoints(grid: &Grid) -> bool {
    endpoint_counts(grid) == (1, 1)
}

/// Whether `candidate` is a legal single step away from `from`.
///
/// The candidate must be in bounds, at Manhattan distance exactly 1, and its
/// square must match the direction of travel into it. A straight move onto a
/// perpendicular track square is also legal when the run ahead eventually
/// reaches a matching square (crossing an intersection without turning).
pub fn is_valid_location(grid: &Grid, candidate: Location, from: Location) -> bool {
    let Some(cell) = candidate.on_grid(grid) else {
        return false;
    };
    if from.position.manhattan_distance(candidate.position) != 1 {
        return false;
    }
    if candidate.matches_facing(cell) {
        return true;
    }
    candidate.facing == from.facing
        && !cell.is_blank()
        && from
            .walk_until(grid, |ahead| from.matches_facing(ahead))
            .is_some()
}

/// The raw continuation candidates from a location, straight bias applied.
/// Ties always resolve to "keep straight" when straight is legal.
pub fn possible_next_locations(grid: &Grid, location: Location) -> Vec<Location> {
    let straight = location.next();
    if is_valid_location(grid, straight, location) {
        return vec![straight];
    }

    match location.on_grid(grid) {
        Some(cell) if cell.any_direction() => location
            .neighbours()
            .into_iter()
            .filter(|neighbour| neighbour.facing != location.opposite_facing())
            .collect(),
        // A plain track square that cannot continue straight goes nowhere.
        _ => Vec::new(),
    }
}

/// The unique legal next location, or the reason there is none.
pub fn next_location(grid: &Grid, location: Location) -> Result<Location, WalkError> {
    let candidates: Vec<Location> = possible_next_locations(grid, location)
        .into_iter()
        .filter(|candidate| is_valid_location(grid, *candidate, location))
        .collect();

    match candidates.as_slice() {
        [unique] => Ok(*unique),
        [] => Err(WalkError::DeadEnd {
            position: location.position,
        }),
        _ => Err(WalkError::AmbiguousBranch {
            position: location.position,
            candidates: candidates.len(),
        }),
    }
}

/// Locate the start marker and the unique legal facing to leave it with.
pub fn find_start_location(grid: &Grid) -> Result<Location, WalkError> {
    for (position, cell) in grid.cells() {
        if !cell.is_start() {
            continue;
        }

        // Probe location with a placeholder facing; only its geometry is used.
        let probe = Location::new(position, Facing::Left);
        let mut facings = Vec::new();
        for neighbour in probe.neighbours() {
            let Some(neighbour_cell) = neighbour.on_grid(grid) else {
                continue;
            };
            let facing = probe.facing_to(neighbour.position)?;
            let matching = if facing.is_vertical() {
                neighbour_cell.valid_vertical()
            } else {
                neighbour_cell.valid_horizontal()
            };
            if matching {
                facings.push(facing);
            }
        }

        return match facings.as_slice() {
            [facing] => Ok(Location::new(position, *facing)),
            _ => Err(WalkError::AmbiguousStart {
                candidates: facings.len(),
            }),
        };
    }

    let (starts, ends) = endpoint_counts(grid);
    Err(WalkError::InvalidEndpoints { starts, ends })
}

/// Walk a map from its start marker to its end marker.
///
/// Visits the current square, stops successfully on the end marker, and
/// otherwise advances to the unique legal next location. The returned
/// collector holds the visited squares and the letters in first-visit order.
pub fn walk(grid: &Grid) -> Result<PathCollector, WalkError> {
    let (starts, ends) = endpoint_counts(grid);
    if (starts, ends) != (1, 1) {
        return Err(WalkError::InvalidEndpoints { starts, ends });
    }

    let mut collector = PathCollector::new();
    let mut location = find_start_location(grid)?;

    // One step per distinct (position, facing) state, plus one. More steps
    // than that proves a revisited state, i.e. a genuine cycle.
    let budget = grid.height() * grid.width() * 4 + 1;

    for _ in 0..budget {
        let Some(cell) = location.on_grid(grid) else {
            return Err(WalkError::DeadEnd {
                position: location.position,
            });
        };

        collector.visit(cell);
        if cell.is_end() {
            return Ok(collector);
        }

        location = next_location(grid, location)?;
    }

    Err(WalkError::Cycle { steps: budget })
}
