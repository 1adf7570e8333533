//! Directional geometry
//!
//!     Positions are signed (row, column) pairs so that the neighbours of an
//!     edge square are representable; any position must pass a bounds check
//!     before its cell is read. A [`Location`] is an immutable position plus
//!     facing - stepping produces a new value, nothing is mutated in place.

use std::fmt;

use crate::track::cell::Cell;
use crate::track::grid::Grid;

/// A cardinal direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Up,
    Right,
    Down,
    Left,
}

impl Facing {
    pub fn opposite(self) -> Facing {
        match self {
            Facing::Up => Facing::Down,
            Facing::Right => Facing::Left,
            Facing::Down => Facing::Up,
            Facing::Left => Facing::Right,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Facing::Up | Facing::Down)
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }
}

/// A point in a grid, as (row, column), 0-indexed. Signed so off-grid
/// neighbours exist as values; reading a cell is always bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub fn new(row: isize, col: isize) -> Position {
        Position { row, col }
    }

    pub fn manhattan_distance(self, other: Position) -> usize {
        ((self.row - other.row).abs() + (self.col - other.col).abs()) as usize
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error for a facing requested towards a point that is not one of the four
/// neighbours. Surfacing from a walk indicates a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonAdjacentError {
    pub from: Position,
    pub to: Position,
}

impl fmt::Display for NonAdjacentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot determine facing from {} towards non-adjacent point {}",
            self.from, self.to
        )
    }
}

impl std::error::Error for NonAdjacentError {}

/// A position plus the facing used to arrive there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub position: Position,
    pub facing: Facing,
}

impl Location {
    pub fn new(position: Position, facing: Facing) -> Location {
        Location { position, facing }
    }

    pub fn up(self) -> Location {
        Location::new(
            Position::new(self.position.row - 1, self.position.col),
            Facing::Up,
        )
    }

    pub fn right(self) -> Location {
        Location::new(
            Position::new(self.position.row, self.position.col + 1),
            Facing::Right,
        )
    }

    pub fn down(self) -> Location {
        Location::new(
            Position::new(self.position.row + 1, self.position.col),
            Facing::Down,
        )
    }

    pub fn left(self) -> Location {
        Location::new(
            Position::new(self.position.row, self.position.col - 1),
            Facing::Left,
        )
    }

    /// The four step results, in up/right/down/left order.
    pub fn neighbours(self) -> [Location; 4] {
        [self.up(), self.right(), self.down(), self.left()]
    }

    pub fn opposite_facing(self) -> Facing {
        self.facing.opposite()
    }

    pub fn is_vertical(self) -> bool {
        self.facing.is_vertical()
    }

    pub fn is_horizontal(self) -> bool {
        self.facing.is_horizontal()
    }

    /// Whether a cell is legal to occupy while travelling in this facing.
    pub fn matches_facing(self, cell: Cell) -> bool {
        if self.is_vertical() {
            cell.valid_vertical()
        } else {
            cell.valid_horizontal()
        }
    }

    /// Bounds-checked cell lookup for this location's position.
    pub fn on_grid(self, grid: &Grid) -> Option<Cell> {
        grid.cell(self.position)
    }

    pub fn is_on_grid(self, grid: &Grid) -> bool {
        self.on_grid(grid).is_some()
    }

    /// Step one square forward in the current facing.
    pub fn next(self) -> Location {
        match self.facing {
            Facing::Up => self.up(),
            Facing::Right => self.right(),
            Facing::Down => self.down(),
            Facing::Left => self.left(),
        }
    }

    /// Advance in the current facing until a cell satisfies the predicate,
    /// returning that location. Gives up at the grid edge or a blank cell.
    pub fn walk_until<F>(self, grid: &Grid, predicate: F) -> Option<Location>
    where
        F: Fn(Cell) -> bool,
    {
        let mut current = self.next();
        loop {
            let cell = current.on_grid(grid)?;
            if cell.is_blank() {
                return None;
            }
            if predicate(cell) {
                return Some(current);
            }
            current = current.next();
        }
    }

    /// The facing that points from this location's position towards an
    /// adjacent point.
    pub fn facing_to(self, target: Position) -> Result<Facing, NonAdjacentError> {
        let row_delta = target.row - self.position.row;
        let col_delta = target.col - self.position.col;
        match (row_delta, col_delta) {
            (-1, 0) => Ok(Facing::Up),
            (1, 0) => Ok(Facing::Down),
            (0, 1) => Ok(Facing::Right),
            (0, -1) => Ok(Facing::Left),
            _ => Err(NonAdjacentError {
                from: self.position,
                to: target,
            }),
        }
    }
}
