//! Map parsing
//!
//!     Raw text becomes a validated [`Grid`] of [`Cell`]s. Rows are split on
//!     line breaks and each row is lexed into one cell per character; the
//!     blank space is a real cell, not skipped input. A grid is rejected when
//!
//!         - the input has zero rows,
//!         - rows have unequal lengths, or
//!         - any character is not part of the map alphabet
//!           (`A-Z @ x - | + ' '`), reported with its row and column.
//!
//!     Parsing is a pure function of its input. `Grid` implements `Display`
//!     by joining rows with line breaks, so any accepted text round-trips
//!     byte for byte.

use std::fmt;

use logos::Logos;

use crate::track::cell::Cell;
use crate::track::geometry::Position;

/// A validated rectangular map of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

/// Errors that make a map structurally unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input had no rows at all
    Empty,
    /// A row's length differs from the first row's
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet
    InvalidCell { row: usize, col: usize, found: char },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "a map must have at least one row"),
            ParseError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} squares, expected {}",
                row, found, expected
            ),
            ParseError::InvalidCell { row, col, found } => {
                write!(f, "invalid square '{}' at position ({}, {})", found, row, col)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse raw map text into a validated grid.
///
/// This is the only way to obtain a `Grid` from text; everything the
/// navigator assumes about cell validity is established here.
pub fn parse(text: &str) -> Result<Grid, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut rows = Vec::new();
    for (row, line) in text.split('\n').enumerate() {
        let mut cells = Vec::new();
        let mut lexer = Cell::lexer(line);
        while let Some(result) = lexer.next() {
            match result {
                Ok(cell) => cells.push(cell),
                Err(()) => {
                    let span = lexer.span();
                    let col = line[..span.start].chars().count();
                    let found = line[span.start..].chars().next().unwrap_or('?');
                    return Err(ParseError::InvalidCell { row, col, found });
                }
            }
        }
        rows.push(cells);
    }

    let expected = rows.first().map(Vec::len).unwrap_or(0);
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(ParseError::Ragged {
                row,
                expected,
                found: cells.len(),
            });
        }
    }

    Ok(Grid { rows })
}

impl Grid {
    /// Build a grid directly from rows. The caller is responsible for
    /// rectangularity; `parse` is the checked entry point.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Grid {
        Grid { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Bounds-checked cell lookup; `None` for any off-grid position.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        if position.row < 0 || position.col < 0 {
            return None;
        }
        self.rows
            .get(position.row as usize)?
            .get(position.col as usize)
            .copied()
    }

    /// All cells in row-major order with their positions.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Position::new(row as isize, col as isize), *cell))
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_rectangular_map() {
        let grid = parse("@-x\n   ").expect("valid map");
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.cell(Position::new(0, 0)), Some(Cell::Start));
        assert_eq!(grid.cell(Position::new(0, 2)), Some(Cell::End));
        assert_eq!(grid.cell(Position::new(1, 1)), Some(Cell::Blank));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse(""), Err(ParseError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            parse("@--\n|"),
            Err(ParseError::Ragged {
                row: 1,
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_invalid_characters_with_position() {
        assert_eq!(
            parse("@-x\n 9 "),
            Err(ParseError::InvalidCell {
                row: 1,
                col: 1,
                found: '9'
            })
        );
    }

    #[test]
    fn rejects_lowercase_letters() {
        assert_eq!(
            parse("@ax"),
            Err(ParseError::InvalidCell {
                row: 0,
                col: 1,
                found: 'a'
            })
        );
    }

    #[test]
    fn reserializes_accepted_text_exactly() {
        let text = "  @---A---+\n          |\n  x-B-+   C\n      |   |\n      +---+";
        let grid = parse(text).expect("valid map");
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn off_grid_lookups_are_none() {
        let grid = parse("@-x").expect("valid map");
        assert_eq!(grid.cell(Position::new(-1, 0)), None);
        assert_eq!(grid.cell(Position::new(0, 3)), None);
        assert_eq!(grid.cell(Position::new(1, 0)), None);
    }

    #[test]
    fn cells_iterates_row_major() {
        let grid = parse("@-\n x").expect("valid map");
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(
            cells,
            vec![
                (Position::new(0, 0), Cell::Start),
                (Position::new(0, 1), Cell::Horizontal),
                (Position::new(1, 0), Cell::Blank),
                (Position::new(1, 1), Cell::End),
            ]
        );
    }
}
