//! Cell definitions for track maps
//!
//! This module defines the cell roles a map square can take, using the logos
//! derive macro so the enum doubles as the lexer token set for parsing.
//! The predicates below are the single source of truth for which cells are
//! legal in which direction of travel; the navigator never duplicates them.

use std::fmt;

use logos::Logos;

/// A single square of a track map
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Empty square, not part of the track
    #[token(" ")]
    Blank,

    /// Horizontal track segment
    #[token("-")]
    Horizontal,

    /// Vertical track segment
    #[token("|")]
    Vertical,

    /// Junction square where turning is legal
    #[token("+")]
    Crossroads,

    /// Start marker, exactly one per valid map
    #[token("@")]
    Start,

    /// End marker, exactly one per valid map
    #[token("x")]
    End,

    /// Letter node, collected during the walk (uppercase only)
    #[regex("[A-Z]", |lex| lex.slice().as_bytes()[0] as char)]
    Letter(char),
}

impl Cell {
    pub fn is_start(self) -> bool {
        matches!(self, Cell::Start)
    }

    pub fn is_end(self) -> bool {
        matches!(self, Cell::End)
    }

    pub fn is_letter(self) -> bool {
        matches!(self, Cell::Letter(_))
    }

    pub fn is_blank(self) -> bool {
        matches!(self, Cell::Blank)
    }

    /// Legal to occupy while travelling vertically
    pub fn valid_vertical(self) -> bool {
        matches!(
            self,
            Cell::Vertical | Cell::Crossroads | Cell::Letter(_) | Cell::End
        )
    }

    /// Legal to occupy while travelling horizontally
    pub fn valid_horizontal(self) -> bool {
        matches!(
            self,
            Cell::Horizontal | Cell::Crossroads | Cell::Letter(_) | Cell::End
        )
    }

    /// Cells where a turn is always legal in principle
    pub fn any_direction(self) -> bool {
        matches!(
            self,
            Cell::Crossroads | Cell::Start | Cell::End | Cell::Letter(_)
        )
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Cell::Blank => ' ',
            Cell::Horizontal => '-',
            Cell::Vertical => '|',
            Cell::Crossroads => '+',
            Cell::Start => '@',
            Cell::End => 'x',
            Cell::Letter(letter) => *letter,
        };
        write!(f, "{}", ch)
    }
}
