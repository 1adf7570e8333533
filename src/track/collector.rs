//! Walk output accumulation

use serde::Serialize;

use crate::track::cell::Cell;

/// Accumulates a walk's output: every visited square in order, plus the
/// letters in first-visit order with duplicates dropped. Created empty for a
/// walk, written once per step, read after the walk ends.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PathCollector {
    path: Vec<Cell>,
    letters: Vec<char>,
}

/// The user-facing result of a finished walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    pub letters: String,
    pub path: String,
}

impl PathCollector {
    pub fn new() -> PathCollector {
        PathCollector::default()
    }

    /// Record a visited square. Blank cells are off-track and never visited;
    /// the parser guarantees everything else is a recognized cell.
    pub fn visit(&mut self, cell: Cell) {
        debug_assert!(!cell.is_blank(), "walked onto a blank square");

        if let Cell::Letter(letter) = cell {
            if !self.letters.contains(&letter) {
                self.letters.push(letter);
            }
        }
        self.path.push(cell);
    }

    /// The visited letters, first-visit order, each at most once.
    pub fn letters(&self) -> String {
        self.letters.iter().collect()
    }

    /// Every visited square, in visit order.
    pub fn path(&self) -> String {
        self.path.iter().map(|cell| cell.to_string()).collect()
    }

    pub fn report(&self) -> WalkReport {
        WalkReport {
            letters: self.letters(),
            path: self.path(),
        }
    }
}
