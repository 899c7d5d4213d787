//! Board and rules engine: pure 3x3 grid transitions and win/draw detection.

use std::fmt;
use std::str::FromStr;

use crate::domain::coordinate::Coordinate;
use crate::errors::domain::{DomainError, RuleViolation};

/// Player marks. Exactly two, mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character stored form ("X" / "O").
    pub const fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            other => Err(DomainError::infra_corrupt(format!(
                "unknown mark in stored game: {other:?}"
            ))),
        }
    }
}

/// The 8 canonical lines: 3 rows, 3 columns, 2 diagonals.
const WIN_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// 3x3 grid of cells; `None` = unmarked.
///
/// Coordinates are validated at the [`Coordinate`] boundary, so every access
/// through a `Coordinate` is in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board([[Option<Mark>; 3]; 3]);

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cell(&self, coord: Coordinate) -> Option<Mark> {
        self.0[coord.row()][coord.col()]
    }

    /// Place `mark` at `coord`. Fails with `InvalidMove` if the cell is
    /// already occupied; the board is untouched on failure.
    pub fn apply_mark(&mut self, coord: Coordinate, mark: Mark) -> Result<(), DomainError> {
        let cell = &mut self.0[coord.row()][coord.col()];
        if cell.is_some() {
            return Err(DomainError::rule(RuleViolation::InvalidMove));
        }
        *cell = Some(mark);
        Ok(())
    }

    /// True iff some canonical line is fully occupied by `mark`.
    ///
    /// All 8 lines are checked independently; no assumption about fullness.
    pub fn is_winner(&self, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.0[r][c] == Some(mark)))
    }

    pub fn is_full(&self) -> bool {
        self.0
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Coordinates of unmarked cells, row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|&coord| self.cell(coord).is_none())
            .collect()
    }

    /// Stored form: 3x3 grid of single-character strings, "" = unmarked.
    pub fn to_stored(&self) -> [[String; 3]; 3] {
        self.0.map(|row| {
            row.map(|cell| cell.map(|m| m.as_str().to_string()).unwrap_or_default())
        })
    }

    pub fn from_stored(cells: &[[String; 3]; 3]) -> Result<Self, DomainError> {
        let mut board = Self::empty();
        for (r, row) in cells.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    board.0[r][c] = Some(value.parse()?);
                }
            }
        }
        Ok(board)
    }
}
