//! Board coordinates and their two-character external form.
//!
//! The wire/button token is a row letter (`A`-`C`) followed by a column
//! digit (`1`-`3`), e.g. `B2` for the center cell.

use std::fmt;
use std::str::FromStr;

use crate::errors::domain::{DomainError, RuleViolation};

const SIZE: usize = 3;

const ROW_LETTERS: [char; SIZE] = ['A', 'B', 'C'];
const COL_DIGITS: [char; SIZE] = ['1', '2', '3'];

/// A validated `(row, col)` pair, each in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Result<Self, DomainError> {
        if row >= SIZE || col >= SIZE {
            return Err(DomainError::rule(RuleViolation::InvalidCoordinate));
        }
        Ok(Self { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// All 9 coordinates, row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coordinate { row, col }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LETTERS[self.row], COL_DIGITS[self.col])
    }
}

impl FromStr for Coordinate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(row_ch), Some(col_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(DomainError::rule(RuleViolation::InvalidCoordinate));
        };
        let row = ROW_LETTERS
            .iter()
            .position(|&c| c == row_ch)
            .ok_or_else(|| DomainError::rule(RuleViolation::InvalidCoordinate))?;
        let col = COL_DIGITS
            .iter()
            .position(|&c| c == col_ch)
            .ok_or_else(|| DomainError::rule(RuleViolation::InvalidCoordinate))?;
        Ok(Self { row, col })
    }
}
