use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;

use crate::error::CinemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    Free,
    Booked,
}

/// Seat address as the customer sees it: 1-based row and column,
/// written `"{row}-{col}"`. The same text is accepted back by
/// [`SeatLabel::parse`], so this format is part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatLabel {
    pub row: usize,
    pub col: usize,
}

impl SeatLabel {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parses `row-col`. Each part may carry surrounding whitespace and a
    /// leading `+`; anything else that is not a plain unsigned number is
    /// `InvalidFormat`. A well-formed number too large to fit is reported
    /// as `OutOfBounds`, since no hall can have that many rows.
    pub fn parse(input: &str) -> Result<Self, CinemaError> {
        let invalid = || CinemaError::InvalidFormat(input.to_string());

        let mut parts = input.split('-');
        let (row, col) = match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => (row, col),
            _ => return Err(invalid()),
        };

        let row = parse_index(row).ok_or_else(invalid)?;
        let col = parse_index(col).ok_or_else(invalid)?;

        match (row, col) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(CinemaError::OutOfBounds(input.trim().to_string())),
        }
    }
}

// None - формат неверный; Some(None) - число не влезает в usize
fn parse_index(part: &str) -> Option<Option<usize>> {
    match part.trim().parse::<usize>() {
        Ok(n) => Some(Some(n)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(None),
        Err(_) => None,
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Per-show seating: a fixed rows x cols grid of seat states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatGrid {
    cells: Vec<Vec<SeatStatus>>,
    cols: usize,
}

impl SeatGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![SeatStatus::Free; cols]; rows],
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    // 1-based метка -> 0-based индексы, если место в пределах зала
    fn locate(&self, label: SeatLabel) -> Option<(usize, usize)> {
        let in_rows = (1..=self.rows()).contains(&label.row);
        let in_cols = (1..=self.cols).contains(&label.col);
        (in_rows && in_cols).then(|| (label.row - 1, label.col - 1))
    }

    pub fn status(&self, label: SeatLabel) -> Option<SeatStatus> {
        self.locate(label).map(|(r, c)| self.cells[r][c])
    }

    /// Free seats grouped by row, rows in order. A full row is an empty vec.
    pub fn free_by_row(&self) -> Vec<Vec<SeatLabel>> {
        self.cells
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, status)| **status == SeatStatus::Free)
                    .map(|(c, _)| SeatLabel::new(r + 1, c + 1))
                    .collect()
            })
            .collect()
    }

    /// Flips one seat Free -> Booked. Leaves the grid untouched on error.
    pub fn book(&mut self, label: SeatLabel) -> Result<(), CinemaError> {
        let (r, c) = self
            .locate(label)
            .ok_or_else(|| CinemaError::OutOfBounds(label.to_string()))?;

        let cell = &mut self.cells[r][c];
        match *cell {
            SeatStatus::Free => {
                *cell = SeatStatus::Booked;
                Ok(())
            }
            SeatStatus::Booked => Err(CinemaError::AlreadyBooked(label.to_string())),
        }
    }
}
