//! Square grid of marks

use std::fmt;

use super::{Mark, Pos};
use crate::error::{Error, Result};

/// N×N game board.
///
/// The search mutates the board in place with `place_stone` / `remove_stone`
/// pairs; every speculative placement is undone before the search returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
    stones: usize,
}

impl Board {
    /// Create an empty board. `size` must already be validated.
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0 && size <= super::MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
            stones: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index(self.size)]
    }

    /// Get mark at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_checked(&self, row: i32, col: i32) -> Option<Mark> {
        Pos::checked(row, col, self.size).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark without legality checks.
    /// Use `try_place` for moves coming from outside the search.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, mark: Mark) {
        let idx = pos.to_index(self.size);
        debug_assert!(self.cells[idx] == Mark::Empty);
        if mark != Mark::Empty {
            self.stones += 1;
        }
        self.cells[idx] = mark;
    }

    /// Remove a mark
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        if self.cells[idx] != Mark::Empty {
            self.stones -= 1;
        }
        self.cells[idx] = Mark::Empty;
    }

    /// Place a mark after checking bounds and occupancy.
    pub fn try_place(&mut self, pos: Pos, mark: Mark) -> Result<()> {
        if !self.contains(pos) {
            return Err(Error::OutOfBounds {
                pos,
                size: self.size,
            });
        }
        if !self.is_empty(pos) {
            return Err(Error::Occupied { pos });
        }
        self.place_stone(pos, mark);
        Ok(())
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == Mark::Empty)
            .map(move |(idx, _)| Pos::from_index(idx, size))
    }

    /// Total marks on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Wipe every mark, keeping the size
    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
        self.stones = 0;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row.iter().map(|m| m.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
