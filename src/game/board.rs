use crate::error::MoveError;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Fixed 6x7 grid. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Signed lookup for directional scans; `None` when off the board
    pub fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if Self::in_bounds(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    pub fn in_bounds(row: isize, col: isize) -> bool {
        (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        // Scan from the bottom row upward
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
            .ok_or(MoveError::ColumnFull(col))?;

        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of discs on the board
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
