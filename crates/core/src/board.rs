//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Locking and line clearing live here as well: `lock_piece` merges a piece's
//! cells into the grid and `clear_full_rows` compacts completed rows away.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Check if a row is completely empty (out-of-range rows count as empty)
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_none()))
            .unwrap_or(true)
    }

    /// Borrow one row of cells
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Fill every column of row `y` with `kind` (out-of-range rows are ignored)
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y >= HEIGHT {
            return;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].fill(Some(kind));
    }

    /// Remove row `y` by shifting every row above it down by one, then
    /// blanking the top row.
    fn collapse_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }

        // Shift all rows above down by one
        // Note: copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * WIDTH;
            let dst_start = row * WIDTH;
            self.cells.copy_within(src_start..src_start + WIDTH, dst_start);
        }

        self.cells[..WIDTH].fill(None);
    }

    /// Clear all full rows, scanning from the bottom up, and return how many
    /// were removed.
    ///
    /// After a row collapses, the same index holds what used to be the row
    /// above it, so the scan stays on that index until it is found non-full.
    /// Only meaningful immediately after a lock.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        // `y` is one past the row under inspection.
        let mut y = HEIGHT;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Lock a piece onto the board at given position with given shape.
    ///
    /// Cells above the visible grid (negative row) are dropped, so a piece
    /// straddling the top edge only commits its visible part. Cells outside
    /// the grid horizontally or below it are never written; callers keep the
    /// piece in a non-colliding placement before locking.
    ///
    /// Returns the number of cells written.
    pub fn lock_piece(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> usize {
        let mut written = 0;
        for &(dx, dy) in shape {
            let py = y.saturating_add(dy);
            if py < 0 {
                continue;
            }
            if self.set(x.saturating_add(dx), py, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Number of occupied cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write the board as cell values: 0 empty, `k` for shape index `k - 1`
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, value) in row.iter_mut().enumerate() {
                *value = self.cells[y * WIDTH + x].map_or(0, PieceKind::cell_value);
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from cell values (0 empty, 1..=7 shape index + 1).
    ///
    /// Out-of-range values are treated as empty.
    pub fn from_u8_grid(grid: &[[u8; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                board.cells[y * WIDTH + x] = PieceKind::from_cell(*value);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
