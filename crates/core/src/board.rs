//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of cells fixed at construction.
//! Storage is a single flat allocation in row-major order; line clears compact
//! rows in place instead of inserting or removing rows.
//!
//! Coordinates: (x, y) with x growing right and y growing down; (0, 0) is the
//! top-left cell. Only the side walls and the floor are solid. Rows above the
//! grid (y < 0) are open space, so a piece may hang partly above the top edge.

use tracing::trace;

use crate::shapes::Shape;
use crate::types::{cell_for_color, Cell, ColorIndex, EMPTY, PALETTE_SIZE};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Box<[Cell]>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize].into_boxed_slice(),
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a cell is inside the grid and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Would `shape` placed with its top-left cell at (x, y) overlap a wall,
    /// the floor, or a filled cell?
    ///
    /// Cells above the top edge never collide.
    pub fn is_collision(&self, x: i32, y: i32, shape: &Shape) -> bool {
        shape.cells().any(|(r, c)| {
            let px = x + c;
            let py = y + r;
            if px < 0 || px >= self.width as i32 || py >= self.height as i32 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Write `shape` into the grid with the given color.
    ///
    /// The caller must have placed the shape collision-free; a cell outside
    /// the grid is a contract violation and panics.
    pub fn merge(&mut self, x: i32, y: i32, shape: &Shape, color: ColorIndex) {
        assert!(color < PALETTE_SIZE, "color index {} out of palette", color);
        let cell = cell_for_color(color);
        for (r, c) in shape.cells() {
            let (px, py) = (x + c, y + r);
            match self.index(px, py) {
                Some(idx) => self.cells[idx] = cell,
                None => panic!("merge outside the board at ({}, {})", px, py),
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height as usize && self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Borrow one row of cells
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Remove every full row, shift the rows above down, and refill the top
    /// with empty rows. Returns the number of rows removed.
    ///
    /// Single bottom-to-top two-pointer pass: `read_y` walks every row,
    /// `write_y` is where the next surviving row lands.
    pub fn clear_completed_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY);

        if cleared > 0 {
            trace!(cleared, "rows cleared");
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Build a board from rows of cells, top row first
    ///
    /// Panics on an empty or ragged grid, or one wider or taller than 255.
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        assert!(!rows.is_empty(), "board needs at least one row");
        let width = rows[0].len();
        assert!(
            width <= u8::MAX as usize && rows.len() <= u8::MAX as usize,
            "board side must be at most 255 cells, got {}x{}",
            width,
            rows.len()
        );
        assert!(rows.iter().all(|row| row.len() == width), "ragged board rows");

        let mut board = Self::new(width as u8, rows.len() as u8);
        for (y, row) in rows.iter().enumerate() {
            let start = y * width;
            board.cells[start..start + width].copy_from_slice(row);
        }
        board
    }
}
