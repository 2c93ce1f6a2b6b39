//! Board engine: the playfield grid.
//!
//! Cells are stored in a flat row-major `Vec` for cache locality.
//! Coordinates: (x, y) with x running left to right and y running top (0) to
//! bottom (height - 1). Dimensions are fixed at creation.
//!
//! Mutating helpers (`set`) exist for setup and tests; the operations the
//! state machine uses (`place_piece`, `clear_lines`) are pure and return new
//! boards, leaving the original untouched.

use arrayvec::ArrayVec;

use crate::core::pieces::Piece;
use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board of the given dimensions.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    // Bounds are compared in i16 so that dimensions above 127 do not wrap
    // negative; u8 dimensions always fit.
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= i16::from(self.width) || y < 0 || y >= i16::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Cell at (x, y), or `None` when out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set a cell. Returns false when out of bounds.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled.
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// A row is full iff it contains no empty cell.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let start = y * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Freeze a piece onto a copy of the board.
    ///
    /// Tiles with `y >= 0` are written with the piece's kind; tiles still
    /// above the visible board are silently dropped. Callers are expected to
    /// have run the collision check first.
    pub fn place_piece(&self, piece: &Piece) -> Board {
        let mut next = self.clone();
        for (x, y) in piece.tiles() {
            if y >= 0 {
                next.set(x, y, Some(piece.kind));
            }
        }
        next
    }

    /// Remove all full rows and prepend empty rows at the top to restore the
    /// original height. Returns the new board and the number of rows removed.
    ///
    /// Relative order of the surviving rows is preserved. A single lock can
    /// fill at most four rows, but the scan handles any count.
    pub fn clear_lines(&self) -> (Board, u32) {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut next = Board::new(self.width, self.height);

        // Copy surviving rows bottom-up into the bottom of the new board;
        // rows above the write cursor stay empty.
        let mut write_y = height;
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                continue;
            }
            write_y -= 1;
            let src = read_y * width;
            let dst = write_y * width;
            next.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }

        let cleared = write_y as u32;
        (next, cleared)
    }

    /// Full rows, bottom to top. Bounded at four for the single-lock case.
    pub fn full_rows(&self) -> ArrayVec<usize, 4> {
        let mut rows = ArrayVec::new();
        for y in (0..self.height as usize).rev() {
            if self.is_row_full(y) && rows.try_push(y).is_err() {
                break;
            }
        }
        rows
    }

    /// Game-over check: any occupied cell in the topmost two rows.
    ///
    /// Evaluated against the board after a lock + clear cycle, not against
    /// the incoming piece's spawn placement.
    pub fn is_topped_out(&self) -> bool {
        let rows = 2.min(self.height as usize);
        self.cells[..rows * self.width as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from rows of cells, top to bottom. Rows must be equal
    /// length. Intended for tests and puzzle setups.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map_or(0, |row| row.len()) as u8;
        assert!(rows.iter().all(|row| row.len() == width as usize));

        Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }
}
