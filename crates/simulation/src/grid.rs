//! Fixed-size 2D cell buffer. `World` holds two of these (read and write).

use crate::cell::Cell;
use crate::error::{Result, SandboxError};

/// Row-major `width × height` store. Out-of-bounds reads return `None`,
/// `set` is a no-op and `try_set` rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.index(x as usize, y as usize)])
        } else {
            None
        }
    }

    /// Unchecked-by-signature accessor for the stepper's inner loop, which
    /// only ever passes in-range coordinates.
    #[inline]
    #[must_use]
    pub(crate) fn at(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            self.put(x as usize, y as usize, cell);
        }
    }

    /// # Errors
    ///
    /// Returns [`SandboxError::OutOfBounds`] when `(x, y)` is off the grid.
    pub fn try_set(&mut self, x: i32, y: i32, cell: Cell) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(SandboxError::OutOfBounds {
                x: i64::from(x),
                y: i64::from(y),
                width: self.width,
                height: self.height,
            });
        }
        self.put(x as usize, y as usize, cell);
        Ok(())
    }

    pub fn fill_empty(&mut self) {
        self.cells.fill(Cell::empty());
    }

    /// Overwrite every cell with `other`'s. Both grids must share a shape.
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        self.cells.copy_from_slice(&other.cells);
    }

    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }
}
