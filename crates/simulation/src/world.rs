//! The sand world: double-buffered grid, paint hue and the falling rule.
//!
//! `read` is the snapshot taken by the last `draw`/`commit` and is never
//! written during `update`, so every cell decides its move from the same
//! generation. `write` accumulates this tick's moves, receives paint and is
//! what gets rendered.

use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;

/// Seed used when the host does not inject one.
pub const DEFAULT_SEED: u64 = 0x5A4D_5EED;

/// Hue advance per paint event while color-changing sand is on.
pub const HUE_STEP: f32 = 0.1;

/// Paint hue of a fresh world, and the value the hue wraps back to.
pub const START_HUE: f32 = 1.0;

#[derive(Debug)]
pub struct World {
    pub(crate) read: Grid,
    pub(crate) write: Grid,
    sand_size: usize,
    rng: SmallRng,
    /// Current paint hue in degrees, `[1, 360)` when driven by `advance_hue`
    /// or `set_hue`. Writing a value below 1.0 directly makes `place_sand`
    /// paint empty cells.
    pub hue: f32,
    pub color_changing_sand: bool,
    /// Number of `place_sand` calls since the last reset. Repainting an
    /// occupied cell still counts.
    pub sand_count: u64,
    /// Number of `update` passes since construction or the last reset.
    pub generation: u64,
}

impl World {
    /// Square world of `grid_size × grid_size` cells, each drawn as a
    /// `sand_size` pixel square.
    #[must_use]
    pub fn new(grid_size: usize, sand_size: usize) -> Self {
        Self::with_seed(grid_size, sand_size, DEFAULT_SEED)
    }

    #[must_use]
    pub fn with_seed(grid_size: usize, sand_size: usize, seed: u64) -> Self {
        info!("creating {grid_size}x{grid_size} world, {sand_size}px cells, seed {seed:#x}");
        Self {
            read: Grid::new(grid_size, grid_size),
            write: Grid::new(grid_size, grid_size),
            sand_size,
            rng: SmallRng::seed_from_u64(seed),
            hue: START_HUE,
            color_changing_sand: true,
            sand_count: 0,
            generation: 0,
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.write.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.write.height
    }

    #[must_use]
    pub fn sand_size(&self) -> usize {
        self.sand_size
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.write.in_bounds(x, y)
    }

    /// The buffer being painted and rendered.
    #[must_use]
    pub fn cells(&self) -> &Grid {
        &self.write
    }

    /// Snapshot the next `update` will read from.
    #[must_use]
    pub fn snapshot(&self) -> &Grid {
        &self.read
    }

    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.write.get(x, y)
    }

    /// Paint one cell with the current hue.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SandboxError::OutOfBounds`] for coordinates off the
    /// grid; nothing is painted and the counter is untouched.
    pub fn place_sand(&mut self, x: i32, y: i32) -> Result<()> {
        self.write.try_set(x, y, Cell::from_hue(self.hue))?;
        self.sand_count += 1;
        Ok(())
    }

    /// Advance the paint hue by `step`, wrapping back to the start hue at 360.
    pub fn advance_hue(&mut self, step: f32) {
        self.hue += step;
        self.wrap_hue();
    }

    /// Set the paint hue from host input. Non-finite values are ignored,
    /// values below the start hue are raised to it and values of 360 or
    /// more wrap back to it.
    pub fn set_hue(&mut self, hue: f32) {
        if !hue.is_finite() {
            return;
        }
        self.hue = hue.max(START_HUE);
        self.wrap_hue();
    }

    pub(crate) fn wrap_hue(&mut self) {
        if self.hue >= 360.0 {
            self.hue = START_HUE;
        }
    }

    /// Advance one generation.
    ///
    /// Columns are scanned left to right, each top to bottom, skipping the
    /// bottom row. Occupied cells fall straight down into an empty cell,
    /// otherwise try one randomly chosen diagonal. Every moved cell is
    /// restamped with the current hue. With color-changing sand off, each
    /// scanned write cell that is occupied is pinned to the frozen hue
    /// first, including cells this pass has just moved into.
    pub fn update(&mut self) {
        let w = self.width();
        let h = self.height();
        let stamp = Cell::from_hue(self.hue);

        for i in 0..w {
            for j in 0..h.saturating_sub(1) {
                if !self.color_changing_sand && self.write.at(i, j).is_occupied() {
                    self.write.put(i, j, Cell::frozen());
                }
                if self.read.at(i, j).is_empty() {
                    continue;
                }

                if self.read.at(i, j + 1).is_empty() {
                    self.write.put(i, j, Cell::EMPTY);
                    self.write.put(i, j + 1, stamp);
                    continue;
                }

                let next_i = if self.rng.gen::<bool>() {
                    i.checked_sub(1)
                } else {
                    Some(i + 1).filter(|&n| n < w)
                };
                if let Some(n) = next_i {
                    if self.read.at(n, j + 1).is_empty() {
                        self.write.put(i, j, Cell::EMPTY);
                        self.write.put(n, j + 1, stamp);
                    }
                }
            }
        }
        self.generation += 1;
    }

    /// Copy the write buffer into the read snapshot. `draw` does this after
    /// emitting its rectangles; hosts that skip rendering call it directly.
    pub fn commit(&mut self) {
        self.read.copy_from(&self.write);
    }

    /// Empty both buffers and zero the paint and generation counters.
    /// Hue, mode and RNG state carry over.
    pub fn reset(&mut self) {
        self.read.fill_empty();
        self.write.fill_empty();
        self.sand_count = 0;
        self.generation = 0;
        info!("world reset");
    }
}
