//! Cell value type for the simulation grid.

use std::fmt;

/// Hue every occupied cell is pinned to while color-changing sand is off.
pub const FROZEN_HUE: u16 = 60;

/// One grid cell. `0` is empty; any other value is occupied and doubles as
/// the cell's hue in degrees.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell(pub u16);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Empty")
        } else {
            write!(f, "Sand({})", self.0)
        }
    }
}

impl Cell {
    pub const EMPTY: Self = Self(0);

    #[must_use]
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Stamp a cell with a paint hue. The hue is truncated to whole degrees,
    /// so hues below 1.0 produce an empty cell.
    #[must_use]
    pub fn from_hue(hue: f32) -> Self {
        Self(hue as u16)
    }

    #[must_use]
    pub fn frozen() -> Self {
        Self(FROZEN_HUE)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn is_occupied(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub fn hue(self) -> u16 {
        self.0
    }
}
