//! Square paint brush.

use crate::world::World;

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 10;

/// Paints the square `[-size/2, size/2]²` around a center cell. Sizes use
/// truncating division, so 1 and 2 both cover a single cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Brush {
    size: u32,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(MIN_BRUSH_SIZE)
    }
}

impl Brush {
    /// Sizes outside `1..=10` are clamped.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size: size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
        }
    }

    #[must_use]
    pub fn size(self) -> u32 {
        self.size
    }

    pub fn set_size(&mut self, size: u32) {
        *self = Self::new(size);
    }

    /// Offsets covered by the brush, column-major like the paint loop.
    pub fn offsets(self) -> impl Iterator<Item = (i32, i32)> {
        let half = (self.size / 2) as i32;
        (-half..=half).flat_map(move |dx| (-half..=half).map(move |dy| (dx, dy)))
    }

    /// Paint every in-bounds cell under the brush centered on `(cx, cy)`.
    /// Returns how many cells were painted. Centers may be anywhere,
    /// including near `i32::MIN`/`i32::MAX`.
    pub fn paint(self, world: &mut World, cx: i32, cy: i32) -> usize {
        let mut painted = 0;
        for (dx, dy) in self.offsets() {
            let (Some(x), Some(y)) = (cx.checked_add(dx), cy.checked_add(dy)) else {
                continue;
            };
            if world.in_bounds(x, y) && world.place_sand(x, y).is_ok() {
                painted += 1;
            }
        }
        painted
    }
}
