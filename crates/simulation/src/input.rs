//! Per-frame input snapshot supplied by the host window/GUI layer.

/// Pointer state in window pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub pressed: bool,
    pub x: f32,
    pub y: f32,
    /// The GUI panel is hovered; paint must be suppressed.
    pub captured: bool,
}

impl PointerState {
    /// Pressed, not over the GUI, and at a real position.
    #[must_use]
    pub fn paints(&self) -> bool {
        self.pressed && !self.captured && self.x.is_finite() && self.y.is_finite()
    }

    /// Cell under the pointer for cells `sand_size` pixels wide. May lie
    /// outside the grid.
    #[must_use]
    pub fn cell(&self, sand_size: usize) -> (i32, i32) {
        let size = sand_size.max(1) as f32;
        ((self.x / size).floor() as i32, (self.y / size).floor() as i32)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: PointerState,
    /// Reset key or "erase all" pressed this frame.
    pub reset: bool,
    /// Seconds since the previous frame.
    pub dt: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captured_pointer_does_not_paint() {
        let pointer = PointerState {
            pressed: true,
            captured: true,
            ..PointerState::default()
        };
        assert!(!pointer.paints());
    }

    #[test]
    fn non_finite_pointer_does_not_paint() {
        let pointer = PointerState {
            pressed: true,
            x: f32::NAN,
            y: f32::INFINITY,
            captured: false,
        };
        assert!(!pointer.paints());
    }

    #[test]
    fn pixel_to_cell_floors() {
        let pointer = PointerState {
            x: 14.9,
            y: 5.0,
            ..PointerState::default()
        };
        assert_eq!(pointer.cell(5), (2, 1));

        let left = PointerState {
            x: -0.5,
            ..PointerState::default()
        };
        assert_eq!(left.cell(5), (-1, 0));
    }
}
