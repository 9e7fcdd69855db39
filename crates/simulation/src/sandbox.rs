//! Application context: owns the world, brush, clock and framebuffer and
//! runs one host frame at a time.

use log::{debug, info};

use crate::brush::Brush;
use crate::clock::TickClock;
use crate::color::Rgb;
use crate::config::SandboxConfig;
use crate::error::Result;
use crate::input::FrameInput;
use crate::render::PixelBuffer;
use crate::world::{World, DEFAULT_SEED, HUE_STEP};

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub painted: usize,
    pub reset: bool,
    pub stepped: bool,
}

#[derive(Debug)]
pub struct Sandbox {
    pub world: World,
    pub brush: Brush,
    clock: TickClock,
    pixels: PixelBuffer,
}

impl Sandbox {
    /// # Errors
    ///
    /// Propagates [`SandboxConfig::validate`] failures.
    pub fn new(config: &SandboxConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Build from a config the caller has already validated.
    pub(crate) fn build(config: &SandboxConfig) -> Self {
        let mut world = World::with_seed(
            config.grid_size,
            config.sand_size,
            config.seed.unwrap_or(DEFAULT_SEED),
        );
        world.color_changing_sand = config.color_changing_sand;
        let canvas = config.canvas_size();
        info!("sandbox ready: {canvas}x{canvas}px canvas, update every {}s", config.update_rate);
        Self {
            world,
            brush: Brush::new(config.brush_size),
            clock: TickClock::new(config.update_rate),
            pixels: PixelBuffer::new(canvas, canvas),
        }
    }

    #[must_use]
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    #[must_use]
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    /// Run one frame: paint or reset from input, step the world if the
    /// clock says so, then clear the framebuffer and draw.
    pub fn frame(&mut self, input: &FrameInput) -> FrameReport {
        let mut report = FrameReport::default();

        if input.pointer.paints() {
            let (cx, cy) = input.pointer.cell(self.world.sand_size());
            report.painted = self.brush.paint(&mut self.world, cx, cy);
            if report.painted == 0 {
                debug!("pointer at cell ({cx}, {cy}) is off the grid");
            }
            if self.world.color_changing_sand {
                self.world.advance_hue(HUE_STEP);
            }
        } else if input.reset {
            self.world.reset();
            report.reset = true;
        }

        if self.clock.advance(input.dt) {
            self.world.update();
            report.stepped = true;
        }

        self.render();
        report
    }

    /// Redraw the framebuffer from the current world, committing the
    /// write buffer.
    pub fn render(&mut self) {
        self.pixels.clear(Rgb::BLACK);
        self.world.draw(&mut self.pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerState;

    fn small() -> Sandbox {
        Sandbox::new(&SandboxConfig {
            grid_size: 10,
            sand_size: 2,
            ..SandboxConfig::default()
        })
        .unwrap()
    }

    fn click(x: f32, y: f32) -> FrameInput {
        FrameInput {
            pointer: PointerState {
                pressed: true,
                x,
                y,
                captured: false,
            },
            ..FrameInput::default()
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SandboxConfig {
            grid_size: 0,
            ..SandboxConfig::default()
        };
        assert!(Sandbox::new(&config).is_err());
    }

    #[test]
    fn paint_advances_hue_when_color_changing() {
        let mut sandbox = small();
        let report = sandbox.frame(&click(5.0, 5.0));
        assert_eq!(report.painted, 1);
        assert!(!report.stepped);
        assert!((sandbox.world.hue - 1.1).abs() < 1e-5);
        assert!(sandbox.world.cell(2, 2).unwrap().is_occupied());
    }

    #[test]
    fn paint_keeps_hue_when_not_color_changing() {
        let mut sandbox = small();
        sandbox.world.color_changing_sand = false;
        sandbox.frame(&click(5.0, 5.0));
        assert!((sandbox.world.hue - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn captured_pointer_lets_reset_through() {
        let mut sandbox = small();
        sandbox.frame(&click(5.0, 5.0));

        let mut input = click(5.0, 5.0);
        input.pointer.captured = true;
        input.reset = true;
        let report = sandbox.frame(&input);

        assert_eq!(report.painted, 0);
        assert!(report.reset);
        assert_eq!(sandbox.world.sand_count, 0);
        assert_eq!(sandbox.world.cells().occupied(), 0);
    }

    #[test]
    fn painting_wins_over_reset() {
        let mut sandbox = small();
        let mut input = click(5.0, 5.0);
        input.reset = true;
        let report = sandbox.frame(&input);
        assert!(!report.reset);
        assert_eq!(sandbox.world.sand_count, 1);
    }

    #[test]
    fn far_off_grid_pointer_paints_nothing() {
        let mut sandbox = small();
        sandbox.brush.set_size(3);
        for (x, y) in [(1.0e12, 0.0), (-1.0e12, 5.0), (f32::MAX, f32::MIN), (f32::NAN, 3.0)] {
            let report = sandbox.frame(&click(x, y));
            assert_eq!(report.painted, 0);
        }
        assert_eq!(sandbox.world.sand_count, 0);
    }

    #[test]
    fn frame_steps_and_renders() {
        let mut sandbox = small();
        sandbox.frame(&click(4.0, 0.0));
        let report = sandbox.frame(&FrameInput {
            dt: 0.02,
            ..FrameInput::default()
        });

        assert!(report.stepped);
        assert_eq!(sandbox.world.cell(2, 0).unwrap(), crate::cell::Cell::EMPTY);
        assert!(sandbox.world.cell(2, 1).unwrap().is_occupied());
        assert_ne!(sandbox.pixels().pixel(4, 2), Some(Rgb::BLACK));
        assert_eq!(sandbox.pixels().pixel(4, 0), Some(Rgb::BLACK));
    }
}
