//! Color-cycling falling sand engine.

pub mod brush;
pub mod cell;
pub mod clock;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod render;
pub mod sandbox;
pub mod world;

pub use config::SandboxConfig;
pub use error::SandboxError;
pub use grid::Grid;
pub use sandbox::Sandbox;
pub use world::World;

use input::{FrameInput, PointerState};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init only fails because a logger is already installed.
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sandbox engine loaded");
}

/// Browser-facing handle. Owns a [`Sandbox`] and exposes its framebuffer
/// as a pointer into wasm memory.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sandbox: Sandbox,
}

#[wasm_bindgen]
impl Universe {
    /// Universe with default settings at the given grid and cell size.
    /// Sizes are clamped into the range [`SandboxConfig::validate`] accepts.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(grid_size: usize, sand_size: usize) -> Self {
        let config = SandboxConfig {
            grid_size,
            sand_size,
            ..SandboxConfig::default()
        }
        .clamped();
        Self {
            sandbox: Sandbox::build(&config),
        }
    }

    /// # Errors
    ///
    /// Malformed or out-of-range config.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Universe, JsError> {
        let config = SandboxConfig::from_json(json)?;
        Ok(Self {
            sandbox: Sandbox::new(&config)?,
        })
    }

    #[wasm_bindgen(js_name = getWidth)]
    #[must_use]
    pub fn width(&self) -> usize {
        self.sandbox.world.width()
    }

    #[wasm_bindgen(js_name = getHeight)]
    #[must_use]
    pub fn height(&self) -> usize {
        self.sandbox.world.height()
    }

    #[wasm_bindgen(js_name = sandSize)]
    #[must_use]
    pub fn sand_size(&self) -> usize {
        self.sandbox.world.sand_size()
    }

    /// Value of the rendered cell at `(x, y)`; 0 for empty or off-grid.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> u16 {
        self.sandbox.world.cell(x, y).map_or(0, cell::Cell::hue)
    }

    /// Paint one cell. Returns `false` when `(x, y)` is off the grid.
    #[wasm_bindgen(js_name = placeSand)]
    pub fn place_sand(&mut self, x: i32, y: i32) -> bool {
        match self.sandbox.world.place_sand(x, y) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("{e}");
                false
            }
        }
    }

    pub fn update(&mut self) {
        self.sandbox.world.update();
    }

    /// Redraw the framebuffer and commit the write buffer.
    pub fn draw(&mut self) {
        self.sandbox.render();
    }

    pub fn reset(&mut self) {
        self.sandbox.world.reset();
    }

    /// One full host frame. Returns `true` if the simulation stepped.
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn frame(
        &mut self,
        dt: f32,
        pressed: bool,
        x: f32,
        y: f32,
        captured: bool,
        reset: bool,
    ) -> bool {
        let input = FrameInput {
            pointer: PointerState {
                pressed,
                x,
                y,
                captured,
            },
            reset,
            dt,
        };
        self.sandbox.frame(&input).stepped
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn hue(&self) -> f32 {
        self.sandbox.world.hue
    }

    /// Non-finite hues are ignored; others land in `[1, 360)`.
    #[wasm_bindgen(setter)]
    pub fn set_hue(&mut self, hue: f32) {
        self.sandbox.world.set_hue(hue);
    }

    #[wasm_bindgen(getter, js_name = sandCount)]
    #[must_use]
    pub fn sand_count(&self) -> f64 {
        self.sandbox.world.sand_count as f64
    }

    /// Negative and NaN counts become 0.
    #[wasm_bindgen(setter, js_name = sandCount)]
    pub fn set_sand_count(&mut self, count: f64) {
        self.sandbox.world.sand_count = count.max(0.0) as u64;
    }

    #[wasm_bindgen(getter, js_name = colorChangingSand)]
    #[must_use]
    pub fn color_changing_sand(&self) -> bool {
        self.sandbox.world.color_changing_sand
    }

    #[wasm_bindgen(setter, js_name = colorChangingSand)]
    pub fn set_color_changing_sand(&mut self, on: bool) {
        self.sandbox.world.color_changing_sand = on;
    }

    #[wasm_bindgen(getter, js_name = brushSize)]
    #[must_use]
    pub fn brush_size(&self) -> u32 {
        self.sandbox.brush.size()
    }

    #[wasm_bindgen(setter, js_name = brushSize)]
    pub fn set_brush_size(&mut self, size: u32) {
        self.sandbox.brush.set_size(size);
    }

    #[wasm_bindgen(js_name = canvasWidth)]
    #[must_use]
    pub fn canvas_width(&self) -> usize {
        self.sandbox.pixels().width
    }

    #[wasm_bindgen(js_name = canvasHeight)]
    #[must_use]
    pub fn canvas_height(&self) -> usize {
        self.sandbox.pixels().height
    }

    /// RGBA8 framebuffer, `canvasWidth * canvasHeight * 4` bytes.
    #[must_use]
    pub fn pixels(&self) -> *const u8 {
        self.sandbox.pixels().data.as_ptr()
    }
}
