//! Rendering adapter: turns the write buffer into rectangle draws and
//! advances the read snapshot.

use crate::color::Rgb;
use crate::world::World;

/// Anything that can draw an axis-aligned filled square in pixel space.
pub trait Surface {
    fn fill_rect(&mut self, x: usize, y: usize, size: usize, color: Rgb);
}

/// RGBA8 framebuffer, row-major, exposed to the browser as a flat byte slice.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let mut buffer = Self {
            width,
            height,
            data: vec![0; width * height * 4],
        };
        buffer.clear(Rgb::BLACK);
        buffer
    }

    pub fn clear(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 0xFF]);
        }
    }

    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }
}

impl Surface for PixelBuffer {
    /// Squares hanging past the edge are clipped.
    fn fill_rect(&mut self, x: usize, y: usize, size: usize, color: Rgb) {
        let x_end = (x + size).min(self.width);
        let y_end = (y + size).min(self.height);
        for py in y.min(y_end)..y_end {
            let row = py * self.width;
            for px in x.min(x_end)..x_end {
                let i = (row + px) * 4;
                self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 0xFF]);
            }
        }
    }
}

impl World {
    /// Draw every occupied write cell as a `sand_size` square at
    /// `(x * sand_size, y * sand_size)`, then commit the write buffer into
    /// the read snapshot for the next `update`.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.wrap_hue();
        let size = self.sand_size();
        let w = self.width();
        for (idx, cell) in self.write.cells.iter().enumerate() {
            if cell.is_occupied() {
                let (x, y) = (idx % w, idx / w);
                surface.fill_rect(x * size, y * size, size, cell.color());
            }
        }
        self.commit();
    }
}
