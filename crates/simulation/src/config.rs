//! Sandbox settings. Grid and cell size are fixed once a sandbox is built.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::brush::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::clock::DEFAULT_UPDATE_RATE;
use crate::error::{Result, SandboxError};

/// Largest accepted grid side, in cells.
pub const MAX_GRID_SIZE: usize = 2048;

/// Largest accepted canvas side (`grid_size * sand_size`), in pixels.
pub const MAX_CANVAS_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Cells per side of the square grid.
    pub grid_size: usize,
    /// Pixels per cell side.
    pub sand_size: usize,
    /// Seconds between simulation steps.
    pub update_rate: f32,
    pub brush_size: u32,
    pub color_changing_sand: bool,
    pub seed: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            grid_size: 200,
            sand_size: 5,
            update_rate: DEFAULT_UPDATE_RATE,
            brush_size: MIN_BRUSH_SIZE,
            color_changing_sand: true,
            seed: None,
        }
    }
}

impl SandboxConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// [`SandboxError::Json`] for malformed input, [`SandboxError::InvalidConfig`]
    /// when a value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// [`SandboxError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let canvas = self.grid_size.checked_mul(self.sand_size);
        let reason = if !(2..=MAX_GRID_SIZE).contains(&self.grid_size) {
            Some(format!(
                "grid_size must be in 2..={MAX_GRID_SIZE}, got {}",
                self.grid_size
            ))
        } else if self.sand_size == 0 {
            Some("sand_size must be at least 1".to_owned())
        } else if !canvas.is_some_and(|c| c <= MAX_CANVAS_SIZE) {
            Some(format!(
                "canvas of {} cells at {}px exceeds {MAX_CANVAS_SIZE}px",
                self.grid_size, self.sand_size
            ))
        } else if !(self.update_rate.is_finite() && self.update_rate > 0.0) {
            Some(format!(
                "update_rate must be a positive number of seconds, got {}",
                self.update_rate
            ))
        } else if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.brush_size) {
            Some(format!(
                "brush_size must be in {MIN_BRUSH_SIZE}..={MAX_BRUSH_SIZE}, got {}",
                self.brush_size
            ))
        } else {
            None
        };

        match reason {
            Some(reason) => {
                warn!("rejecting config: {reason}");
                Err(SandboxError::InvalidConfig(reason))
            }
            None => Ok(()),
        }
    }

    /// Canvas side length in pixels. Saturates for configs that fail
    /// [`Self::validate`].
    #[must_use]
    pub fn canvas_size(&self) -> usize {
        self.grid_size.saturating_mul(self.sand_size)
    }

    /// Pull `grid_size` and `sand_size` into the accepted ranges.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.grid_size = self.grid_size.clamp(2, MAX_GRID_SIZE);
        self.sand_size = self.sand_size.clamp(1, MAX_CANVAS_SIZE / self.grid_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SandboxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas_size(), 1000);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SandboxConfig::from_json(r#"{"grid_size": 64, "seed": 9}"#).unwrap();
        assert_eq!(config.grid_size, 64);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.sand_size, 5);
        assert!(config.color_changing_sand);
    }

    #[test]
    fn rejects_out_of_range_values() {
        for json in [
            r#"{"grid_size": 1}"#,
            r#"{"sand_size": 0}"#,
            r#"{"update_rate": 0.0}"#,
            r#"{"update_rate": -1.0}"#,
            r#"{"brush_size": 11}"#,
            r#"{"brush_size": 0}"#,
            r#"{"grid_size": 18446744073709551615}"#,
            r#"{"grid_size": 2049, "sand_size": 1}"#,
            r#"{"grid_size": 2048, "sand_size": 18446744073709551615}"#,
            r#"{"grid_size": 1000, "sand_size": 5}"#,
        ] {
            let err = SandboxConfig::from_json(json).unwrap_err();
            assert!(matches!(err, SandboxError::InvalidConfig(_)), "{json}: {err}");
        }
    }

    #[test]
    fn largest_canvas_is_accepted() {
        let config = SandboxConfig::from_json(r#"{"grid_size": 2048, "sand_size": 2}"#).unwrap();
        assert_eq!(config.canvas_size(), MAX_CANVAS_SIZE);
    }

    #[test]
    fn clamped_configs_validate() {
        for (grid_size, sand_size) in [(0, 0), (usize::MAX, usize::MAX), (200, 1000), (3, 1)] {
            let config = SandboxConfig {
                grid_size,
                sand_size,
                ..SandboxConfig::default()
            }
            .clamped();
            assert!(config.validate().is_ok(), "{grid_size}x{sand_size}");
        }
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SandboxConfig::from_json("{grid_size: ").unwrap_err();
        assert!(matches!(err, SandboxError::Json(_)));
    }

    #[test]
    fn serializes_round_trip_through_json() {
        let config = SandboxConfig {
            brush_size: 4,
            ..SandboxConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SandboxConfig::from_json(&json).unwrap(), config);
    }
}
