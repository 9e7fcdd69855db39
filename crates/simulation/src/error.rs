//! Error type shared by the grid, world and config layers.

use std::fmt;

#[derive(Debug)]
pub enum SandboxError {
    /// A coordinate outside `[0, width) × [0, height)`.
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },
    InvalidConfig(String),
    Json(serde_json::Error),
}

impl fmt::Display for SandboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "cell ({x}, {y}) is outside the {width}x{height} grid"),
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
            Self::Json(e) => write!(f, "malformed config JSON: {e}"),
        }
    }
}

impl std::error::Error for SandboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SandboxError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, SandboxError>;
