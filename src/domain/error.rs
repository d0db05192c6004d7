use thiserror::Error;

/// Failures raised by grid accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },
}
