//! Error types for quadpress-region

use thiserror::Error;

/// Errors that can occur during quadtree build and render operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Build region edge length is zero or not a power of two
    #[error("invalid quad size: {0} (must be a nonzero power of two)")]
    InvalidQuadSize(u32),

    /// Error threshold is negative or not finite
    #[error("invalid threshold: {0} (must be finite and non-negative)")]
    InvalidThreshold(f32),

    /// Selection rectangle has no area
    #[error("empty selection: {w}x{h}")]
    EmptySelection { w: i32, h: i32 },

    /// Offset render reached a destination coordinate the sink reports
    /// as not visible
    #[error("destination coordinate not visible: ({x}, {y})")]
    SinkNotVisible { x: i32, y: i32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
