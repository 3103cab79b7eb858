//! Error types for heightfield loading and normal-map generation.

/// Errors produced while building heightfields or generating normal maps.
#[derive(Debug, thiserror::Error)]
pub enum NormalMapError {
    /// A heightfield cannot have a zero dimension.
    #[error("heightfield dimensions must be non-zero, got {width}x{height}")]
    Empty { width: u32, height: u32 },

    /// Normal-map generation needs at least one grid cell on each axis;
    /// a 1-wide or 1-tall field has no triangles to take normals from.
    #[error("normal map generation needs at least a 2x2 heightfield, got {width}x{height}")]
    Dimensions { width: u32, height: u32 },

    /// The sample buffer does not match the stated dimensions.
    #[error("expected {expected} samples for a {width}x{height} heightfield, got {actual}")]
    SampleCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// A raw heightmap's byte length fits neither 8-bit nor 16-bit samples
    /// at the stated resolution.
    #[error("raw heightmap of {len} bytes does not match {width}x{height} at 8 or 16 bits per sample")]
    RawSize { len: usize, width: u32, height: u32 },
}

/// Result alias for heightfield and generator operations.
pub type NormalMapResult<T> = Result<T, NormalMapError>;
