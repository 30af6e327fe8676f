use thiserror::Error;

// Everything that can go wrong while building fields or a renderer.
// Rendering itself never fails once construction succeeded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoxelError {
    #[error("field dimensions must be non-zero, got {width}x{height}")]
    EmptyField { width: usize, height: usize },

    #[error("field of {width}x{height} cells does not fit in memory")]
    FieldTooLarge { width: usize, height: usize },

    #[error("field data has {actual} cells, expected {expected} ({width}x{height})")]
    DataLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("height field is {height_dims:?} but color field is {color_dims:?}")]
    FieldMismatch {
        height_dims: (usize, usize),
        color_dims: (usize, usize),
    },

    #[error("sky background is {actual:?}, raster is {expected:?}")]
    SkyMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    EmptyRaster { width: usize, height: usize },

    #[error("render distance must be at least 2, got {0}")]
    RenderDistance(usize),

    #[error("height scale must be positive and finite, got {0}")]
    HeightScale(f64),

    #[error("horizon row must be finite, got {0}")]
    Horizon(f64),

    #[error("{what} factor must be at least 1")]
    ZeroFactor { what: &'static str },
}

pub type Result<T> = std::result::Result<T, VoxelError>;
