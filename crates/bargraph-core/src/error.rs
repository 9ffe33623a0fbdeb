// File: crates/bargraph-core/src/error.rs
// Summary: Error taxonomy for layout, rendering and image output.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BarGraphError>;

#[derive(Debug, Error)]
pub enum BarGraphError {
    #[error("panel '{title}' has no segments")]
    EmptyPanel { title: String },

    #[error("panel '{title}' has a running total of {total}; it must be positive")]
    InvalidTotal { title: String, total: f64 },

    #[error("panel '{title}': segment {index} has value {value}; values must be finite and non-negative")]
    InvalidSegmentValue { title: String, index: usize, value: f64 },

    #[error("invalid dimensions for '{what}': width={width}, height={height}")]
    InvalidDimensions { what: String, width: i32, height: i32 },

    #[error("stack has no panels")]
    EmptyStack,

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read pixels back from raster surface")]
    ReadPixels,

    #[error("cannot infer an image format from '{}'", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to encode image")]
    Encode(#[from] image::ImageError),

    #[error("failed to write image '{}'", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
