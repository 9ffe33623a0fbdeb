// File: crates/bargraph-core/src/canvas.rs
// Summary: Rendered RGB888 canvas plus PNG encoding and extension-driven file output.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::error::{BarGraphError, Result};

/// Output of one [`crate::Stack::render`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Drop the alpha channel of a tightly packed RGBA8 buffer.
    pub(crate) fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let rgb: Vec<u8> = rgba.chunks_exact(4).flat_map(|px| [px[0], px[1], px[2]]).collect();
        let image = RgbImage::from_raw(width, height, rgb).ok_or(BarGraphError::ReadPixels)?;
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 { self.image.width() }
    pub fn height(&self) -> u32 { self.image.height() }

    /// RGB triple at (`x`, `y`). Panics when out of bounds, like `image::ImageBuffer`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] { self.image.get_pixel(x, y).0 }

    /// Row-major RGB bytes.
    pub fn as_raw(&self) -> &[u8] { self.image.as_raw() }

    /// Encode to PNG in memory.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Write to `path`, picking the encoding from its extension.
    ///
    /// Missing parent directories are not created.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)
            .map_err(|_| BarGraphError::UnsupportedFormat { path: path.to_path_buf() })?;
        self.image
            .save_with_format(path, format)
            .map_err(|source| BarGraphError::Save { path: path.to_path_buf(), source })?;
        info!(path = %path.display(), ?format, width = self.width(), height = self.height(), "image written");
        Ok(())
    }
}
