//! PNG export for canvases

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::surface::PixelCanvas;

/// Errors that can occur while writing an image
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Pixel buffer does not match {width}x{height}")]
    Buffer { width: u32, height: u32 },

    #[error("Failed to write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Copy a canvas into an `image` RGBA buffer
pub fn to_rgba_image(canvas: &PixelCanvas) -> Result<RgbaImage, ExportError> {
    let (width, height) = (canvas.width(), canvas.height());
    RgbaImage::from_raw(width, height, canvas.as_bytes().to_vec())
        .ok_or(ExportError::Buffer { width, height })
}

/// Write a canvas as PNG, whatever the extension of `path`
pub fn save_png(canvas: &PixelCanvas, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    to_rgba_image(canvas)?
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        "Wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}
