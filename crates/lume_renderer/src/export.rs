//! PNG snapshot export for the output image.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur when writing a snapshot.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("nothing rendered yet")]
    NoImage,

    #[error("image write failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Write RGBA8 pixel bytes as a PNG.
pub(crate) fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    bytes: &[u8],
) -> Result<(), ExportError> {
    if width == 0 || height == 0 {
        return Err(ExportError::NoImage);
    }

    image::save_buffer(path, bytes, width, height, image::ColorType::Rgba8)?;
    Ok(())
}
