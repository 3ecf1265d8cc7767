use thiserror::Error;

use crate::watermark::WatermarkError;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Watermark error: {0}")]
    WatermarkError(#[from] WatermarkError),

    #[error("No image loaded")]
    NoImage,
}

/// Why a font size entry was rejected. The session keeps the previous
/// size in either case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FontSizeError {
    #[error("Font size is not a number: {0:?}")]
    NotANumber(String),

    #[error("Font size {0} is out of range")]
    OutOfRange(i64),
}
