use image::{
    DynamicImage, ImageEncoder, RgbaImage, codecs::jpeg::JpegEncoder, imageops::FilterType,
};
use std::path::Path;
use tracing::debug;

use super::error::EditorError;
use super::types::ImageSize;

/// Load an image from disk.
pub(super) fn load_image(path: &Path) -> Result<DynamicImage, EditorError> {
    debug!("Opening image file: {:?}", path);
    Ok(image::open(path)?)
}

/// Scale an image down to fit within the viewport, preserving aspect ratio.
pub(super) fn scale_to_fit(img: &DynamicImage, viewport: ImageSize) -> DynamicImage {
    let (orig_width, orig_height) = (img.width(), img.height());

    // Don't upscale - an image smaller than the viewport keeps its size
    let final_width = viewport.width.min(orig_width);
    let final_height = viewport.height.min(orig_height);

    // Only resize if dimensions are different
    if final_width != orig_width || final_height != orig_height {
        img.resize(final_width, final_height, FilterType::Lanczos3)
    } else {
        img.clone()
    }
}

/// Save a composite as JPEG. The alpha channel is dropped since JPEG has
/// no alpha support.
pub(super) fn save_jpeg(image: &RgbaImage, path: &Path, quality: u8) -> Result<(), EditorError> {
    let rgb_image = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let output = std::fs::File::create(path)?;

    let encoder = JpegEncoder::new_with_quality(output, quality);
    encoder.write_image(
        &rgb_image,
        rgb_image.width(),
        rgb_image.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    debug!("JPEG written to {:?} at quality {}", path, quality);

    Ok(())
}
