use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directories searched for the watermark font after the working
/// directory. Non-existent entries are skipped, so the list can cover
/// several platforms at once.
const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    "C:\\Windows\\Fonts",
];

#[derive(Debug, Error)]
pub enum WatermarkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Watermark font missing: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font file: {0}")]
    FontParseError(PathBuf),
}

/// Appearance and placement of the text stamp. The position is the
/// top-left corner of the text in image coordinates; text running past
/// the image edge simply clips.
pub struct WatermarkStyle<'a> {
    pub text: &'a str,
    pub font_size: u32,
    pub color: [u8; 3],
    pub position: (i32, i32),
}

/// Find the watermark font, checking the working directory before the
/// platform font directories.
pub fn resolve_font(font_file: &str) -> Option<PathBuf> {
    let local = PathBuf::from(font_file);
    if local.exists() {
        return Some(local);
    }

    for dir in FONT_SEARCH_PATHS {
        let candidate = Path::new(dir).join(font_file);
        if candidate.exists() {
            debug!("Watermark font found: {:?}", candidate);
            return Some(candidate);
        }
    }

    None
}

/// Draw the watermark text onto an image buffer.
///
/// The font is read from disk on every call, matching the session model
/// where each render starts from scratch.
pub fn draw_watermark(
    canvas: &mut RgbaImage,
    style: &WatermarkStyle<'_>,
    font_path: &Path,
) -> Result<(), WatermarkError> {
    let font_data = std::fs::read(font_path)?;
    let font = FontVec::try_from_vec(font_data)
        .map_err(|_| WatermarkError::FontParseError(font_path.to_path_buf()))?;

    let scale = PxScale::from(style.font_size as f32);
    let [r, g, b] = style.color;
    let (x, y) = style.position;

    draw_text_mut(canvas, Rgba([r, g, b, 255]), x, y, scale, &font, style.text);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_style(text: &str) -> WatermarkStyle<'_> {
        WatermarkStyle {
            text,
            font_size: 24,
            color: [255, 255, 255],
            position: (10, 10),
        }
    }

    #[test]
    fn test_resolve_font_misses_unknown_file() {
        assert!(resolve_font("sukashi-test-no-such-font.ttf").is_none());
    }

    #[test]
    fn test_draw_watermark_changes_pixels() {
        // Skip test if no font is installed
        let Some(font_path) = resolve_font("DejaVuSans.ttf") else {
            return;
        };

        let mut canvas = RgbaImage::from_pixel(200, 100, Rgba([0, 0, 0, 255]));
        draw_watermark(&mut canvas, &test_style("Watermark"), &font_path).unwrap();

        let touched = canvas.pixels().filter(|p| p[0] > 0).count();
        assert!(touched > 0, "expected the stamp to change some pixels");
    }

    #[test]
    fn test_draw_watermark_off_canvas_is_harmless() {
        let Some(font_path) = resolve_font("DejaVuSans.ttf") else {
            return;
        };

        let mut canvas = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 255]));
        let style = WatermarkStyle {
            position: (-500, -500),
            ..test_style("Watermark")
        };
        draw_watermark(&mut canvas, &style, &font_path).unwrap();

        assert!(canvas.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_draw_watermark_rejects_bad_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();

        let mut canvas = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let result = draw_watermark(&mut canvas, &test_style("x"), &bogus);

        assert!(matches!(result, Err(WatermarkError::FontParseError(_))));
    }
}
