use image::{DynamicImage, RgbaImage};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::EditorConfig;
use crate::watermark::{self, WatermarkError, WatermarkStyle};

use super::error::{EditorError, FontSizeError};
use super::events::EditorEvent;
use super::image_ops;
use super::types::{EditorPhase, ImageSize, PanelInputs};

/// Images derived from one loaded file. Replaced wholesale when another
/// file is loaded.
struct SessionImages {
    /// The file exactly as decoded. Never modified after loading.
    source: DynamicImage,
    /// `source` scaled once to the viewport. Every composite starts from
    /// a fresh copy of this.
    display: DynamicImage,
    /// `display` with the text stamped on top, rebuilt on every render.
    composite: RgbaImage,
}

/// The whole editing session: one loaded image, the panel inputs, and
/// the effective watermark settings. All mutation goes through
/// [`dispatch`](EditorSession::dispatch), so the session can be driven
/// and inspected without a window.
pub struct EditorSession {
    config: EditorConfig,
    images: Option<SessionImages>,
    inputs: PanelInputs,
    /// Last valid parsed font size. Invalid entries leave it untouched.
    font_size: u32,
    color: [u8; 3],
    /// Watermark anchor in display-image coordinates.
    position: (i32, i32),
    /// Canvas area available for the display image, set by the shell
    /// before an image is opened.
    viewport: ImageSize,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        let inputs = PanelInputs {
            watermark_text: config.default_text.clone(),
            font_size_entry: config.default_font_size.to_string(),
        };

        Self {
            font_size: config.default_font_size,
            color: config.default_color,
            position: (0, 0),
            viewport: ImageSize::new(0, 0),
            images: None,
            inputs,
            config,
        }
    }

    pub fn phase(&self) -> EditorPhase {
        if self.images.is_some() {
            EditorPhase::Editing
        } else {
            EditorPhase::Unloaded
        }
    }

    pub fn set_viewport(&mut self, viewport: ImageSize) {
        self.viewport = viewport;
    }

    /// The current composite, if an image is loaded. The shell uploads
    /// this to a texture after rendering events.
    pub fn composite(&self) -> Option<&RgbaImage> {
        self.images.as_ref().map(|images| &images.composite)
    }

    pub fn inputs(&self) -> &PanelInputs {
        &self.inputs
    }

    /// Mutable access for the panel text widgets. Edits take effect on
    /// the next rendering event.
    pub fn inputs_mut(&mut self) -> &mut PanelInputs {
        &mut self.inputs
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn source_size(&self) -> Option<ImageSize> {
        self.images
            .as_ref()
            .map(|images| ImageSize::new(images.source.width(), images.source.height()))
    }

    pub fn display_size(&self) -> Option<ImageSize> {
        self.images
            .as_ref()
            .map(|images| ImageSize::new(images.display.width(), images.display.height()))
    }

    /// Single entry point for everything the shell reports.
    pub fn dispatch(&mut self, event: EditorEvent) -> Result<(), EditorError> {
        match event {
            EditorEvent::OpenImage { path } => self.load_image(&path),
            EditorEvent::KeyPress => self.render(),
            EditorEvent::PointerDrag { x, y } | EditorEvent::PointerRelease { x, y } => {
                self.position = (x, y);
                self.render()
            }
            EditorEvent::ChooseColor(color) => {
                debug!("Watermark color set to {:?}", color);
                self.color = color;
                Ok(())
            }
            EditorEvent::Save => self.save(),
        }
    }

    fn load_image(&mut self, path: &Path) -> Result<(), EditorError> {
        let source = image_ops::load_image(path)?;
        info!(
            "Loaded image {:?} ({}x{})",
            path,
            source.width(),
            source.height()
        );

        let display_image = image_ops::scale_to_fit(&source, self.viewport);
        debug!(
            "Display image is {}x{}",
            display_image.width(),
            display_image.height()
        );

        // The stamp starts at the middle of the displayed image
        self.position = (
            display_image.width() as i32 / 2,
            display_image.height() as i32 / 2,
        );
        self.images = Some(SessionImages {
            composite: display_image.to_rgba8(),
            source,
            display: display_image,
        });

        self.render()
    }

    /// Rebuild the composite from a fresh copy of the display image.
    ///
    /// The font size entry is parsed first; a bad entry keeps the
    /// previous size and only logs a warning. A missing or unreadable
    /// font fails the whole render. Before any image is loaded this is
    /// a no-op apart from the parse.
    fn render(&mut self) -> Result<(), EditorError> {
        match self.parse_font_size() {
            Ok(size) => self.font_size = size,
            Err(e) => warn!("Keeping font size {}: {}", self.font_size, e),
        }

        let Some(images) = self.images.as_mut() else {
            return Ok(());
        };

        let font_path = watermark::resolve_font(&self.config.font_file)
            .ok_or_else(|| WatermarkError::FontNotFound(self.config.font_file.clone()))?;

        let mut composite = images.display.to_rgba8();
        let style = WatermarkStyle {
            text: &self.inputs.watermark_text,
            font_size: self.font_size,
            color: self.color,
            position: self.position,
        };
        watermark::draw_watermark(&mut composite, &style, &font_path)?;

        images.composite = composite;
        Ok(())
    }

    fn save(&mut self) -> Result<(), EditorError> {
        self.render()?;

        let Some(images) = self.images.as_ref() else {
            return Err(EditorError::NoImage);
        };

        image_ops::save_jpeg(
            &images.composite,
            &self.config.output_path,
            self.config.jpeg_quality,
        )?;
        info!("Saved watermarked image to {:?}", self.config.output_path);

        Ok(())
    }

    /// Parse the font size entry. Accepts surrounding whitespace; rejects
    /// anything non-numeric or outside the configured range.
    fn parse_font_size(&self) -> Result<u32, FontSizeError> {
        let entry = self.inputs.font_size_entry.trim();
        let value: i64 = entry
            .parse()
            .map_err(|_| FontSizeError::NotANumber(entry.to_string()))?;

        if value < i64::from(self.config.font_size_min)
            || value > i64::from(self.config.font_size_max)
        {
            return Err(FontSizeError::OutOfRange(value));
        }

        Ok(value as u32)
    }
}
