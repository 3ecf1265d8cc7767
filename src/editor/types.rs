#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// No image loaded yet. The shell shows only the open button.
    Unloaded,
    /// An image is loaded and the editing panel is live. There is no way
    /// back to Unloaded.
    Editing,
}

/// Raw contents of the editing panel's text widgets. The effective font
/// size is parsed from `font_size_entry` on each render, so the entry can
/// hold garbage without disturbing the session.
#[derive(Debug, Clone)]
pub struct PanelInputs {
    pub watermark_text: String,
    pub font_size_entry: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
