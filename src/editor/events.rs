use std::path::PathBuf;

/// Everything the window shell can ask of the session. Each widget
/// interaction maps to exactly one of these, which keeps the session
/// testable without a live window.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A file was picked in the open dialog. A cancelled dialog sends
    /// nothing at all.
    OpenImage { path: PathBuf },
    /// One of the panel text fields changed.
    KeyPress,
    /// The pointer moved over the canvas with the primary button held.
    /// Coordinates are relative to the canvas origin.
    PointerDrag { x: i32, y: i32 },
    /// The primary button was released over the canvas.
    PointerRelease { x: i32, y: i32 },
    /// A new color was confirmed in the color picker. This updates state
    /// only; the canvas repaints on the next rendering event.
    ChooseColor([u8; 3]),
    /// The save button was pressed.
    Save,
}
