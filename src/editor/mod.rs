// Editor module - session state, events, and rendering
mod core;
mod error;
mod events;
mod image_ops;
mod types;

// Re-export public items
pub use core::EditorSession;
pub use error::{EditorError, FontSizeError};
pub use events::EditorEvent;
pub use types::{EditorPhase, ImageSize, PanelInputs};
