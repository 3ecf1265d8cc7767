use thiserror::Error;
use tracing::{error, info, warn};

use crate::EditorConfig;
use crate::watermark;

#[derive(Debug, Error)]
pub enum StartupCheckError {
    #[error("Required font missing: {0}")]
    RequiredFontMissing(String),

    #[error("Output directory does not exist: {0}")]
    OutputDirectoryMissing(String),
}

/// Pre-flight checks for the editing session. Failures here are
/// advisory: the render and save paths report their own errors when the
/// problem is still present.
pub fn perform_startup_checks(config: &EditorConfig) -> Result<(), Vec<StartupCheckError>> {
    let mut errors = Vec::new();

    info!("Performing startup checks...");

    // Check that the watermark font is discoverable
    match watermark::resolve_font(&config.font_file) {
        Some(path) => info!("Watermark font found: {:?}", path),
        None => {
            warn!(
                "Watermark font missing from the working directory and font search path: {}",
                config.font_file
            );
            errors.push(StartupCheckError::RequiredFontMissing(
                config.font_file.clone(),
            ));
        }
    }

    // Check that the output target's directory exists
    let missing_parent = config
        .output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty() && !parent.exists());
    if let Some(parent) = missing_parent {
        warn!("Output directory does not exist: {:?}", parent);
        errors.push(StartupCheckError::OutputDirectoryMissing(
            parent.display().to_string(),
        ));
    } else {
        info!("Output target: {:?}", config.output_path);
    }

    if errors.is_empty() {
        info!("All startup checks passed");
        Ok(())
    } else {
        error!("Startup checks failed with {} errors", errors.len());
        Err(errors)
    }
}
