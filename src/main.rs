use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sukashi::{EditorConfig, gui, startup_checks};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default to info, overridable through RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = EditorConfig::default();
    info!("Starting sukashi");

    // Perform startup checks
    match startup_checks::perform_startup_checks(&config) {
        Ok(()) => info!("All startup checks passed"),
        Err(errors) => {
            for error in &errors {
                warn!("Startup check failed: {}", error);
            }
            // Both checks are advisory; the render and save paths report
            // their own errors while the app is running
            warn!("Continuing despite failed startup checks");
        }
    }

    gui::run(config)?;

    Ok(())
}
