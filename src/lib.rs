use std::path::PathBuf;

pub mod editor;
pub mod gui;
pub mod startup_checks;
pub mod watermark;

/// Compiled-in defaults for an editing session. There is no config file;
/// the tool's only output surface is the exported image.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Initial contents of the watermark text field.
    pub default_text: String,
    /// Initial font size, also the fallback while the entry is invalid.
    pub default_font_size: u32,
    pub font_size_min: u32,
    pub font_size_max: u32,
    /// Initial watermark color as RGB.
    pub default_color: [u8; 3],
    /// Where the save button writes, overwriting without asking.
    pub output_path: PathBuf,
    pub jpeg_quality: u8,
    /// File name of the watermark font, looked up in the working
    /// directory and then the platform font directories.
    pub font_file: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_text: "Watermark".to_string(),
            default_font_size: 50,
            font_size_min: 1,
            font_size_max: 1000,
            default_color: [255, 255, 255],
            output_path: PathBuf::from("watermarked.jpg"),
            jpeg_quality: 85,
            font_file: "DejaVuSans.ttf".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_config_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.default_text, "Watermark");
        assert_eq!(config.default_font_size, 50);
        assert_eq!(config.font_size_min, 1);
        assert_eq!(config.font_size_max, 1000);
        assert_eq!(config.default_color, [255, 255, 255]);
        assert_eq!(config.output_path, PathBuf::from("watermarked.jpg"));
        assert_eq!(config.jpeg_quality, 85);
        assert_eq!(config.font_file, "DejaVuSans.ttf");
    }
}
