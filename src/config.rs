use config::{Config, File};
pub use config::ConfigError;
use serde::Deserialize;

use crate::overlay::PinLocation;

/// Main configuration struct
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Overlay appearance (color, font size, pinning)
    #[serde(default)]
    pub overlay: OverlayConfig,
    /// Headless view box used by the replay runner
    #[serde(default)]
    pub view: ViewConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverlayConfig {
    /// Palette color name for the line, marker and labels
    #[serde(default = "default_color")]
    pub color: String,
    /// Pixel size of the active UI font; the marker arrow scales with it
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    /// Pin the marker to the view edge when its level scrolls out of range
    #[serde(default = "default_keep_in_view")]
    pub keep_in_view: bool,
    /// Where the "pp" label sits relative to the marker
    #[serde(default)]
    pub pin: PinLocation,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            font_size_px: default_font_size_px(),
            keep_in_view: default_keep_in_view(),
            pin: PinLocation::default(),
        }
    }
}

impl OverlayConfig {
    /// Marker arrow size in pixels for the configured font
    pub fn arrow_size(&self) -> f64 {
        (1.375 * self.font_size_px).floor()
    }
}

fn default_color() -> String {
    "default_light".to_string()
}

fn default_font_size_px() -> f64 {
    16.0
}

fn default_keep_in_view() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Lower edge of the visible price range
    #[serde(default = "default_y_min")]
    pub y_min: f64,
    /// Upper edge of the visible price range
    #[serde(default = "default_y_max")]
    pub y_max: f64,
    /// View box height in pixels
    #[serde(default = "default_height")]
    pub height: f64,
    /// Scene x of the right price axis
    #[serde(default = "default_right_axis_x")]
    pub right_axis_x: f64,
    /// Width reserved for L1 labels left of the axis
    #[serde(default)]
    pub l1_line_len: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            y_min: default_y_min(),
            y_max: default_y_max(),
            height: default_height(),
            right_axis_x: default_right_axis_x(),
            l1_line_len: 0.0,
        }
    }
}

fn default_y_min() -> f64 {
    0.0
}

fn default_y_max() -> f64 {
    100.0
}

fn default_height() -> f64 {
    600.0
}

fn default_right_axis_x() -> f64 {
    1200.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    /// Load settings from a configuration file
    pub fn new(config_path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(config_path))
            // Environment variables override the file
            // e.g. PP__OVERLAY__FONT_SIZE_PX=20
            .add_source(config::Environment::with_prefix("PP").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parse settings from an in-memory TOML document
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.overlay.color, "default_light");
        assert_eq!(settings.overlay.font_size_px, 16.0);
        assert!(settings.overlay.keep_in_view);
        assert_eq!(settings.overlay.pin, PinLocation::RightOfPathCentered);
        assert_eq!(settings.view.y_max, 100.0);
        assert_eq!(settings.log.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml(
            r#"
            [overlay]
            font_size_px = 12
            pin = "below-path-left-aligned"

            [view]
            y_min = 10
            y_max = 20

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(settings.overlay.font_size_px, 12.0);
        assert_eq!(settings.overlay.color, "default_light");
        assert_eq!(settings.overlay.pin, PinLocation::BelowPathLeftAligned);
        assert_eq!(settings.view.y_min, 10.0);
        assert_eq!(settings.view.height, 600.0);
        assert_eq!(settings.log.level, "debug");
    }

    #[test]
    fn test_arrow_size_scales_with_font() {
        let mut overlay = OverlayConfig::default();
        assert_eq!(overlay.arrow_size(), 22.0);
        overlay.font_size_px = 13.0;
        assert_eq!(overlay.arrow_size(), 17.0);
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(Settings::new("/nonexistent/pp_overlay_config").is_err());
    }
}
