//! # Bootstrap Configuration
//!
//! Window parameters, OpenGL context hints and frame presentation options.
//! The defaults are the compile-time parameters of the tilemap window:
//! 800 x 600, titled "OpenGL Tilemap", OpenGL 3.3 core, forward compatible.

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};

/// Default window width in pixels
pub const DEFAULT_WIDTH: u32 = 800;
/// Default window height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;
/// Default window title
pub const DEFAULT_TITLE: &str = "OpenGL Tilemap";

/// Window creation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Client area width in pixels
    pub width: u32,
    /// Client area height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// Whether the user may resize the window
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            resizable: true,
        }
    }
}

/// OpenGL profile requested from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GlProfile {
    /// Core profile, no deprecated functionality
    #[default]
    Core,
    /// Compatibility profile
    Compat,
    /// Let the driver decide
    Any,
}

/// Context creation hints
///
/// These are hints: the platform may fall back to a different context or
/// refuse to create the window at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextHints {
    /// Requested major version
    pub major: u32,
    /// Requested minor version
    pub minor: u32,
    /// Requested profile
    pub profile: GlProfile,
    /// Drop deprecated functionality (required for core contexts on macOS)
    pub forward_compatible: bool,
}

impl Default for ContextHints {
    fn default() -> Self {
        Self {
            major: 3,
            minor: 3,
            profile: GlProfile::Core,
            forward_compatible: true,
        }
    }
}

/// Complete configuration of the render loop bootstrap
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Buffer swap interval; `None` keeps the platform default pacing
    pub swap_interval: Option<u32>,
    /// Background color; `None` keeps the context's implicit clear color
    pub clear_color: Option<[f32; 4]>,
    /// Window creation parameters
    pub window: WindowConfig,
    /// OpenGL context hints
    pub context: ContextHints,
}

impl Config for BootstrapConfig {}

impl BootstrapConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the window size
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Override the window title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the background color used by every clear
    #[must_use]
    pub fn with_clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = Some(color);
        self
    }

    /// Set the buffer swap interval (1 = vsync)
    #[must_use]
    pub fn with_swap_interval(mut self, interval: u32) -> Self {
        self.swap_interval = Some(interval);
        self
    }

    /// Check values that deserialize fine but cannot create a window
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.window.title.trim().is_empty() {
            return Err(ConfigError::Invalid("window title is empty".to_string()));
        }
        if let Some(color) = self.clear_color {
            if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(ConfigError::Invalid(format!(
                    "clear color channels must be within 0.0..=1.0, got {color:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_tilemap_window() {
        let config = BootstrapConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "OpenGL Tilemap");
        assert_eq!(config.context.major, 3);
        assert_eq!(config.context.minor, 3);
        assert_eq!(config.context.profile, GlProfile::Core);
        assert!(config.context.forward_compatible);
        assert_eq!(config.swap_interval, None);
        assert_eq!(config.clear_color, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_unusable_values() {
        assert!(BootstrapConfig::default().with_size(0, 600).validate().is_err());
        assert!(BootstrapConfig::default().with_title("  ").validate().is_err());
        assert!(BootstrapConfig::default()
            .with_clear_color([0.2, 0.3, 1.5, 1.0])
            .validate()
            .is_err());
        assert!(BootstrapConfig::default()
            .with_clear_color([0.2, 0.3, 0.3, 1.0])
            .validate()
            .is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "swap_interval = 1\n\n[window]\ntitle = \"Tiles\"").unwrap();

        let config = BootstrapConfig::load(file.path()).unwrap();
        assert_eq!(config.window.title, "Tiles");
        assert_eq!(config.window.width, DEFAULT_WIDTH);
        assert_eq!(config.swap_interval, Some(1));
        assert_eq!(config.context, ContextHints::default());
    }

    #[test]
    fn test_ron_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bootstrap.ron");
        let config = BootstrapConfig::default()
            .with_size(1024, 768)
            .with_clear_color([0.2, 0.3, 0.3, 1.0]);

        config.save_to_file(&path).unwrap();
        assert_eq!(BootstrapConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[window]\nwidth = 0").unwrap();

        assert!(matches!(BootstrapConfig::load(file.path()), Err(ConfigError::Invalid(_))));
    }
}
