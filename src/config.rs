//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hyperview_core::{DisplayFlags, DrawStyle, PerspectiveParams, RotationState};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Projection parameters
    #[serde(default)]
    pub view: ViewConfig,
    /// Rotation speed and frame rate
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Overlays shown at startup
    #[serde(default)]
    pub display: DisplayConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HV_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Rotation state with the configured step and nothing rotating
    pub fn rotation_state(&self) -> RotationState {
        RotationState::new().with_step(self.animation.angle_step)
    }

    /// Overlay flags at startup
    pub fn display_flags(&self) -> DisplayFlags {
        DisplayFlags::from_options(self.display.show_labels, self.display.show_axes)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Hyperview - Tesseract".to_string(),
            width: 640,
            height: 480,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Field of view in degrees, shared by both projection stages
    pub fov: f64,
    /// Near clipping distance
    pub near: f64,
    /// Far clipping distance
    pub far: f64,
    /// World units from the window center to its top edge
    pub half_extent: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov: 100.0,
            near: 0.1,
            far: 10.0,
            half_extent: 2.0,
        }
    }
}

impl ViewConfig {
    pub fn perspective(&self) -> PerspectiveParams {
        PerspectiveParams {
            fov: self.fov.to_radians(),
            near: self.near,
            far: self.far,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Radians added per frame while a rotation key is held
    pub angle_step: f64,
    /// Frames per second
    pub target_fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            angle_step: 0.01,
            target_fps: 60,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Stroke width of edges, in world units
    pub line_width: f64,
    /// Radius of vertex dots, in world units
    pub vertex_radius: f64,
    /// Label glyph height, in world units
    pub label_size: f64,
    /// TrueType/OpenType font for labels; a system font is searched when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_path: Option<String>,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.1, 0.1, 0.1, 1.0],
            line_width: 0.03,
            vertex_radius: 0.05,
            label_size: 0.1,
            font_path: None,
        }
    }
}

impl RenderingConfig {
    pub fn draw_style(&self) -> DrawStyle {
        DrawStyle {
            line_width: self.line_width,
            vertex_radius: self.vertex_radius,
            label_size: self.label_size,
            ..DrawStyle::default()
        }
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font_path.as_deref().map(Path::new)
    }
}

/// Overlays shown when the window opens
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Annotate vertices with their coordinates
    pub show_labels: bool,
    /// Draw the coordinate axes
    pub show_axes: bool,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert_eq!(config.animation.target_fps, 60);
        assert_eq!(config.rendering.background_color, [0.1, 0.1, 0.1, 1.0]);
        assert!(config.display_flags().is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("angle_step"));
        assert!(toml.contains("show_labels"));
    }

    #[test]
    fn test_perspective_from_degrees() {
        let params = ViewConfig::default().perspective();
        assert!((params.fov - std::f64::consts::PI / 1.8).abs() < 1e-12);
        assert_eq!(params.near, PerspectiveParams::default().near);
        assert_eq!(params.far, PerspectiveParams::default().far);
    }

    #[test]
    fn test_draw_style_keeps_label_offset() {
        let mut rendering = RenderingConfig::default();
        rendering.line_width = 0.1;
        let style = rendering.draw_style();
        assert_eq!(style.line_width, 0.1);
        assert_eq!(style.label_offset, DrawStyle::default().label_offset);
    }

    #[test]
    fn test_font_path_optional() {
        let mut rendering = RenderingConfig::default();
        assert!(rendering.font_path().is_none());
        assert!(!toml::to_string(&rendering).unwrap().contains("font_path"));

        rendering.font_path = Some("/tmp/label.ttf".to_string());
        assert_eq!(rendering.font_path(), Some(Path::new("/tmp/label.ttf")));
    }

    #[test]
    fn test_rotation_state_uses_step() {
        let mut config = AppConfig::default();
        config.animation.angle_step = 0.05;
        assert_eq!(config.rotation_state().step(), 0.05);
    }
}
