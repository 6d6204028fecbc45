//! Shell configuration.
//!
//! Read from `corvidos.toml` in the app config directory. Every field has a
//! default, so a missing file or a partial file is fine.

use crate::error::{DeskError, DeskResult};
use crate::geometry::{DragBounds, Size, DEFAULT_HANDLE_HEIGHT, DEFAULT_MIN_VISIBLE_FRACTION};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "corvidos.toml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub windows: WindowConfig,
    pub leaderboard: LeaderboardConfig,
    pub logging: LoggingConfig,
}

/// Window placement and geometry limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Top-left of the first window, both axes
    pub base_origin: f64,
    /// Added per already-open window so new windows cascade
    pub cascade_step: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Share of a window's width that must stay inside the viewport while dragging
    pub min_visible_fraction: f64,
    /// Title bar height; it must stay inside the viewport while dragging
    pub handle_height: f64,
    /// First z-order issued is `z_base + 1`
    pub z_base: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            base_origin: 50.0,
            cascade_step: 30.0,
            min_width: 300.0,
            min_height: 200.0,
            min_visible_fraction: DEFAULT_MIN_VISIBLE_FRACTION,
            handle_height: DEFAULT_HANDLE_HEIGHT,
            z_base: 100,
        }
    }
}

impl WindowConfig {
    pub fn min_size(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }

    pub fn drag_bounds(&self, viewport: Size) -> DragBounds {
        DragBounds::new(viewport, self.min_visible_fraction, self.handle_height)
    }

    /// Replace NaN and infinite values (TOML accepts `nan` and `inf`) with the defaults
    fn sanitize(&mut self) {
        let defaults = WindowConfig::default();
        let fields = [
            ("base_origin", &mut self.base_origin, defaults.base_origin),
            ("cascade_step", &mut self.cascade_step, defaults.cascade_step),
            ("min_width", &mut self.min_width, defaults.min_width),
            ("min_height", &mut self.min_height, defaults.min_height),
            ("min_visible_fraction", &mut self.min_visible_fraction, defaults.min_visible_fraction),
            ("handle_height", &mut self.handle_height, defaults.handle_height),
        ];

        for (name, value, default) in fields {
            if !value.is_finite() {
                tracing::warn!(field = name, value = %value, "Non-finite window setting, using default");
                *value = default;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    /// Backend API root, without trailing slash
    pub api_base: String,
    pub limit: u32,
    pub timeout_secs: u64,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8080/api/v1".to_string(),
            limit: 50,
            timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DeskConfig {
    pub fn from_toml_str(content: &str) -> DeskResult<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.windows.sanitize();
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> DeskResult<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| DeskError::io(path, e))?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeskConfig::load_or_default(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, DeskConfig::default());
        assert_eq!(config.windows.cascade_step, 30.0);
        assert_eq!(config.windows.z_base, 100);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[windows]\nmin_width = 320.0\n\n[leaderboard]\napi_base = \"https://corvid.example/api/v1\"\n",
        )
        .unwrap();

        let config = DeskConfig::load_or_default(&path).unwrap();
        assert_eq!(config.windows.min_width, 320.0);
        assert_eq!(config.windows.min_height, 200.0);
        assert_eq!(config.leaderboard.api_base, "https://corvid.example/api/v1");
        assert_eq!(config.leaderboard.limit, 50);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_non_finite_window_values_replaced_by_defaults() {
        let config = DeskConfig::from_toml_str(
            "[windows]\nmin_visible_fraction = nan\nhandle_height = inf\ncascade_step = -nan\nmin_width = 320.0\n",
        )
        .unwrap();

        let defaults = WindowConfig::default();
        assert_eq!(config.windows.min_visible_fraction, defaults.min_visible_fraction);
        assert_eq!(config.windows.handle_height, defaults.handle_height);
        assert_eq!(config.windows.cascade_step, defaults.cascade_step);
        assert_eq!(config.windows.min_width, 320.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let err = DeskConfig::from_toml_str("[windows\nmin_width = ").unwrap_err();
        assert!(matches!(err, DeskError::Toml(_)));
    }
}
