// config.rs - Start-up configuration for the face

use std::path::Path;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::field::DisplaySize;
use crate::patterns::Pattern;
use crate::settings::{clamp_cell_size, FieldSettings, CELL_SIZE_MAX};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "CONWAY_FACE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    pub display_width: u16,
    pub display_height: u16,
    /// Milliseconds between auto-play generations.
    pub evolve_interval_ms: u64,
    /// Milliseconds between repeated steps while Down is held.
    pub step_repeat_ms: u64,
    pub pattern: Pattern,
    pub cell_size: u8,
    pub show_grid: bool,
    /// Screen pixels per display pixel in the desktop window.
    pub zoom: f32,
    /// Fixed seed for reproducible runs; seeded from the clock when absent.
    pub seed: Option<u64>,
    pub autoplay: bool,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            display_width: DisplaySize::PEBBLE.width,
            display_height: DisplaySize::PEBBLE.height,
            evolve_interval_ms: 200,
            step_repeat_ms: 100,
            pattern: Pattern::Clock,
            cell_size: CELL_SIZE_MAX - 1,
            show_grid: true,
            zoom: 3.0,
            seed: None,
            autoplay: true,
        }
    }
}

impl FaceConfig {
    pub fn from_json(path: &str, text: &str) -> Result<Self, ConfigError> {
        let config: FaceConfig = serde_json::from_str(text)
            .map_err(|source| ConfigError::Parse { path: path.to_string(), source })?;
        Ok(config.sanitized())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let name = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: name.clone(), source })?;
        Self::from_json(&name, &text)
    }

    /// Load from `CONWAY_FACE_CONFIG` when set, defaults otherwise.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Pull out-of-range values back into range.
    pub fn sanitized(mut self) -> Self {
        let defaults = FaceConfig::default();
        let cell_size = clamp_cell_size(self.cell_size);
        if cell_size != self.cell_size {
            warn!("cell_size {} out of range, using {}", self.cell_size, cell_size);
            self.cell_size = cell_size;
        }
        if self.evolve_interval_ms == 0 {
            warn!("evolve_interval_ms must be positive, using {}", defaults.evolve_interval_ms);
            self.evolve_interval_ms = defaults.evolve_interval_ms;
        }
        if self.step_repeat_ms == 0 {
            warn!("step_repeat_ms must be positive, using {}", defaults.step_repeat_ms);
            self.step_repeat_ms = defaults.step_repeat_ms;
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            warn!("zoom {} invalid, using {}", self.zoom, defaults.zoom);
            self.zoom = defaults.zoom;
        }
        if self.display_width == 0 || self.display_height == 0 {
            warn!("display size {}x{} invalid, using default", self.display_width, self.display_height);
            self.display_width = defaults.display_width;
            self.display_height = defaults.display_height;
        }
        self
    }

    pub fn display(&self) -> DisplaySize {
        DisplaySize { width: self.display_width, height: self.display_height }
    }

    pub fn field_settings(&self) -> FieldSettings {
        FieldSettings::new(self.cell_size, self.show_grid)
    }

    pub fn evolve_interval(&self) -> Duration {
        Duration::from_millis(self.evolve_interval_ms)
    }

    pub fn step_repeat(&self) -> Duration {
        Duration::from_millis(self.step_repeat_ms)
    }
}
