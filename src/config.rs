//! Startup configuration. Read once, never persisted.

use std::path::Path;

use tracing::warn;

use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ProjectorError, ProjectorResult};
use crate::state::{Limits, Settings};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectorConfig {
    pub canvas: Canvas,
    /// Display-mode flag for the window collaborator.
    pub fullscreen: bool,
    pub fps: Fps,
    /// Base rotation change per frame at full vertical pointer deflection.
    pub rotation_max_speed: f64,
    pub max_layers: usize,
    pub max_thickness: u32,
    /// Radius ratio between consecutive layers, in `(0, 1)`.
    pub spacing_ratio: f64,
    pub min_layer_radius: f64,
    /// Minimum seconds between held-key adjustments.
    pub input_cooldown_s: f64,
    pub strobe_hz: f64,
    pub seed: u64,
    pub initial_layers: usize,
    pub initial_thickness: u32,
    pub initial_twist: f64,
    pub initial_radius: f64,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fullscreen: true,
            fps: Fps::default(),
            rotation_max_speed: 0.04,
            max_layers: 60,
            max_thickness: 40,
            spacing_ratio: 0.92,
            min_layer_radius: 2.0,
            input_cooldown_s: 0.05,
            strobe_hz: 15.0,
            seed: 0x00f0_9e55,
            initial_layers: 16,
            initial_thickness: 3,
            initial_twist: 0.02,
            initial_radius: 300.0,
        }
    }
}

impl ProjectorConfig {
    pub fn from_json_str(s: &str) -> ProjectorResult<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| ProjectorError::config(format!("parse config json: {e}")))?;
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected configuration");
            return Err(e);
        }
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> ProjectorResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ProjectorError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> ProjectorResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ProjectorError::config("canvas width/height must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ProjectorError::config("fps must have num>0 and den>0"));
        }
        if !(self.spacing_ratio > 0.0 && self.spacing_ratio < 1.0) {
            return Err(ProjectorError::config("spacing_ratio must lie in (0, 1)"));
        }
        if self.max_layers == 0 || self.max_thickness == 0 {
            return Err(ProjectorError::config(
                "max_layers and max_thickness must be > 0",
            ));
        }
        if !(1..=self.max_layers).contains(&self.initial_layers) {
            return Err(ProjectorError::config(format!(
                "initial_layers must be in [1, {}]",
                self.max_layers
            )));
        }
        if !(1..=self.max_thickness).contains(&self.initial_thickness) {
            return Err(ProjectorError::config(format!(
                "initial_thickness must be in [1, {}]",
                self.max_thickness
            )));
        }
        let finite_non_negative = [
            ("rotation_max_speed", self.rotation_max_speed),
            ("min_layer_radius", self.min_layer_radius),
            ("input_cooldown_s", self.input_cooldown_s),
            ("strobe_hz", self.strobe_hz),
            ("initial_radius", self.initial_radius),
        ];
        for (name, v) in finite_non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return Err(ProjectorError::config(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !self.initial_twist.is_finite() {
            return Err(ProjectorError::config("initial_twist must be finite"));
        }
        Ok(())
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_layers: self.max_layers,
            max_thickness: self.max_thickness,
        }
    }

    pub fn initial_settings(&self) -> Settings {
        Settings {
            layer_count: self.initial_layers,
            thickness: self.initial_thickness,
            twist: self.initial_twist,
            ..Settings::default()
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
