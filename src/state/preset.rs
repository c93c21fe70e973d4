//! Named parameter bundles.

use tracing::debug;

use super::features::{FeatureModes, MotionMode};
use super::{AnimationState, Settings};
use crate::color::ColorMode;
use crate::modifier::PhysicsMode;
use crate::shape::ShapeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Cathedral,
    Galactic,
    Jelly,
    Crystal,
    Default,
}

/// Everything a preset pins. Knob values and thickness are not part of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetBundle {
    pub shape: ShapeKind,
    pub layer_count: usize,
    pub twist: f64,
    /// `None` keeps the running hue.
    pub hue: Option<f64>,
    pub modes: FeatureModes,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Self::Cathedral,
        Self::Galactic,
        Self::Jelly,
        Self::Crystal,
        Self::Default,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Cathedral => "Cathedral",
            Self::Galactic => "Galactic",
            Self::Jelly => "Jelly",
            Self::Crystal => "Crystal",
            Self::Default => "Default",
        }
    }

    /// Case-insensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn bundle(self) -> PresetBundle {
        let off = FeatureModes::default();
        match self {
            Self::Cathedral => PresetBundle {
                shape: ShapeKind::Brackets,
                layer_count: 20,
                twist: 0.0,
                hue: Some(0.1),
                modes: FeatureModes {
                    color: ColorMode::Fog,
                    ..off
                },
            },
            Self::Galactic => PresetBundle {
                shape: ShapeKind::Triskelion,
                layer_count: 15,
                twist: 0.1,
                hue: None,
                modes: FeatureModes {
                    motion: MotionMode::Orbit,
                    physics: PhysicsMode::Vortex,
                    trails: true,
                    ..off
                },
            },
            Self::Jelly => PresetBundle {
                shape: ShapeKind::SineFlower,
                layer_count: 12,
                twist: 0.01,
                hue: None,
                modes: FeatureModes {
                    breathing: true,
                    color: ColorMode::Rainbow,
                    motion: MotionMode::Pulse,
                    ..off
                },
            },
            Self::Crystal => PresetBundle {
                shape: ShapeKind::Astroid,
                layer_count: 25,
                twist: 0.05,
                hue: None,
                modes: FeatureModes {
                    parallax: true,
                    color: ColorMode::Dual,
                    ..off
                },
            },
            Self::Default => PresetBundle {
                shape: ShapeKind::Triangle,
                layer_count: 16,
                twist: 0.02,
                hue: None,
                modes: off,
            },
        }
    }

    /// New settings with this preset's bundle laid over `current`.
    ///
    /// HUD visibility is carried over except by `Default`, which clears it.
    pub fn apply_to(self, current: &Settings) -> Settings {
        let mut bundle = self.bundle();
        if self != Self::Default {
            bundle.modes.hud = current.features.hud;
        }
        Settings {
            shape: bundle.shape,
            layer_count: bundle.layer_count,
            thickness: current.thickness,
            twist: bundle.twist,
            hue: bundle.hue.unwrap_or(current.hue),
            features: current.features.with_modes(bundle.modes),
        }
    }

    /// Replace the state's settings in one assignment.
    pub fn load(self, state: &mut AnimationState) {
        let next = self.apply_to(state.settings());
        state.replace_settings(next);
        debug!(preset = self.name(), "preset loaded");
    }
}

/// Load a preset by name. Unknown names leave the state untouched.
pub fn load_preset(state: &mut AnimationState, name: &str) -> bool {
    match Preset::from_name(name) {
        Some(preset) => {
            preset.load(state);
            true
        }
        None => {
            debug!(name, "unknown preset ignored");
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/preset.rs"]
mod tests;
