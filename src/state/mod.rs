//! Mutable animation parameters, mutated once per frame from input.

pub mod features;
pub mod preset;
pub mod waypoint;

use kurbo::Vec2;

use crate::color::advance_hue;
use crate::foundation::math::{Rng64, wrap_unit};
use crate::shape::ShapeKind;
use features::{FeatureId, FeatureSet, MotionMode};

/// Amount the twist keys change twist per accepted adjustment.
pub const TWIST_STEP: f64 = 0.002;
/// Per-frame damping applied to swarm offsets.
pub const SWARM_DAMPING: f64 = 0.95;
/// Orbit angle advance per frame at motion speed 1.
pub const ORBIT_STEP: f64 = 0.01;

/// Inclusive upper bounds for the integer parameters. Lower bounds are 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_layers: usize,
    pub max_thickness: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_layers: 60,
            max_thickness: 40,
        }
    }
}

/// The configuration half of the animation state: everything a waypoint
/// captures and a preset may replace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub shape: ShapeKind,
    pub layer_count: usize,
    pub thickness: u32,
    /// Per-layer rotation increment.
    pub twist: f64,
    /// Global hue in `[0, 1)`.
    pub hue: f64,
    pub features: FeatureSet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Triangle,
            layer_count: 16,
            thickness: 3,
            twist: 0.02,
            hue: 0.0,
            features: FeatureSet::default(),
        }
    }
}

impl Settings {
    /// Copy with every bounded field saturated into `limits`.
    pub fn clamped(mut self, limits: Limits) -> Self {
        self.layer_count = self.layer_count.clamp(1, limits.max_layers.max(1));
        self.thickness = self.thickness.clamp(1, limits.max_thickness.max(1));
        self.hue = wrap_unit(self.hue);
        if !self.twist.is_finite() {
            self.twist = 0.0;
        }
        self
    }
}

/// Full animation state: settings plus the runtime accumulators that are
/// never snapshotted.
#[derive(Clone, Debug)]
pub struct AnimationState {
    settings: Settings,
    selected: FeatureId,
    limits: Limits,
    /// Unbounded rotation accumulator; only the reset key wraps it.
    pub base_rotation: f64,
    /// Frame radius after pointer mapping, breathing and chaos.
    pub radius: f64,
    pub orbit_angle: f64,
    swarm: Vec<Vec2>,
    noise_seeds: Vec<f64>,
}

impl AnimationState {
    /// Fresh state. Noise seeds are drawn once here and never change.
    pub fn new(settings: Settings, limits: Limits, radius: f64, rng: &mut Rng64) -> Self {
        let slots = limits.max_layers.max(1);
        Self {
            settings: settings.clamped(limits),
            selected: FeatureId::default(),
            limits,
            base_rotation: 0.0,
            radius,
            orbit_angle: 0.0,
            swarm: vec![Vec2::ZERO; slots],
            noise_seeds: (0..slots).map(|_| rng.next_f64_01() * 100.0).collect(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn features(&self) -> &FeatureSet {
        &self.settings.features
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn selected(&self) -> FeatureId {
        self.selected
    }

    pub fn select(&mut self, id: FeatureId) {
        self.selected = id;
    }

    /// Atomically replace the settings (saturated into the limits).
    pub fn replace_settings(&mut self, settings: Settings) {
        self.settings = settings.clamped(self.limits);
    }

    pub fn cycle_shape(&mut self, forward: bool) {
        let shape = self.settings.shape;
        self.settings.shape = if forward { shape.next() } else { shape.prev() };
    }

    pub fn adjust_layers(&mut self, delta: i64) {
        let n = self.settings.layer_count as i64 + delta;
        self.settings.layer_count = n.clamp(1, self.limits.max_layers.max(1) as i64) as usize;
    }

    pub fn adjust_thickness(&mut self, delta: i64) {
        let n = i64::from(self.settings.thickness) + delta;
        self.settings.thickness = n.clamp(1, i64::from(self.limits.max_thickness.max(1))) as u32;
    }

    pub fn adjust_twist(&mut self, delta: f64) {
        self.settings.twist += delta;
    }

    /// Toggle a feature and make its knob the adjustment target.
    pub fn toggle_feature(&mut self, id: FeatureId) {
        self.settings.features.toggle(id);
        self.selected = id;
    }

    pub fn toggle_hud(&mut self) {
        self.settings.features.hud = !self.settings.features.hud;
    }

    /// Nudge the selected knob by `steps` increments, saturating.
    pub fn nudge_selected(&mut self, steps: i32) {
        self.settings.features.knob_mut(self.selected).nudge(steps);
    }

    pub fn reset_rotation(&mut self) {
        self.base_rotation = 0.0;
    }

    /// Advance the hue by the color knob.
    pub fn advance_hue(&mut self) {
        let speed = self.settings.features.color.knob.value();
        self.settings.hue = advance_hue(self.settings.hue, speed);
    }

    /// Advance the per-frame motion accumulators for the active motion mode.
    pub fn advance_motion(&mut self, rng: &mut Rng64) {
        let speed = self.settings.features.motion.knob.value();
        match self.settings.features.motion.mode {
            MotionMode::Orbit => self.orbit_angle += ORBIT_STEP * speed,
            MotionMode::Swarm => {
                for offset in &mut self.swarm {
                    let step = Vec2::new(rng.next_centered(1.0), rng.next_centered(1.0));
                    *offset = (*offset + step) * SWARM_DAMPING;
                }
            }
            MotionMode::Normal | MotionMode::Pulse | MotionMode::Strobe => {}
        }
    }

    pub fn swarm_offset(&self, layer: usize) -> Vec2 {
        self.swarm.get(layer).copied().unwrap_or(Vec2::ZERO)
    }

    pub fn noise_seed(&self, layer: usize) -> f64 {
        if self.noise_seeds.is_empty() {
            return 0.0;
        }
        self.noise_seeds[layer % self.noise_seeds.len()]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/mod.rs"]
mod tests;
