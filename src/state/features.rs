//! Feature toggles and their adjustable knobs, one structure per feature.

use crate::color::ColorMode;
use crate::modifier::PhysicsMode;

/// Keys of the per-feature knob table. The adjustment keys act on whichever
/// one is selected.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FeatureId {
    Parallax,
    Breathing,
    #[default]
    Color,
    Motion,
    Trails,
    Physics,
    Chaos,
}

impl FeatureId {
    pub const ALL: [FeatureId; 7] = [
        Self::Parallax,
        Self::Breathing,
        Self::Color,
        Self::Motion,
        Self::Trails,
        Self::Physics,
        Self::Chaos,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Parallax => "parallax",
            Self::Breathing => "breathing",
            Self::Color => "color_mode",
            Self::Motion => "motion_mode",
            Self::Trails => "trails",
            Self::Physics => "physics",
            Self::Chaos => "chaos",
        }
    }

    /// Initial knob for this feature.
    pub fn default_knob(self) -> Knob {
        match self {
            Self::Parallax => Knob::new(20.0, 1.0, 0.0, 100.0, "Amp"),
            Self::Breathing => Knob::new(2.0, 0.1, 0.1, 10.0, "Spd"),
            Self::Color => Knob::new(0.002, 0.0002, 0.0, 0.05, "Spd"),
            Self::Motion => Knob::new(1.0, 0.1, 0.0, 5.0, "Spd"),
            Self::Trails => Knob::new(20.0, 5.0, 0.0, 255.0, "Alpha"),
            Self::Physics => Knob::new(0.01, 0.001, 0.0, 0.1, "Str"),
            Self::Chaos => Knob::new(0.1, 0.01, 0.0, 1.0, "Amt"),
        }
    }
}

/// One bounded numeric parameter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Knob {
    value: f64,
    step: f64,
    min: f64,
    max: f64,
    label: &'static str,
}

impl Knob {
    pub fn new(value: f64, step: f64, min: f64, max: f64, label: &'static str) -> Self {
        debug_assert!(min <= max, "knob '{label}' has min > max");
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut knob = Self {
            value: min,
            step,
            min,
            max,
            label,
        };
        knob.set(value);
        knob
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Set the value, saturating at the declared bounds.
    pub fn set(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.value = value.clamp(self.min, self.max);
    }

    /// Move by `steps` increments (negative to decrement).
    pub fn nudge(&mut self, steps: i32) {
        self.set(self.value + self.step * f64::from(steps));
    }
}

/// Selector over the mutually exclusive motion modes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    #[default]
    Normal,
    Orbit,
    Swarm,
    Pulse,
    Strobe,
}

impl MotionMode {
    pub const ALL: [MotionMode; 5] = [
        Self::Normal,
        Self::Orbit,
        Self::Swarm,
        Self::Pulse,
        Self::Strobe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Orbit => "Orbit",
            Self::Swarm => "Swarm",
            Self::Pulse => "Pulse",
            Self::Strobe => "Strobe",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn cycle(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// A feature's mode (on/off flag or small enum) bound to its knob.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature<M> {
    pub mode: M,
    pub knob: Knob,
}

impl<M: Default> Feature<M> {
    fn off(id: FeatureId) -> Self {
        Self {
            mode: M::default(),
            knob: id.default_knob(),
        }
    }
}

/// Modes of every feature without their knobs. Presets replace these wholesale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureModes {
    pub parallax: bool,
    pub breathing: bool,
    pub color: ColorMode,
    pub motion: MotionMode,
    pub trails: bool,
    pub physics: PhysicsMode,
    pub chaos: bool,
    pub hud: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureSet {
    pub parallax: Feature<bool>,
    pub breathing: Feature<bool>,
    pub color: Feature<ColorMode>,
    pub motion: Feature<MotionMode>,
    pub trails: Feature<bool>,
    pub physics: Feature<PhysicsMode>,
    pub chaos: Feature<bool>,
    pub hud: bool,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            parallax: Feature::off(FeatureId::Parallax),
            breathing: Feature::off(FeatureId::Breathing),
            color: Feature::off(FeatureId::Color),
            motion: Feature::off(FeatureId::Motion),
            trails: Feature::off(FeatureId::Trails),
            physics: Feature::off(FeatureId::Physics),
            chaos: Feature::off(FeatureId::Chaos),
            hud: false,
        }
    }
}

impl FeatureSet {
    pub fn knob(&self, id: FeatureId) -> &Knob {
        match id {
            FeatureId::Parallax => &self.parallax.knob,
            FeatureId::Breathing => &self.breathing.knob,
            FeatureId::Color => &self.color.knob,
            FeatureId::Motion => &self.motion.knob,
            FeatureId::Trails => &self.trails.knob,
            FeatureId::Physics => &self.physics.knob,
            FeatureId::Chaos => &self.chaos.knob,
        }
    }

    pub fn knob_mut(&mut self, id: FeatureId) -> &mut Knob {
        match id {
            FeatureId::Parallax => &mut self.parallax.knob,
            FeatureId::Breathing => &mut self.breathing.knob,
            FeatureId::Color => &mut self.color.knob,
            FeatureId::Motion => &mut self.motion.knob,
            FeatureId::Trails => &mut self.trails.knob,
            FeatureId::Physics => &mut self.physics.knob,
            FeatureId::Chaos => &mut self.chaos.knob,
        }
    }

    /// Flip a boolean feature or advance a multi-mode one.
    pub fn toggle(&mut self, id: FeatureId) {
        match id {
            FeatureId::Parallax => self.parallax.mode = !self.parallax.mode,
            FeatureId::Breathing => self.breathing.mode = !self.breathing.mode,
            FeatureId::Color => self.color.mode = self.color.mode.cycle(),
            FeatureId::Motion => self.motion.mode = self.motion.mode.cycle(),
            FeatureId::Trails => self.trails.mode = !self.trails.mode,
            FeatureId::Physics => self.physics.mode = self.physics.mode.cycle(),
            FeatureId::Chaos => self.chaos.mode = !self.chaos.mode,
        }
    }

    /// Whether the feature is doing anything (bool on, or a non-zero mode).
    pub fn is_active(&self, id: FeatureId) -> bool {
        match id {
            FeatureId::Parallax => self.parallax.mode,
            FeatureId::Breathing => self.breathing.mode,
            FeatureId::Color => self.color.mode != ColorMode::Solid,
            FeatureId::Motion => self.motion.mode != MotionMode::Normal,
            FeatureId::Trails => self.trails.mode,
            FeatureId::Physics => self.physics.mode != PhysicsMode::None,
            FeatureId::Chaos => self.chaos.mode,
        }
    }

    pub fn modes(&self) -> FeatureModes {
        FeatureModes {
            parallax: self.parallax.mode,
            breathing: self.breathing.mode,
            color: self.color.mode,
            motion: self.motion.mode,
            trails: self.trails.mode,
            physics: self.physics.mode,
            chaos: self.chaos.mode,
            hud: self.hud,
        }
    }

    /// Copy of this set with every mode replaced and every knob kept.
    pub fn with_modes(&self, modes: FeatureModes) -> Self {
        let mut out = *self;
        out.parallax.mode = modes.parallax;
        out.breathing.mode = modes.breathing;
        out.color.mode = modes.color;
        out.motion.mode = modes.motion;
        out.trails.mode = modes.trails;
        out.physics.mode = modes.physics;
        out.chaos.mode = modes.chaos;
        out.hud = modes.hud;
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/features.rs"]
mod tests;
