//! Geometric modifiers applied around shape generation.
//!
//! Frame-level stages (breathing, chaos) act on the frame's base radius and
//! rotation before any layer math. Point-level stages (vortex, magnetic)
//! distort generated points relative to the layer's own center.

use kurbo::{Point, Vec2};

use crate::foundation::math::{Rng64, rotate_about};
use crate::shape::ShapeOutput;
use crate::state::features::FeatureSet;

/// Radius of the magnetic attractor's influence disc.
pub const MAGNET_INFLUENCE: f64 = 200.0;
/// Half-extents of the attractor's figure-eight path.
pub const MAGNET_PATH: Vec2 = Vec2::new(300.0, 200.0);

const BREATHING_DEPTH: f64 = 0.2;

/// Selector over the mutually exclusive point-distortion schemes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PhysicsMode {
    #[default]
    None,
    Vortex,
    Magnetic,
}

impl PhysicsMode {
    pub const ALL: [PhysicsMode; 3] = [Self::None, Self::Vortex, Self::Magnetic];

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Vortex => "Vortex",
            Self::Magnetic => "Magnetic",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn cycle(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointDistortion {
    Vortex { strength: f64 },
    Magnetic,
}

/// Active modifiers for one frame, normalized from the feature set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModifierPipeline {
    /// Breathing speed, when enabled.
    pub breathing: Option<f64>,
    /// Chaos amount, when enabled.
    pub chaos: Option<f64>,
    pub distortion: Option<PointDistortion>,
}

impl ModifierPipeline {
    pub fn from_features(features: &FeatureSet) -> Self {
        let distortion = match features.physics.mode {
            PhysicsMode::None => None,
            PhysicsMode::Vortex => Some(PointDistortion::Vortex {
                strength: features.physics.knob.value(),
            }),
            PhysicsMode::Magnetic => Some(PointDistortion::Magnetic),
        };
        Self {
            breathing: features
                .breathing
                .mode
                .then(|| features.breathing.knob.value()),
            chaos: features.chaos.mode.then(|| features.chaos.knob.value()),
            distortion,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.breathing.is_none() && self.chaos.is_none() && self.distortion.is_none()
    }

    /// Breathing pre-scale of the frame's base radius.
    pub fn breathe(&self, radius: f64, time_s: f64) -> f64 {
        match self.breathing {
            Some(speed) => radius * breathing_scale(time_s, speed),
            None => radius,
        }
    }

    /// Chaos jitter of base rotation and radius. Returns `(rotation, radius)`.
    pub fn jitter(&self, rotation: f64, radius: f64, rng: &mut Rng64) -> (f64, f64) {
        match self.chaos {
            Some(amount) => chaos_jitter(rotation, radius, amount, rng),
            None => (rotation, radius),
        }
    }

    /// Distort every generated point about the layer center.
    pub fn distort(&self, output: &mut ShapeOutput, center: Point, time_s: f64) {
        match self.distortion {
            None => {}
            Some(PointDistortion::Vortex { strength }) => {
                output.map_points(|p| vortex(p, center, strength));
            }
            Some(PointDistortion::Magnetic) => {
                let attractor = magnetic_attractor(center, time_s);
                output.map_points(|p| magnetic_pull(p, attractor));
            }
        }
    }
}

pub fn breathing_scale(time_s: f64, speed: f64) -> f64 {
    1.0 + BREATHING_DEPTH * (time_s * speed).sin()
}

/// Rotate `p` about `center` by `distance · strength` radians.
pub fn vortex(p: Point, center: Point, strength: f64) -> Point {
    let dist = p.distance(center);
    rotate_about(p, center, dist * strength)
}

/// Attractor position on a figure-eight around `center`.
pub fn magnetic_attractor(center: Point, time_s: f64) -> Point {
    center
        + Vec2::new(
            time_s.cos() * MAGNET_PATH.x,
            (time_s * 2.0).sin() * MAGNET_PATH.y,
        )
}

/// Pull `p` halfway-weighted toward `attractor` when inside its influence disc.
pub fn magnetic_pull(p: Point, attractor: Point) -> Point {
    let offset = p - attractor;
    let dist = offset.hypot();
    if dist >= MAGNET_INFLUENCE {
        return p;
    }
    let pull = (MAGNET_INFLUENCE - dist) / MAGNET_INFLUENCE;
    p - offset * (pull * 0.5)
}

/// Uniform rotation noise in `±amount/2` and radius factor in `[1-amount, 1+amount)`.
pub fn chaos_jitter(rotation: f64, radius: f64, amount: f64, rng: &mut Rng64) -> (f64, f64) {
    let rotation = rotation + rng.next_centered(0.5) * amount;
    let radius = radius * (1.0 - amount + rng.next_f64_01() * amount * 2.0);
    (rotation, radius)
}

#[cfg(test)]
#[path = "../tests/unit/modifier.rs"]
mod tests;
