//! Layer compositor: resolves every depth's radius, rotation, center and
//! color, runs the shape generator and point distortion, and emits draw
//! commands in painter's order.

use kurbo::{Point, Vec2};

use crate::color::layer_color;
use crate::foundation::core::{Canvas, Rgb8};
use crate::modifier::ModifierPipeline;
use crate::render::{Clear, DrawCommand, Frame};
use crate::shape::registry::ShapeRegistry;
use crate::shape::{ShapeCtx, ShapeOutput};
use crate::state::AnimationState;
use crate::state::features::MotionMode;

/// Upper bound on the z-pushed spacing ratio, keeping radii strictly decreasing.
const MAX_EFFECTIVE_SPACING: f64 = 0.999;
const ORBIT_RADIUS: f64 = 50.0;
const PULSE_DEPTH: f64 = 0.1;
const Z_PUSH_DEPTH: f64 = 0.05;

/// One resolved depth of the nested arrangement. Recomputed every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub index: usize,
    pub radius: f64,
    pub rotation: f64,
    pub center: Point,
    pub color: Rgb8,
}

#[derive(Debug)]
pub struct Compositor {
    registry: ShapeRegistry,
    center: Point,
    spacing_ratio: f64,
    min_radius: f64,
    strobe_hz: f64,
}

impl Compositor {
    pub fn new(canvas: Canvas, spacing_ratio: f64, min_radius: f64, strobe_hz: f64) -> Self {
        Self {
            registry: ShapeRegistry::with_builtins(),
            center: canvas.center(),
            spacing_ratio,
            min_radius,
            strobe_hz,
        }
    }

    pub fn with_registry(mut self, registry: ShapeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Spacing ratio for this frame, including the parallax z-push.
    pub fn effective_spacing(&self, state: &AnimationState, time_s: f64) -> f64 {
        let ratio = self.spacing_ratio;
        if !state.features().parallax.mode {
            return ratio;
        }
        let pushed = ratio * (1.0 + Z_PUSH_DEPTH * (0.5 * time_s).sin());
        pushed.min(MAX_EFFECTIVE_SPACING.max(ratio))
    }

    /// Resolve the visible layers, outermost first.
    ///
    /// Iteration stops at the first depth whose radius drops below the
    /// minimum; strobe-skipped depths are omitted but do not stop iteration.
    pub fn layers(&self, state: &AnimationState, time_s: f64) -> Vec<Layer> {
        let settings = state.settings();
        let features = &settings.features;
        let count = settings.layer_count;
        let ratio = self.effective_spacing(state, time_s);
        let motion = features.motion.mode;
        let strobe_phase = (time_s * self.strobe_hz).floor().max(0.0) as u64;

        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            let depth = i as f64;
            let mut radius = state.radius * ratio.powi(i as i32);
            if motion == MotionMode::Pulse {
                radius *= 1.0 + PULSE_DEPTH * (2.0 * time_s + 0.5 * depth).sin();
            }
            if radius < self.min_radius {
                break;
            }
            if motion == MotionMode::Strobe && (i as u64 + strobe_phase) % 3 != 0 {
                continue;
            }

            out.push(Layer {
                index: i,
                radius,
                rotation: state.base_rotation + depth * settings.twist,
                center: self.center + self.layer_offset(state, i, time_s),
                color: layer_color(settings.hue, features.color.mode, i, count),
            });
        }
        out
    }

    /// Sum of the positional offsets active for layer `i`.
    fn layer_offset(&self, state: &AnimationState, i: usize, time_s: f64) -> Vec2 {
        let features = state.features();
        let depth = i as f64;
        let fraction = depth / state.settings().layer_count.max(1) as f64;

        let mut offset = Vec2::ZERO;
        if features.parallax.mode {
            let amp = features.parallax.knob.value();
            offset += Vec2::new(
                (0.5 * time_s + 0.2 * depth).sin(),
                (0.3 * time_s + 0.2 * depth).cos(),
            ) * (amp * fraction);
        }
        match features.motion.mode {
            MotionMode::Orbit => {
                let angle = state.orbit_angle + 0.1 * depth;
                offset += Vec2::new(angle.cos(), angle.sin()) * (ORBIT_RADIUS * fraction);
            }
            MotionMode::Swarm => offset += state.swarm_offset(i),
            MotionMode::Normal | MotionMode::Pulse | MotionMode::Strobe => {}
        }
        offset
    }

    /// Build the frame for the current state. The overlay is left empty.
    #[tracing::instrument(
        level = "trace",
        skip(self, state),
        fields(shape = state.settings().shape.name(), layers = state.settings().layer_count)
    )]
    pub fn compose(&self, state: &AnimationState, time_s: f64) -> Frame {
        let settings = state.settings();
        let features = &settings.features;
        let pipeline = ModifierPipeline::from_features(features);
        let thickness = f64::from(settings.thickness);

        let clear = if features.trails.mode {
            Clear::Fade {
                alpha: features.trails.knob.value().round().clamp(0.0, 255.0) as u8,
            }
        } else {
            Clear::Solid(Rgb8::BLACK)
        };

        let mut commands = Vec::new();
        for layer in self.layers(state, time_s) {
            let ctx = ShapeCtx {
                center: layer.center,
                radius: layer.radius,
                rotation: layer.rotation,
                layer_index: layer.index,
                seed: state.noise_seed(layer.index),
                time_s,
            };
            let mut output = self.registry.generate(settings.shape, &ctx);
            pipeline.distort(&mut output, layer.center, time_s);

            match output {
                ShapeOutput::Polylines(lines) => {
                    commands.extend(lines.into_iter().map(|line| DrawCommand::Polyline {
                        points: line.points,
                        closed: line.closed,
                        color: layer.color,
                        width: thickness * line.width_scale,
                    }));
                }
                ShapeOutput::Circle { center, radius } => commands.push(DrawCommand::Circle {
                    center,
                    radius,
                    color: layer.color,
                    width: thickness,
                    filled: false,
                }),
            }
        }

        Frame {
            clear,
            commands,
            overlay: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/compositor.rs"]
mod tests;
