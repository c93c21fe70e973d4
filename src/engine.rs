//! The frame loop: input, update, compose, present, pace.

use kurbo::Point;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::compositor::Compositor;
use crate::config::ProjectorConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::ProjectorResult;
use crate::foundation::math::Rng64;
use crate::hud::status_lines;
use crate::input::{Action, Cooldown, HeldAction, InputFrame, InputSource};
use crate::modifier::ModifierPipeline;
use crate::render::{Frame, RenderSink};
use crate::state::AnimationState;
use crate::state::preset::load_preset;
use crate::state::waypoint::WaypointDeck;

/// Fraction of the half-height the pointer can open the outer layer to.
const POINTER_RADIUS_SPAN: f64 = 0.95;
const POINTER_RADIUS_FLOOR: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Outer radius selected by a pointer at horizontal position `x`.
pub fn pointer_radius(canvas: Canvas, x: f64) -> f64 {
    let width = f64::from(canvas.width.max(1));
    let nx = if x.is_finite() {
        (x / width).clamp(0.0, 1.0)
    } else {
        0.0
    };
    f64::from(canvas.height) / 2.0
        * POINTER_RADIUS_SPAN
        * (POINTER_RADIUS_FLOOR + (1.0 - POINTER_RADIUS_FLOOR) * nx)
}

/// Per-frame rotation delta for a pointer at vertical position `y`.
pub fn pointer_rotation_delta(canvas: Canvas, y: f64, max_speed: f64) -> f64 {
    if !y.is_finite() {
        return 0.0;
    }
    let ny = y / f64::from(canvas.height.max(1)) - 0.5;
    ny * max_speed
}

#[derive(Debug)]
pub struct Engine {
    config: ProjectorConfig,
    state: AnimationState,
    deck: WaypointDeck,
    compositor: Compositor,
    rng: Rng64,
    cooldown: Cooldown,
    pointer: Option<Point>,
    target_radius: f64,
    frame: u64,
}

impl Engine {
    pub fn new(config: ProjectorConfig) -> ProjectorResult<Self> {
        config.validate()?;

        let mut rng = Rng64::new(config.seed);
        let state = AnimationState::new(
            config.initial_settings(),
            config.limits(),
            config.initial_radius,
            &mut rng,
        );
        let compositor = Compositor::new(
            config.canvas,
            config.spacing_ratio,
            config.min_layer_radius,
            config.strobe_hz,
        );

        Ok(Self {
            cooldown: Cooldown::new(config.input_cooldown_s),
            target_radius: config.initial_radius,
            config,
            state,
            deck: WaypointDeck::new(),
            compositor,
            rng,
            pointer: None,
            frame: 0,
        })
    }

    pub fn config(&self) -> &ProjectorConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AnimationState {
        &mut self.state
    }

    pub fn deck(&self) -> &WaypointDeck {
        &self.deck
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Index of the next frame to be produced.
    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    /// Load a preset by (case-insensitive) name. Unknown names are a no-op.
    pub fn load_preset(&mut self, name: &str) -> bool {
        load_preset(&mut self.state, name)
    }

    /// Apply one discrete action.
    pub fn apply(&mut self, action: Action) -> Control {
        debug!(?action, "action");
        match action {
            Action::Quit => return Control::Quit,
            Action::ResetRotation => self.state.reset_rotation(),
            Action::CycleShape { forward } => self.state.cycle_shape(forward),
            Action::ToggleFeature(id) => self.state.toggle_feature(id),
            Action::ToggleHud => self.state.toggle_hud(),
            Action::AppendWaypoint => self.deck.append(&self.state),
            Action::UpdateWaypoint => {
                self.deck.update_current(&self.state);
            }
            Action::PrevWaypoint => {
                self.deck.prev(&mut self.state);
            }
            Action::NextWaypoint => {
                self.deck.next(&mut self.state);
            }
            Action::DeleteLastWaypoint => {
                self.deck.delete_last(&mut self.state);
            }
            Action::LoadPreset(preset) => preset.load(&mut self.state),
            Action::AdjustLayers(delta) => self.state.adjust_layers(delta),
            Action::AdjustThickness(delta) => self.state.adjust_thickness(delta),
        }
        Control::Continue
    }

    /// Update phase: apply input, then advance every per-frame accumulator.
    pub fn update(&mut self, input: &InputFrame, now_s: f64) -> Control {
        if input.quit {
            return Control::Quit;
        }
        for key in &input.pressed {
            if let Some(action) = key.action()
                && self.apply(action) == Control::Quit
            {
                return Control::Quit;
            }
        }

        let held: Vec<_> = input.held.iter().filter_map(|k| k.held_action()).collect();
        if !held.is_empty() && self.cooldown.try_fire(now_s) {
            for action in held {
                match action {
                    HeldAction::Twist(delta) => self.state.adjust_twist(delta),
                    HeldAction::NudgeKnob(steps) => self.state.nudge_selected(steps),
                }
            }
        }

        if let Some(p) = input.pointer {
            self.pointer = Some(p);
            self.target_radius = pointer_radius(self.config.canvas, p.x);
        }
        if let Some(p) = self.pointer {
            self.state.base_rotation +=
                pointer_rotation_delta(self.config.canvas, p.y, self.config.rotation_max_speed);
        }

        let pipeline = ModifierPipeline::from_features(self.state.features());
        let radius = pipeline.breathe(self.target_radius, now_s);
        let (rotation, radius) = pipeline.jitter(self.state.base_rotation, radius, &mut self.rng);
        self.state.base_rotation = rotation;
        self.state.radius = radius;

        self.state.advance_hue();
        self.state.advance_motion(&mut self.rng);
        Control::Continue
    }

    /// Render phase: the frame for the current state, with the HUD overlay when on.
    pub fn compose(&self, now_s: f64) -> Frame {
        let mut frame = self.compositor.compose(&self.state, now_s);
        if self.state.features().hud {
            frame.overlay = status_lines(&self.state, &self.deck);
        }
        frame
    }

    /// Run one full frame. Returns `Quit` without drawing when input asks to stop.
    pub fn step(
        &mut self,
        input: &InputFrame,
        now_s: f64,
        sink: &mut dyn RenderSink,
    ) -> ProjectorResult<Control> {
        if self.update(input, now_s) == Control::Quit {
            return Ok(Control::Quit);
        }
        sink.submit(&self.compose(now_s))?;
        self.frame += 1;
        Ok(Control::Continue)
    }

    /// Drive the loop until quit or `max_frames` frames. Returns frames presented.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        clock: &mut dyn Clock,
        sink: &mut dyn RenderSink,
        max_frames: Option<u64>,
    ) -> ProjectorResult<u64> {
        info!(
            start_frame = self.frame,
            max_frames = ?max_frames,
            "projector loop started"
        );

        let mut presented = 0u64;
        while max_frames.is_none_or(|max| presented < max) {
            let frame_input = input.poll(self.frame);
            let now_s = clock.now_secs();
            if self.step(&frame_input, now_s, sink)? == Control::Quit {
                break;
            }
            presented += 1;
            clock.pace();
        }

        info!(presented, end_frame = self.frame, "projector loop stopped");
        Ok(presented)
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
