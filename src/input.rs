//! Keyboard/pointer input model and the key map.

use kurbo::Point;

use crate::state::TWIST_STEP;
use crate::state::features::FeatureId;
use crate::state::preset::Preset;

/// Keys the projector reacts to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Space,
    Minus,
    Equals,
    Z,
    X,
    C,
    V,
    B,
    N,
    M,
    I,
    J,
    H,
    K,
    L,
    G,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Q,
    W,
    A,
    S,
    Left,
    Right,
    Up,
    Down,
}

/// Discrete reaction to a key press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Quit,
    ResetRotation,
    CycleShape { forward: bool },
    ToggleFeature(FeatureId),
    ToggleHud,
    AppendWaypoint,
    UpdateWaypoint,
    PrevWaypoint,
    NextWaypoint,
    DeleteLastWaypoint,
    LoadPreset(Preset),
    AdjustLayers(i64),
    AdjustThickness(i64),
}

/// Continuous reaction while a key is held, throttled by [`Cooldown`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeldAction {
    Twist(f64),
    NudgeKnob(i32),
}

impl Key {
    pub fn action(self) -> Option<Action> {
        let action = match self {
            Self::Escape => Action::Quit,
            Self::Space => Action::ResetRotation,
            Self::Minus => Action::CycleShape { forward: false },
            Self::Equals => Action::CycleShape { forward: true },
            Self::Z => Action::ToggleFeature(FeatureId::Parallax),
            Self::X => Action::ToggleFeature(FeatureId::Breathing),
            Self::C => Action::ToggleFeature(FeatureId::Color),
            Self::V => Action::ToggleFeature(FeatureId::Motion),
            Self::B => Action::ToggleFeature(FeatureId::Trails),
            Self::N => Action::ToggleFeature(FeatureId::Physics),
            Self::M => Action::ToggleFeature(FeatureId::Chaos),
            Self::I => Action::ToggleHud,
            Self::J => Action::AppendWaypoint,
            Self::H => Action::UpdateWaypoint,
            Self::K => Action::PrevWaypoint,
            Self::L => Action::NextWaypoint,
            Self::G => Action::DeleteLastWaypoint,
            Self::Digit1 => Action::LoadPreset(Preset::Cathedral),
            Self::Digit2 => Action::LoadPreset(Preset::Galactic),
            Self::Digit3 => Action::LoadPreset(Preset::Jelly),
            Self::Digit4 => Action::LoadPreset(Preset::Crystal),
            Self::Digit5 => Action::LoadPreset(Preset::Default),
            Self::Q => Action::AdjustLayers(-1),
            Self::W => Action::AdjustLayers(1),
            Self::A => Action::AdjustThickness(-1),
            Self::S => Action::AdjustThickness(1),
            Self::Left | Self::Right | Self::Up | Self::Down => return None,
        };
        Some(action)
    }

    pub fn held_action(self) -> Option<HeldAction> {
        match self {
            Self::Left => Some(HeldAction::Twist(-TWIST_STEP)),
            Self::Right => Some(HeldAction::Twist(TWIST_STEP)),
            Self::Up => Some(HeldAction::NudgeKnob(1)),
            Self::Down => Some(HeldAction::NudgeKnob(-1)),
            _ => None,
        }
    }
}

/// Input observed for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputFrame {
    /// Keys pressed since the previous frame, in arrival order.
    pub pressed: Vec<Key>,
    /// Keys currently held down.
    pub held: Vec<Key>,
    /// Pointer position in canvas pixels; `None` keeps the previous mapping.
    pub pointer: Option<Point>,
    /// Window-close request from the display collaborator.
    pub quit: bool,
}

/// Source of per-frame input.
pub trait InputSource {
    fn poll(&mut self, frame: u64) -> InputFrame;
}

/// Input source that never presses anything and parks the pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticInput {
    pub pointer: Option<Point>,
}

impl InputSource for StaticInput {
    fn poll(&mut self, _frame: u64) -> InputFrame {
        InputFrame {
            pointer: self.pointer,
            ..InputFrame::default()
        }
    }
}

/// Minimum interval between held-key adjustments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cooldown {
    interval_s: f64,
    last_s: Option<f64>,
}

impl Cooldown {
    pub fn new(interval_s: f64) -> Self {
        Self {
            interval_s: interval_s.max(0.0),
            last_s: None,
        }
    }

    /// Whether an adjustment may fire at `now_s`; firing restarts the interval.
    pub fn try_fire(&mut self, now_s: f64) -> bool {
        let ready = match self.last_s {
            None => true,
            Some(last) => now_s - last >= self.interval_s,
        };
        if ready {
            self.last_s = Some(now_s);
        }
        ready
    }
}

#[cfg(test)]
#[path = "../tests/unit/input.rs"]
mod tests;
