//! Scripted input for offline rendering and tests.
//!
//! A script is a JSON document listing what happens on which frame:
//!
//! ```json
//! {
//!   "pointer": { "x": 700.0, "y": 400.0 },
//!   "quit_at": 240,
//!   "events": [
//!     { "frame": 0, "press": ["digit2"] },
//!     { "frame": 30, "hold": ["right"], "hold_frames": 20 },
//!     { "frame": 60, "pointer": { "x": 200.0, "y": 100.0 } }
//!   ]
//! }
//! ```

use std::path::Path;

use kurbo::Point;

use crate::foundation::error::{ProjectorError, ProjectorResult};
use crate::input::{InputFrame, InputSource, Key};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputScript {
    /// Pointer position before any event moves it.
    #[serde(default)]
    pub pointer: Option<Point>,
    /// Frame on which a quit request is delivered.
    #[serde(default)]
    pub quit_at: Option<u64>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEvent {
    pub frame: u64,
    #[serde(default)]
    pub press: Vec<Key>,
    #[serde(default)]
    pub hold: Vec<Key>,
    /// How many frames, starting at `frame`, the `hold` keys stay down.
    #[serde(default = "default_hold_frames")]
    pub hold_frames: u64,
    #[serde(default)]
    pub pointer: Option<Point>,
}

fn default_hold_frames() -> u64 {
    1
}

impl InputScript {
    pub fn from_json_str(s: &str) -> ProjectorResult<Self> {
        let script: Self = serde_json::from_str(s)
            .map_err(|e| ProjectorError::script(format!("parse input script: {e}")))?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_json_path(path: &Path) -> ProjectorResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ProjectorError::script(format!("read input script '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> ProjectorResult<()> {
        if let Some(p) = self.pointer
            && !(p.x.is_finite() && p.y.is_finite())
        {
            return Err(ProjectorError::script("initial pointer must be finite"));
        }
        for (i, ev) in self.events.iter().enumerate() {
            if !ev.hold.is_empty() && ev.hold_frames == 0 {
                return Err(ProjectorError::script(format!(
                    "events[{i}]: hold_frames must be > 0 when hold keys are listed"
                )));
            }
            if let Some(p) = ev.pointer
                && !(p.x.is_finite() && p.y.is_finite())
            {
                return Err(ProjectorError::script(format!(
                    "events[{i}]: pointer must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Input for `frame`, independent of any previous poll.
    pub fn frame_input(&self, frame: u64) -> InputFrame {
        let mut out = InputFrame {
            pointer: self.pointer,
            quit: self.quit_at.is_some_and(|q| frame >= q),
            ..InputFrame::default()
        };

        let mut pointer_frame = None;
        for ev in &self.events {
            if ev.frame == frame {
                out.pressed.extend_from_slice(&ev.press);
            }
            if ev.frame <= frame && frame - ev.frame < ev.hold_frames {
                for &key in &ev.hold {
                    if !out.held.contains(&key) {
                        out.held.push(key);
                    }
                }
            }
            if let Some(p) = ev.pointer
                && ev.frame <= frame
                && pointer_frame.is_none_or(|f| ev.frame >= f)
            {
                out.pointer = Some(p);
                pointer_frame = Some(ev.frame);
            }
        }
        out
    }
}

impl InputSource for InputScript {
    fn poll(&mut self, frame: u64) -> InputFrame {
        self.frame_input(frame)
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
