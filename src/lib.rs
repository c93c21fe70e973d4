//! Generative nested-shape animation engine for ambient and fog-projection visuals.
//!
//! Each frame, input mutates an [`AnimationState`]; the [`Compositor`] then
//! walks the layer depths, runs the registered shape generator for each one,
//! applies the modifier pipeline and color mapping, and hands a [`Frame`] of
//! draw commands to a [`RenderSink`].

#![forbid(unsafe_code)]

pub mod clock;
pub mod color;
pub mod compositor;
pub mod config;
pub mod engine;
pub mod foundation;
pub mod hud;
pub mod input;
pub mod modifier;
pub mod render;
pub mod script;
pub mod shape;
pub mod state;

pub use clock::{Clock, FixedStepClock, SystemClock};
pub use color::ColorMode;
pub use compositor::{Compositor, Layer};
pub use config::ProjectorConfig;
pub use engine::{Control, Engine};
pub use foundation::core::{Canvas, Fps, Point, Rgb8, Vec2};
pub use foundation::error::{ProjectorError, ProjectorResult};
pub use input::{InputFrame, InputSource, Key, StaticInput};
pub use modifier::{ModifierPipeline, PhysicsMode};
pub use render::cpu::{CpuSink, FrameRGBA};
pub use render::{Clear, DrawCommand, Frame, RecordingSink, RenderSink};
pub use script::InputScript;
pub use shape::registry::{ShapeGenerator, ShapeRegistry};
pub use shape::{ShapeCtx, ShapeKind, ShapeOutput};
pub use state::features::{FeatureId, MotionMode};
pub use state::preset::{Preset, load_preset};
pub use state::waypoint::{Waypoint, WaypointDeck};
pub use state::{AnimationState, Limits, Settings};
