//! Draw commands and the render-sink seam.

pub mod composite;
pub mod cpu;

use kurbo::Point;

use crate::foundation::core::Rgb8;
use crate::foundation::error::ProjectorResult;

/// How the previous frame is treated before drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Clear {
    /// Wipe to an opaque color.
    Solid(Rgb8),
    /// Keep the previous frame and composite black at `alpha` over it (echo trails).
    Fade { alpha: u8 },
}

/// One primitive the sink must draw.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DrawCommand {
    Polyline {
        points: Vec<Point>,
        closed: bool,
        color: Rgb8,
        width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Rgb8,
        width: f64,
        filled: bool,
    },
}

impl DrawCommand {
    pub fn color(&self) -> Rgb8 {
        match self {
            Self::Polyline { color, .. } | Self::Circle { color, .. } => *color,
        }
    }
}

/// Everything needed to present one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    pub clear: Clear,
    /// Painter's order: outermost layer first.
    pub commands: Vec<DrawCommand>,
    /// Status overlay lines; empty when the HUD is hidden.
    pub overlay: Vec<String>,
}

/// External drawing surface.
pub trait RenderSink {
    fn begin_frame(&mut self, clear: Clear) -> ProjectorResult<()>;

    fn draw(&mut self, command: &DrawCommand) -> ProjectorResult<()>;

    /// Text layout is the sink's concern; sinks without text support ignore it.
    fn draw_overlay(&mut self, _lines: &[String]) -> ProjectorResult<()> {
        Ok(())
    }

    fn present(&mut self) -> ProjectorResult<()>;

    /// Draw a whole frame in order.
    fn submit(&mut self, frame: &Frame) -> ProjectorResult<()> {
        self.begin_frame(frame.clear)?;
        for command in &frame.commands {
            self.draw(command)?;
        }
        if !frame.overlay.is_empty() {
            self.draw_overlay(&frame.overlay)?;
        }
        self.present()
    }
}

/// Sink that keeps presented frames in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pending: Option<Frame>,
    pub frames: Vec<Frame>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn begin_frame(&mut self, clear: Clear) -> ProjectorResult<()> {
        self.pending = Some(Frame {
            clear,
            commands: Vec::new(),
            overlay: Vec::new(),
        });
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> ProjectorResult<()> {
        let frame = self.pending.as_mut().ok_or_else(|| {
            crate::ProjectorError::render("draw called outside begin_frame/present")
        })?;
        frame.commands.push(command.clone());
        Ok(())
    }

    fn draw_overlay(&mut self, lines: &[String]) -> ProjectorResult<()> {
        if let Some(frame) = self.pending.as_mut() {
            frame.overlay = lines.to_vec();
        }
        Ok(())
    }

    fn present(&mut self) -> ProjectorResult<()> {
        let frame = self
            .pending
            .take()
            .ok_or_else(|| crate::ProjectorError::render("present without begin_frame"))?;
        self.frames.push(frame);
        Ok(())
    }
}
