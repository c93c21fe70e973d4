use std::path::{Path, PathBuf};

use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{Canvas, Rgb8, Rgba8Premul};
use crate::foundation::error::{ProjectorError, ProjectorResult};
use crate::render::composite::{fade_in_place, fill_in_place, over_in_place};
use crate::render::{Clear, DrawCommand, RenderSink};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// One finished frame of opaque RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    pub fn write_png(&self, path: &Path) -> ProjectorResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ProjectorError::render(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| ProjectorError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// Software sink: rasterizes each frame with `vello_cpu` and composites it
/// over an accumulation buffer, which is what makes trails possible.
pub struct CpuSink {
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
    accum: Vec<u8>,
    out_dir: Option<PathBuf>,
    frames_presented: u64,
}

impl std::fmt::Debug for CpuSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSink")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("out_dir", &self.out_dir)
            .field("frames_presented", &self.frames_presented)
            .finish_non_exhaustive()
    }
}

impl CpuSink {
    pub fn new(canvas: Canvas) -> ProjectorResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| ProjectorError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| ProjectorError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(ProjectorError::render("canvas must be non-empty"));
        }

        let mut accum = vec![0u8; canvas.pixel_count() * 4];
        fill_in_place(&mut accum, opaque(Rgb8::BLACK));
        Ok(Self {
            width,
            height,
            ctx: None,
            accum,
            out_dir: None,
            frames_presented: 0,
        })
    }

    /// Write every presented frame as `frame_NNNNN.png` under `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Copy of the accumulated image as of the last `present`.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.accum.clone(),
        }
    }

    fn ctx_mut(&mut self) -> ProjectorResult<&mut vello_cpu::RenderContext> {
        self.ctx
            .as_mut()
            .ok_or_else(|| ProjectorError::render("draw called outside begin_frame/present"))
    }
}

impl RenderSink for CpuSink {
    fn begin_frame(&mut self, clear: Clear) -> ProjectorResult<()> {
        match clear {
            Clear::Solid(color) => fill_in_place(&mut self.accum, opaque(color)),
            Clear::Fade { alpha } => fade_in_place(&mut self.accum, alpha),
        }
        self.ctx = Some(vello_cpu::RenderContext::new(self.width, self.height));
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> ProjectorResult<()> {
        let ctx = self.ctx_mut()?;
        let color = command.color();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, 255,
        ));

        match command {
            DrawCommand::Polyline {
                points,
                closed,
                width,
                ..
            } => {
                if points.len() < 2 {
                    return Ok(());
                }
                let path = polyline_to_cpu(points, *closed);
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width.max(0.0)));
                ctx.stroke_path(&path);
            }
            DrawCommand::Circle {
                center,
                radius,
                width,
                filled,
                ..
            } => {
                let path = vello_cpu::kurbo::Circle::new(point_to_cpu(*center), radius.max(0.0))
                    .to_path(CIRCLE_TOLERANCE);
                if *filled {
                    ctx.fill_path(&path);
                } else {
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width.max(0.0)));
                    ctx.stroke_path(&path);
                }
            }
        }
        Ok(())
    }

    fn draw_overlay(&mut self, lines: &[String]) -> ProjectorResult<()> {
        for line in lines {
            tracing::debug!(target: "fog_projector::hud", "{line}");
        }
        Ok(())
    }

    fn present(&mut self) -> ProjectorResult<()> {
        let mut ctx = self
            .ctx
            .take()
            .ok_or_else(|| ProjectorError::render("present without begin_frame"))?;
        ctx.flush();

        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut layer);
        over_in_place(&mut self.accum, layer.data_as_u8_slice())?;

        if let Some(dir) = &self.out_dir {
            let path = dir.join(format!("frame_{:05}.png", self.frames_presented));
            self.snapshot().write_png(&path)?;
        }
        self.frames_presented += 1;
        Ok(())
    }
}

fn opaque(color: Rgb8) -> [u8; 4] {
    Rgba8Premul::from_straight_rgba(color.r, color.g, color.b, 255).to_array()
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn polyline_to_cpu(points: &[kurbo::Point], closed: bool) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        out.move_to(point_to_cpu(first));
        for &p in iter {
            out.line_to(point_to_cpu(p));
        }
        if closed {
            out.close_path();
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
