//! Shape archetypes and their point generators.
//!
//! Every archetype maps a [`ShapeCtx`] to a [`ShapeOutput`]: one or more
//! ordered point sequences, or a primitive descriptor for shapes the render
//! sink can draw natively (the circle).

pub mod generators;
pub mod registry;

use kurbo::Point;

/// Fixed catalog of shape archetypes, in shape-cycling order.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Triangle,
    Square,
    Pentagon,
    Astroid,
    SineFlower,
    Circle,
    Star5,
    StarOfDavid,
    Triskelion,
    Brackets,
    Lissajous,
    Hypotrochoid,
    NoiseRing,
    Calligraphy,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 14] = [
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Pentagon,
        ShapeKind::Astroid,
        ShapeKind::SineFlower,
        ShapeKind::Circle,
        ShapeKind::Star5,
        ShapeKind::StarOfDavid,
        ShapeKind::Triskelion,
        ShapeKind::Brackets,
        ShapeKind::Lissajous,
        ShapeKind::Hypotrochoid,
        ShapeKind::NoiseRing,
        ShapeKind::Calligraphy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Triangle => "Triangle",
            Self::Square => "Square",
            Self::Pentagon => "Pentagon",
            Self::Astroid => "Astroid",
            Self::SineFlower => "SineFlower",
            Self::Circle => "Circle",
            Self::Star5 => "Star5",
            Self::StarOfDavid => "StarDavid",
            Self::Triskelion => "Triskelion",
            Self::Brackets => "Brackets",
            Self::Lissajous => "Lissajous",
            Self::Hypotrochoid => "Hypotrochoid",
            Self::NoiseRing => "NoiseRing",
            Self::Calligraphy => "Calligraphy",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|k| *k == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.index() + n - 1) % n]
    }
}

/// Per-layer inputs to a generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeCtx {
    /// Resolved layer center.
    pub center: Point,
    pub radius: f64,
    pub rotation: f64,
    pub layer_index: usize,
    /// Persistent per-layer noise seed (only the noise ring reads it).
    pub seed: f64,
    /// Wall-clock seconds (only time-varying archetypes read it).
    pub time_s: f64,
}

impl ShapeCtx {
    pub fn new(center: Point, radius: f64, rotation: f64) -> Self {
        Self {
            center,
            radius,
            rotation,
            layer_index: 0,
            seed: 0.0,
            time_s: 0.0,
        }
    }
}

/// One ordered point sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Polyline {
    pub points: Vec<Point>,
    /// Closed sequences have an implicit edge from the last point to the first.
    pub closed: bool,
    /// Multiplier on the layer stroke width (brush pressure).
    pub width_scale: f64,
}

impl Polyline {
    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
            width_scale: 1.0,
        }
    }

    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
            width_scale: 1.0,
        }
    }

    pub fn with_width_scale(mut self, width_scale: f64) -> Self {
        self.width_scale = width_scale;
        self
    }
}

/// Generator result for one layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ShapeOutput {
    /// Independent point sequences (one closed loop, or several open strokes).
    Polylines(Vec<Polyline>),
    /// Primitive circle outline, drawn natively by the sink.
    Circle { center: Point, radius: f64 },
}

impl ShapeOutput {
    pub fn single_closed(points: Vec<Point>) -> Self {
        Self::Polylines(vec![Polyline::closed(points)])
    }

    pub fn polylines(&self) -> &[Polyline] {
        match self {
            Self::Polylines(lines) => lines,
            Self::Circle { .. } => &[],
        }
    }

    /// Apply a point-wise transform to every sequence. Primitives are left as is.
    pub fn map_points(&mut self, mut f: impl FnMut(Point) -> Point) {
        if let Self::Polylines(lines) = self {
            for line in lines {
                for p in &mut line.points {
                    *p = f(*p);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/mod.rs"]
mod tests;
