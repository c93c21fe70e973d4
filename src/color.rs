//! Per-layer color resolution from the global hue accumulator.

use crate::foundation::core::Rgb8;
use crate::foundation::math::wrap_unit;

/// Layer coloring scheme.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Every layer uses the global hue.
    #[default]
    Solid,
    /// Odd layers take the complementary hue.
    Dual,
    /// Hue steps 0.05 per layer.
    Rainbow,
    /// Saturation and value fade toward the innermost layer.
    Fog,
}

impl ColorMode {
    pub const ALL: [ColorMode; 4] = [Self::Solid, Self::Dual, Self::Rainbow, Self::Fog];

    pub fn name(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Dual => "Dual",
            Self::Rainbow => "Rainbow",
            Self::Fog => "Fog",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn cycle(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Hue, saturation, value, each in `[0, 1]` (hue wraps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb8(self) -> Rgb8 {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

/// Advance the global hue by `speed` and re-wrap into `[0, 1)`.
pub fn advance_hue(hue: f64, speed: f64) -> f64 {
    wrap_unit(hue + speed)
}

/// Resolve the HSV for layer `index` of `layer_count`.
pub fn layer_hsv(hue: f64, mode: ColorMode, index: usize, layer_count: usize) -> Hsv {
    let hue = wrap_unit(hue);
    match mode {
        ColorMode::Solid => Hsv::new(hue, 1.0, 1.0),
        ColorMode::Dual => {
            let h = if index % 2 == 1 {
                wrap_unit(hue + 0.5)
            } else {
                hue
            };
            Hsv::new(h, 1.0, 1.0)
        }
        ColorMode::Rainbow => Hsv::new(wrap_unit(hue + index as f64 * 0.05), 1.0, 1.0),
        ColorMode::Fog => {
            let depth = if layer_count == 0 {
                1.0
            } else {
                (1.0 - index as f64 / layer_count as f64).clamp(0.0, 1.0)
            };
            Hsv::new(hue, depth, depth)
        }
    }
}

pub fn layer_color(hue: f64, mode: ColorMode, index: usize, layer_count: usize) -> Rgb8 {
    layer_hsv(hue, mode, index, layer_count).to_rgb8()
}

/// Standard six-sector HSV to RGB. `h` is a fraction of a full turn.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb8 {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    let h = wrap_unit(h) * 6.0;
    let sector = (h.floor() as i64).rem_euclid(6);
    let f = h - h.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let to_u8 = |c: f64| (c * 255.0) as u8;
    Rgb8::new(to_u8(r), to_u8(g), to_u8(b))
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
