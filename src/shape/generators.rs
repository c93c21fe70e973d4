//! Pure point generators. All functions take the layer center explicitly and
//! return points in canvas space.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use kurbo::{Point, Vec2};

use crate::foundation::math::{polar, rotate_vec};

/// Star inner radius as a fraction of the outer radius.
pub const STAR_INNER_RATIO: f64 = 0.4;

const ASTROID_STEPS: usize = 40;
const FLOWER_STEPS: usize = 60;
const FLOWER_FREQ: f64 = 6.0;
const FLOWER_AMP: f64 = 0.15;
const LISSAJOUS_STEPS: usize = 60;
const HYPOTROCHOID_STEPS: usize = 100;
const NOISE_RING_STEPS: usize = 40;
const TRISKELION_ARMS: usize = 3;
const TRISKELION_POINTS_PER_ARM: usize = 15;
const BRACKET_ARM_RATIO: f64 = 0.25;
const CALLIGRAPHY_STROKES: usize = 20;
const CALLIGRAPHY_SWEEP: f64 = PI * 1.5;

/// `n` vertices on the circle of `radius`, first vertex at angle `rotation`.
pub fn regular_polygon(center: Point, sides: usize, radius: f64, rotation: f64) -> Vec<Point> {
    if sides == 0 {
        return Vec::new();
    }
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| center + polar(step * i as f64 + rotation) * radius)
        .collect()
}

/// `2n` vertices alternating between `radius` and `0.4·radius`, offset by −π/2.
pub fn star(center: Point, points: usize, radius: f64, rotation: f64) -> Vec<Point> {
    let count = points * 2;
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f64;
    (0..count)
        .map(|i| {
            let r = if i % 2 == 0 {
                radius
            } else {
                radius * STAR_INNER_RATIO
            };
            center + polar(step * i as f64 + rotation - FRAC_PI_2) * r
        })
        .collect()
}

/// Parametric (cos³t, sin³t), `steps + 1` samples over one turn.
pub fn astroid(center: Point, radius: f64, rotation: f64) -> Vec<Point> {
    sample_turn(ASTROID_STEPS, TAU, |t| {
        let raw = Vec2::new(t.cos().powi(3), t.sin().powi(3));
        center + rotate_vec(raw, rotation) * radius
    })
}

/// Circle with a six-lobed radial ripple that counter-moves with rotation.
pub fn sine_flower(center: Point, radius: f64, rotation: f64) -> Vec<Point> {
    sample_turn(FLOWER_STEPS, TAU, |theta| {
        let r = radius * (1.0 + FLOWER_AMP * (FLOWER_FREQ * (theta + rotation * 2.0)).sin());
        center + polar(theta + rotation) * r
    })
}

/// 3:2 Lissajous figure whose phase drifts with rotation and depth.
pub fn lissajous(center: Point, radius: f64, rotation: f64, layer_index: usize) -> Vec<Point> {
    let delta = rotation + layer_index as f64 * 0.1;
    sample_turn(LISSAJOUS_STEPS, TAU, |t| {
        let raw = Vec2::new((3.0 * t + delta).sin(), (2.0 * t).sin());
        center + rotate_vec(raw, rotation) * radius
    })
}

/// Rolling-circle curve (fixed radius R, rolling 0.3R, pen 0.5R), normalized
/// by `R + d` and rescaled to 1.5·radius.
pub fn hypotrochoid(center: Point, radius: f64, rotation: f64) -> Vec<Point> {
    let big_r = radius;
    let r = radius * 0.3;
    let d = radius * 0.5;
    let ratio = if r.abs() > f64::EPSILON {
        (big_r - r) / r
    } else {
        0.0
    };
    let extent = big_r + d;
    let scale = if extent != 0.0 { 1.0 / extent } else { 1.0 };

    sample_turn(HYPOTROCHOID_STEPS, 2.0 * TAU, |t| {
        let raw = Vec2::new(
            (big_r - r) * t.cos() + d * (ratio * t).cos(),
            (big_r - r) * t.sin() - d * (ratio * t).sin(),
        ) * (scale * radius * 1.5);
        center + rotate_vec(raw, rotation)
    })
}

/// Wobbling ring; radius modulated by a seeded sin·cos field that scrolls with time.
pub fn noise_ring(center: Point, radius: f64, rotation: f64, seed: f64, time_s: f64) -> Vec<Point> {
    let tau = time_s * 2.0;
    sample_turn(NOISE_RING_STEPS, TAU, |angle| {
        let noise = (angle * 5.0 + tau + seed).sin() * (angle * 3.0 - seed).cos();
        let r = radius * (1.0 + 0.2 * noise);
        center + polar(angle + rotation) * r
    })
}

/// Three open spiral arms growing outward from the center.
pub fn triskelion(center: Point, radius: f64, rotation: f64) -> Vec<Vec<Point>> {
    (0..TRISKELION_ARMS)
        .map(|arm| {
            let base = TAU * arm as f64 / TRISKELION_ARMS as f64 + rotation;
            (0..TRISKELION_POINTS_PER_ARM)
                .map(|i| {
                    let progress = i as f64 / TRISKELION_POINTS_PER_ARM as f64;
                    center + polar(base + progress * 2.0) * (radius * progress)
                })
                .collect()
        })
        .collect()
}

/// Four corner brackets, each an open three-point stroke.
pub fn brackets(center: Point, radius: f64, rotation: f64) -> Vec<Vec<Point>> {
    let arm = radius * BRACKET_ARM_RATIO;
    (0..4)
        .map(|k| {
            let angle = FRAC_PI_2 * k as f64 + rotation + FRAC_PI_4;
            let corner = center + polar(angle) * radius;
            vec![
                corner + polar(angle - FRAC_PI_2) * arm,
                corner,
                corner + polar(angle + FRAC_PI_2) * arm,
            ]
        })
        .collect()
}

/// Brush strokes along a 3/4 arc; each returned stroke carries its width scale.
pub fn calligraphy(center: Point, radius: f64, rotation: f64) -> Vec<(Vec<Point>, f64)> {
    let at = |k: usize| {
        let t = k as f64 / CALLIGRAPHY_STROKES as f64;
        center + polar(rotation + t * CALLIGRAPHY_SWEEP) * radius
    };
    (0..CALLIGRAPHY_STROKES)
        .map(|k| {
            let t = k as f64 / CALLIGRAPHY_STROKES as f64;
            (vec![at(k), at(k + 1)], 1.0 + (t * PI).sin())
        })
        .collect()
}

/// `steps + 1` samples of `f(t)` for t evenly spaced over `[0, span]`.
fn sample_turn(steps: usize, span: f64, f: impl Fn(f64) -> Point) -> Vec<Point> {
    (0..=steps)
        .map(|i| f(span * i as f64 / steps as f64))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shape/generators.rs"]
mod tests;
