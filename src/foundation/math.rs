use kurbo::{Point, Vec2};

/// Deterministic SplitMix64 generator. Every random draw in the engine
/// (noise seeds, chaos jitter, swarm walk) goes through one of these.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform in `[-half_width, half_width)`.
    pub fn next_centered(&mut self, half_width: f64) -> f64 {
        (self.next_f64_01() - 0.5) * 2.0 * half_width
    }
}

/// Re-wrap a value into `[0, 1)`, however many times it overflowed.
pub fn wrap_unit(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let w = v.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if w >= 1.0 { 0.0 } else { w }
}

/// Unit vector at `angle` radians.
pub fn polar(angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c, s)
}

/// Rotate a local-space vector by `angle` radians.
pub fn rotate_vec(v: Vec2, angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Rotate `p` about `center` by `angle` radians.
pub fn rotate_about(p: Point, center: Point, angle: f64) -> Point {
    center + rotate_vec(p - center, angle)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
