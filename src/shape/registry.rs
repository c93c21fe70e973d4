//! Shape registry: lookup from archetype to generator strategy.

use std::collections::HashMap;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI};

use tracing::{debug, info};

use super::generators;
use super::{Polyline, ShapeCtx, ShapeKind, ShapeOutput};

/// A strategy that turns per-layer inputs into geometry.
pub trait ShapeGenerator: Send + Sync {
    fn generate(&self, ctx: &ShapeCtx) -> ShapeOutput;
}

impl<F> ShapeGenerator for F
where
    F: Fn(&ShapeCtx) -> ShapeOutput + Send + Sync,
{
    fn generate(&self, ctx: &ShapeCtx) -> ShapeOutput {
        self(ctx)
    }
}

/// Registry holding one generator per archetype.
pub struct ShapeRegistry {
    generators: HashMap<ShapeKind, Box<dyn ShapeGenerator>>,
}

impl ShapeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Create a registry with every built-in archetype registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(ShapeKind::Triangle, triangle);
        registry.register(ShapeKind::Square, square);
        registry.register(ShapeKind::Pentagon, pentagon);
        registry.register(ShapeKind::Astroid, astroid);
        registry.register(ShapeKind::SineFlower, sine_flower);
        registry.register(ShapeKind::Circle, circle);
        registry.register(ShapeKind::Star5, star5);
        registry.register(ShapeKind::StarOfDavid, star_of_david);
        registry.register(ShapeKind::Triskelion, triskelion);
        registry.register(ShapeKind::Brackets, brackets);
        registry.register(ShapeKind::Lissajous, lissajous);
        registry.register(ShapeKind::Hypotrochoid, hypotrochoid);
        registry.register(ShapeKind::NoiseRing, noise_ring);
        registry.register(ShapeKind::Calligraphy, calligraphy);

        info!(
            count = registry.generators.len(),
            "registered built-in shape generators"
        );
        registry
    }

    /// Register a generator. Replaces any previous generator for `kind`.
    pub fn register(&mut self, kind: ShapeKind, generator: impl ShapeGenerator + 'static) {
        self.generators.insert(kind, Box::new(generator));
    }

    pub fn get(&self, kind: ShapeKind) -> Option<&dyn ShapeGenerator> {
        self.generators.get(&kind).map(|g| g.as_ref())
    }

    /// Run the generator for `kind`. Unregistered kinds produce no geometry.
    pub fn generate(&self, kind: ShapeKind, ctx: &ShapeCtx) -> ShapeOutput {
        match self.get(kind) {
            Some(generator) => generator.generate(ctx),
            None => {
                debug!(shape = kind.name(), "no generator registered");
                ShapeOutput::Polylines(Vec::new())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl std::fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<&str> = self.generators.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("ShapeRegistry").field("kinds", &kinds).finish()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn triangle(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::single_closed(generators::regular_polygon(
        ctx.center,
        3,
        ctx.radius,
        ctx.rotation - FRAC_PI_6,
    ))
}

fn square(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::single_closed(generators::regular_polygon(
        ctx.center,
        4,
        ctx.radius,
        ctx.rotation + FRAC_PI_4,
    ))
}

fn pentagon(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::single_closed(generators::regular_polygon(
        ctx.center,
        5,
        ctx.radius,
        ctx.rotation - FRAC_PI_2,
    ))
}

fn astroid(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::single_closed(generators::astroid(ctx.center, ctx.radius, ctx.rotation))
}

fn sine_flower(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::single_closed(generators::sine_flower(
        ctx.center,
        ctx.radius,
        ctx.rotation,
    ))
}

fn circle(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::Circle {
        center: ctx.center,
        radius: ctx.radius,
    }
}

fn star5(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::single_closed(generators::star(ctx.center, 5, ctx.radius, ctx.rotation))
}

fn star_of_david(ctx: &ShapeCtx) -> ShapeOutput {
    let up = ctx.rotation - FRAC_PI_6;
    ShapeOutput::Polylines(vec![
        Polyline::closed(generators::regular_polygon(ctx.center, 3, ctx.radius, up)),
        Polyline::closed(generators::regular_polygon(
            ctx.center,
            3,
            ctx.radius,
            up + PI,
        )),
    ])
}

fn triskelion(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::Polylines(
        generators::triskelion(ctx.center, ctx.radius, ctx.rotation)
            .into_iter()
            .map(Polyline::open)
            .collect(),
    )
}

fn brackets(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::Polylines(
        generators::brackets(ctx.center, ctx.radius, ctx.rotation)
            .into_iter()
            .map(Polyline::open)
            .collect(),
    )
}

fn lissajous(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::single_closed(generators::lissajous(
        ctx.center,
        ctx.radius,
        ctx.rotation,
        ctx.layer_index,
    ))
}

fn hypotrochoid(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::single_closed(generators::hypotrochoid(
        ctx.center,
        ctx.radius,
        ctx.rotation,
    ))
}

fn noise_ring(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::single_closed(generators::noise_ring(
        ctx.center,
        ctx.radius,
        ctx.rotation,
        ctx.seed,
        ctx.time_s,
    ))
}

fn calligraphy(ctx: &ShapeCtx) -> ShapeOutput {
    ShapeOutput::Polylines(
        generators::calligraphy(ctx.center, ctx.radius, ctx.rotation)
            .into_iter()
            .map(|(points, width_scale)| Polyline::open(points).with_width_scale(width_scale))
            .collect(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/shape/registry.rs"]
mod tests;
