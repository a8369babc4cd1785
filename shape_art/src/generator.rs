// Randomized shape generation.
//
// Each draw picks a kind uniformly from the configured kind set, then samples
// only the geometry fields that kind uses, then the three color channels,
// then opacity. Draws are independent of one another.
//
// The random source is always passed in by the caller (`&mut impl Rng`);
// nothing here touches a global RNG. Given the same config and the same
// seeded RNG, `generate` returns the same sequence.

use crate::config::ShapeConfig;
use crate::error::GenerateError;
use crate::shape::{Circle, Ellipse, Rectangle, Rgb, ShapeDescriptor, ShapeKind};
use rand::Rng;

/// Draws shape descriptors from a validated `ShapeConfig`.
#[derive(Debug, Clone, Copy)]
pub struct ShapeGenerator<'a> {
    config: &'a ShapeConfig,
}

impl<'a> ShapeGenerator<'a> {
    pub fn new(config: &'a ShapeConfig) -> Self {
        Self { config }
    }

    /// Draw `count` independent shapes. `count == 0` yields an empty vector.
    pub fn generate(&self, count: usize, rng: &mut impl Rng) -> Vec<ShapeDescriptor> {
        let shapes: Vec<ShapeDescriptor> = (0..count).map(|_| self.draw(rng)).collect();
        log::debug!("generated {} shapes", shapes.len());
        shapes
    }

    /// Draw a single shape.
    pub fn draw(&self, rng: &mut impl Rng) -> ShapeDescriptor {
        let kinds = self.config.kinds();
        let kind = kinds[rng.random_range(0..kinds.len())];
        let r = self.config.ranges();

        match kind {
            ShapeKind::Circle => {
                let cx = r.x.sample(rng);
                let cy = r.y.sample(rng);
                let radius = r.radius.sample(rng);
                ShapeDescriptor::Circle(Circle {
                    cx,
                    cy,
                    radius,
                    color: self.color(rng),
                    opacity: r.opacity.sample(rng),
                })
            }
            ShapeKind::Rectangle => {
                let x = r.x.sample(rng);
                let y = r.y.sample(rng);
                let width = r.width.sample(rng);
                let height = r.height.sample(rng);
                let rx = r.rx.sample(rng);
                let ry = r.ry.sample(rng);
                ShapeDescriptor::Rectangle(Rectangle {
                    x,
                    y,
                    width,
                    height,
                    rx,
                    ry,
                    color: self.color(rng),
                    opacity: r.opacity.sample(rng),
                })
            }
            ShapeKind::Ellipse => {
                let cx = r.x.sample(rng);
                let cy = r.y.sample(rng);
                let rx = r.rx.sample(rng);
                let ry = r.ry.sample(rng);
                ShapeDescriptor::Ellipse(Ellipse {
                    cx,
                    cy,
                    rx,
                    ry,
                    color: self.color(rng),
                    opacity: r.opacity.sample(rng),
                })
            }
        }
    }

    fn color(&self, rng: &mut impl Rng) -> Rgb {
        let range = self.config.ranges().color;
        // Validated config keeps color.max <= 255.
        let r = range.sample(rng) as u8;
        let g = range.sample(rng) as u8;
        let b = range.sample(rng) as u8;
        Rgb { r, g, b }
    }
}

/// Convert a signed shape count (as read from user input) to a usable one.
pub fn shape_count(requested: i64) -> Result<usize, GenerateError> {
    usize::try_from(requested).map_err(|_| GenerateError::NegativeShapeCount(requested))
}
