// Shape descriptors: the in-memory form of one drawn primitive.
//
// A descriptor is created once per draw by `generator.rs`, is never mutated,
// and is consumed by `render.rs`. Each variant carries only the fields its
// kind needs; there is no shared "bag of every parameter" record.
//
// Color suppression lives here as `ChannelMask`, but it is applied only when
// projecting a color for output (`ChannelMask::apply` returns a new `Rgb`),
// so the stored descriptor always keeps its sampled channels.

use serde::{Deserialize, Serialize};

/// The closed set of drawable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    /// All kinds, in a fixed order.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Ellipse];

    /// The SVG tag name used for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rect",
            ShapeKind::Ellipse => "ellipse",
        }
    }
}

/// An 8-bit-per-channel fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Which color channel, if any, is forced to zero at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelMask {
    #[default]
    None,
    SuppressGreen,
    SuppressBlue,
}

impl ChannelMask {
    /// Project `color` through the mask. The input is left untouched.
    pub fn apply(self, color: Rgb) -> Rgb {
        match self {
            ChannelMask::None => color,
            ChannelMask::SuppressGreen => Rgb { g: 0, ..color },
            ChannelMask::SuppressBlue => Rgb { b: 0, ..color },
        }
    }
}

/// A circle centered at (`cx`, `cy`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub cx: u32,
    pub cy: u32,
    pub radius: u32,
    pub color: Rgb,
    pub opacity: f64,
}

/// An axis-aligned rectangle with its top-left corner at (`x`, `y`) and
/// rounded corners of radii (`rx`, `ry`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub rx: u32,
    pub ry: u32,
    pub color: Rgb,
    pub opacity: f64,
}

/// An axis-aligned ellipse centered at (`cx`, `cy`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub cx: u32,
    pub cy: u32,
    pub rx: u32,
    pub ry: u32,
    pub color: Rgb,
    pub opacity: f64,
}

/// One generated shape. Immutable once drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    Circle(Circle),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDescriptor::Circle(_) => ShapeKind::Circle,
            ShapeDescriptor::Rectangle(_) => ShapeKind::Rectangle,
            ShapeDescriptor::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    /// The sampled (unmasked) fill color.
    pub fn color(&self) -> Rgb {
        match self {
            ShapeDescriptor::Circle(c) => c.color,
            ShapeDescriptor::Rectangle(r) => r.color,
            ShapeDescriptor::Ellipse(e) => e.color,
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            ShapeDescriptor::Circle(c) => c.opacity,
            ShapeDescriptor::Rectangle(r) => r.opacity,
            ShapeDescriptor::Ellipse(e) => e.opacity,
        }
    }

    /// The anchor point: the center for circles and ellipses, the top-left
    /// corner for rectangles.
    pub fn position(&self) -> (u32, u32) {
        match self {
            ShapeDescriptor::Circle(c) => (c.cx, c.cy),
            ShapeDescriptor::Rectangle(r) => (r.x, r.y),
            ShapeDescriptor::Ellipse(e) => (e.cx, e.cy),
        }
    }
}
