// SVG element rendering for shape descriptors.
//
// Each primitive implements `SvgElement`, writing its own tag and geometry
// attributes in a fixed order; the shared fill and fill-opacity attributes
// and the closing tag are appended by `render_at`. Output must stay
// byte-for-byte stable, since generated documents are compared against
// golden files:
//
//   <circle cx=".." cy=".." r=".." fill="rgb(R, G, B)" fill-opacity="O.D"></circle>
//   <rect width=".." height=".." x=".." y=".." rx=".." ry=".." fill=.. fill-opacity=..></rect>
//   <ellipse rx=".." ry=".." cx=".." cy=".." fill=.. fill-opacity=..></ellipse>
//
// Opacity is printed with exactly one decimal digit. Channel suppression and
// square corners are projections applied while writing; the descriptor is
// borrowed immutably and never changed.

use crate::shape::{ChannelMask, Circle, Ellipse, Rectangle, Rgb, ShapeDescriptor};
use std::fmt::Write;

/// One indentation unit (three spaces).
pub const INDENT: &str = "   ";

/// Per-artwork projections applied while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Color channel forced to zero in the output.
    pub mask: ChannelMask,
    /// Print rectangle corner radii as 0 regardless of the sampled values.
    pub square_corners: bool,
}

impl RenderOptions {
    pub fn masked(mask: ChannelMask) -> Self {
        Self {
            mask,
            square_corners: false,
        }
    }
}

/// A primitive that knows its SVG tag and geometry attributes.
pub trait SvgElement {
    const TAG: &'static str;

    /// Append the geometry attributes, each followed by a single space.
    fn write_geometry(&self, out: &mut String, options: &RenderOptions);

    fn color(&self) -> Rgb;

    fn opacity(&self) -> f64;
}

impl SvgElement for Circle {
    const TAG: &'static str = "circle";

    fn write_geometry(&self, out: &mut String, _options: &RenderOptions) {
        let _ = write!(out, "cx=\"{}\" cy=\"{}\" r=\"{}\" ", self.cx, self.cy, self.radius);
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }
}

impl SvgElement for Rectangle {
    const TAG: &'static str = "rect";

    fn write_geometry(&self, out: &mut String, options: &RenderOptions) {
        let (rx, ry) = if options.square_corners {
            (0, 0)
        } else {
            (self.rx, self.ry)
        };
        let _ = write!(
            out,
            "width=\"{}\" height=\"{}\" x=\"{}\" y=\"{}\" rx=\"{}\" ry=\"{}\" ",
            self.width, self.height, self.x, self.y, rx, ry
        );
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }
}

impl SvgElement for Ellipse {
    const TAG: &'static str = "ellipse";

    fn write_geometry(&self, out: &mut String, _options: &RenderOptions) {
        let _ = write!(
            out,
            "rx=\"{}\" ry=\"{}\" cx=\"{}\" cy=\"{}\" ",
            self.rx, self.ry, self.cx, self.cy
        );
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }
}

/// Format an opacity with exactly one digit after the decimal point.
pub fn format_opacity(opacity: f64) -> String {
    format!("{opacity:.1}")
}

/// Render `shape` with `mask` at nesting depth 0.
pub fn render(shape: &ShapeDescriptor, mask: ChannelMask) -> String {
    render_at(shape, &RenderOptions::masked(mask), 0)
}

/// Render `shape` as one line (no trailing newline), prefixed with `depth`
/// indentation units.
pub fn render_at(shape: &ShapeDescriptor, options: &RenderOptions, depth: usize) -> String {
    match shape {
        ShapeDescriptor::Circle(c) => render_element(c, options, depth),
        ShapeDescriptor::Rectangle(r) => render_element(r, options, depth),
        ShapeDescriptor::Ellipse(e) => render_element(e, options, depth),
    }
}

fn render_element<E: SvgElement>(element: &E, options: &RenderOptions, depth: usize) -> String {
    let mut out = INDENT.repeat(depth);
    let _ = write!(out, "<{} ", E::TAG);
    element.write_geometry(&mut out, options);
    let fill = options.mask.apply(element.color());
    let _ = write!(
        out,
        "fill=\"rgb({}, {}, {})\" fill-opacity=\"{}\"></{}>",
        fill.r,
        fill.g,
        fill.b,
        format_opacity(element.opacity()),
        E::TAG
    );
    out
}
