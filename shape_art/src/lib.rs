// Shape Art core: randomized shapes rendered as SVG markup.
//
// Generates decorative vector artwork by drawing randomly parameterized
// circles, rectangles and ellipses and serializing each one as an SVG
// element line. Wrapping those lines in an HTML document and writing files
// is left to `shape_art_html`.
//
// Architecture:
// - shape.rs: Shape descriptors (tagged union per kind), colors, channel masks
// - config.rs: Validated sampling ranges (`ShapeConfig`), loadable from JSON
// - generator.rs: Random shape drawing from a caller-supplied RNG
// - render.rs: Per-kind SVG element rendering with mask/corner projections
// - policy.rs: Artwork table (shape count, mask, canvas, output naming)
// - error.rs: Configuration and precondition errors
//
// Data flow: `ArtworkPolicy::resolve` -> `ShapeGenerator::generate` ->
// `render_at` per shape -> ordered lines handed to the document assembler.
//
// Nothing here holds global mutable state. Output is deterministic given a
// seeded RNG, so artworks can be produced concurrently with one RNG each.

pub mod config;
pub mod error;
pub mod generator;
pub mod policy;
pub mod render;
pub mod shape;

pub use config::{IntRange, OpacityRange, ShapeConfig, ShapeRanges};
pub use error::{ArtError, ConfigError, GenerateError};
pub use generator::{ShapeGenerator, shape_count};
pub use policy::{ArtworkPolicy, ArtworkSpec, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use render::{RenderOptions, render, render_at};
pub use shape::{ChannelMask, Circle, Ellipse, Rectangle, Rgb, ShapeDescriptor, ShapeKind};
