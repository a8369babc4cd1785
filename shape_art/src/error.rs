// Error taxonomy for the shape_art core.
//
// Two families of failure exist in the core: configuration problems (bad
// ranges, unknown artwork identifiers, unreadable config files), which are
// detected at construction or lookup time, and precondition failures on a
// generation call (a negative shape count). Neither is recoverable inside
// the core; both are surfaced to the caller unchanged.
//
// Storage errors are not represented here. The core never touches the
// filesystem except to read optional JSON configuration, and write failures
// belong to the document assembler (`shape_art_html::DocumentError`).

use crate::shape::ShapeKind;
use std::path::PathBuf;
use thiserror::Error;

/// A configuration table could not be built or consulted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A named range has its lower bound above its upper bound.
    #[error("range `{name}` is malformed: lower bound {min} exceeds upper bound {max}")]
    InvertedRange { name: String, min: f64, max: f64 },

    /// A color channel range reaches past 255.
    #[error("color range upper bound {max} does not fit in a color channel (0..=255)")]
    ColorOutOfGamut { max: u32 },

    /// An opacity range leaves the unit interval.
    #[error("opacity range [{min}, {max}] must lie within [0.0, 1.0]")]
    OpacityOutOfUnit { min: f64, max: f64 },

    /// No shape kinds were enabled, so nothing could ever be drawn.
    #[error("shape configuration enables no shape kinds")]
    NoShapeKinds,

    /// A shape kind appears more than once in the kind set.
    #[error("shape kind {0:?} is listed more than once")]
    DuplicateShapeKind(ShapeKind),

    /// An artwork identifier is not present in the policy table.
    #[error("unknown artwork `{0}`")]
    UnknownArtwork(String),

    /// Two policy entries share an identifier.
    #[error("artwork `{0}` is defined more than once")]
    DuplicateArtwork(String),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file was read but is not valid JSON for its table.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A generation call was made with an unusable argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("shape count must be non-negative, got {0}")]
    NegativeShapeCount(i64),
}

/// Any failure raised by the core.
#[derive(Debug, Error)]
pub enum ArtError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

pub type Result<T> = std::result::Result<T, ArtError>;
