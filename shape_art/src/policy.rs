// Artwork policy: which artworks exist and how each one is drawn.
//
// An `ArtworkSpec` fixes everything that differs between outputs: shape
// count, suppressed color channel, whether rectangles lose their rounded
// corners, canvas size, and the output name/title the driver uses. The
// `ArtworkPolicy` table is looked up by identifier; an unknown identifier is
// a configuration error, never a fallback to some default artwork.
//
// The standard table has three entries on a 1000x700 canvas:
//
//   artwork-1  1000 shapes  no suppression
//   artwork-2   300 shapes  blue suppressed, square rectangle corners
//   artwork-3   500 shapes  green suppressed
//
// Custom tables can be loaded from JSON with the same validation.

use crate::config::ShapeConfig;
use crate::error::{self, ConfigError};
use crate::generator::{ShapeGenerator, shape_count};
use crate::render::{RenderOptions, render_at};
use crate::shape::ChannelMask;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Canvas width shared by the standard artworks.
pub const CANVAS_WIDTH: u32 = 1000;

/// Canvas height shared by the standard artworks.
pub const CANVAS_HEIGHT: u32 = 700;

/// Everything needed to produce one artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSpec {
    pub identifier: String,
    pub shape_count: usize,
    #[serde(default)]
    pub mask: ChannelMask,
    #[serde(default)]
    pub square_corners: bool,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Output file name, relative to the output directory.
    pub file_name: String,
    /// Document title.
    pub title: String,
}

impl ArtworkSpec {
    /// A standard-canvas artwork numbered `n`, named `artwork-n` and written
    /// to `art_piece{n}.html`.
    fn numbered(n: u32, shape_count: usize, mask: ChannelMask, square_corners: bool) -> Self {
        ArtworkSpec {
            identifier: format!("artwork-{n}"),
            shape_count,
            mask,
            square_corners,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            file_name: format!("art_piece{n}.html"),
            title: format!("Generated-Image-{n}"),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            mask: self.mask,
            square_corners: self.square_corners,
        }
    }

    /// Generate this artwork's shapes and render each one as a markup line
    /// at `depth`, in generation order.
    pub fn render_elements(
        &self,
        config: &ShapeConfig,
        rng: &mut impl Rng,
        depth: usize,
    ) -> Vec<String> {
        let options = self.render_options();
        let shapes = ShapeGenerator::new(config).generate(self.shape_count, rng);
        log::debug!(
            "{}: rendering {} shapes (mask {:?}, square corners {})",
            self.identifier,
            shapes.len(),
            self.mask,
            self.square_corners
        );
        shapes
            .iter()
            .map(|shape| render_at(shape, &options, depth))
            .collect()
    }
}

/// Lookup table from artwork identifier to `ArtworkSpec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ArtworkSpec>", into = "Vec<ArtworkSpec>")]
pub struct ArtworkPolicy {
    artworks: Vec<ArtworkSpec>,
}

impl ArtworkPolicy {
    /// Build a table, rejecting duplicate identifiers.
    pub fn new(artworks: Vec<ArtworkSpec>) -> Result<Self, ConfigError> {
        let mut seen = BTreeSet::new();
        for spec in &artworks {
            if !seen.insert(spec.identifier.as_str()) {
                return Err(ConfigError::DuplicateArtwork(spec.identifier.clone()));
            }
        }
        Ok(ArtworkPolicy { artworks })
    }

    /// The three built-in artworks.
    pub fn standard() -> Self {
        ArtworkPolicy {
            artworks: vec![
                ArtworkSpec::numbered(1, 1000, ChannelMask::None, false),
                ArtworkSpec::numbered(2, 300, ChannelMask::SuppressBlue, true),
                ArtworkSpec::numbered(3, 500, ChannelMask::SuppressGreen, false),
            ],
        }
    }

    /// Load a table from a JSON array of artwork specs.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let policy: ArtworkPolicy =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!(
            "loaded {} artworks from {}",
            policy.artworks.len(),
            path.display()
        );
        Ok(policy)
    }

    pub fn resolve(&self, identifier: &str) -> Result<&ArtworkSpec, ConfigError> {
        self.artworks
            .iter()
            .find(|spec| spec.identifier == identifier)
            .ok_or_else(|| ConfigError::UnknownArtwork(identifier.to_string()))
    }

    /// Resolve `identifier` and optionally replace its shape count with a
    /// caller-supplied (possibly negative, hence rejected) value.
    pub fn select(
        &self,
        identifier: &str,
        count_override: Option<i64>,
    ) -> error::Result<ArtworkSpec> {
        let mut spec = self.resolve(identifier)?.clone();
        if let Some(requested) = count_override {
            spec.shape_count = shape_count(requested)?;
        }
        Ok(spec)
    }

    /// Known identifiers, in table order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.artworks.iter().map(|spec| spec.identifier.as_str())
    }

    pub fn artworks(&self) -> &[ArtworkSpec] {
        &self.artworks
    }
}

impl Default for ArtworkPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<ArtworkSpec>> for ArtworkPolicy {
    type Error = ConfigError;

    fn try_from(artworks: Vec<ArtworkSpec>) -> Result<Self, Self::Error> {
        ArtworkPolicy::new(artworks)
    }
}

impl From<ArtworkPolicy> for Vec<ArtworkSpec> {
    fn from(policy: ArtworkPolicy) -> Self {
        policy.artworks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArtError, GenerateError};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_table() {
        let policy = ArtworkPolicy::standard();
        let ids: Vec<&str> = policy.identifiers().collect();
        assert_eq!(ids, ["artwork-1", "artwork-2", "artwork-3"]);

        let one = policy.resolve("artwork-1").unwrap();
        assert_eq!(one.shape_count, 1000);
        assert_eq!(one.mask, ChannelMask::None);
        assert!(!one.square_corners);

        let two = policy.resolve("artwork-2").unwrap();
        assert_eq!(two.shape_count, 300);
        assert_eq!(two.mask, ChannelMask::SuppressBlue);
        assert!(two.square_corners);

        let three = policy.resolve("artwork-3").unwrap();
        assert_eq!(three.shape_count, 500);
        assert_eq!(three.mask, ChannelMask::SuppressGreen);
    }

    #[test]
    fn canvas_is_constant() {
        for spec in ArtworkPolicy::standard().artworks() {
            assert_eq!((spec.canvas_width, spec.canvas_height), (1000, 700));
        }
    }

    #[test]
    fn output_names() {
        let policy = ArtworkPolicy::standard();
        let spec = policy.resolve("artwork-3").unwrap();
        assert_eq!(spec.file_name, "art_piece3.html");
        assert_eq!(spec.title, "Generated-Image-3");
    }

    #[test]
    fn unknown_identifier_fails() {
        let policy = ArtworkPolicy::standard();
        match policy.resolve("unknown") {
            Err(ConfigError::UnknownArtwork(id)) => assert_eq!(id, "unknown"),
            other => panic!("expected UnknownArtwork, got {other:?}"),
        }
    }

    #[test]
    fn select_overrides_count() {
        let policy = ArtworkPolicy::standard();
        let spec = policy.select("artwork-1", Some(12)).unwrap();
        assert_eq!(spec.shape_count, 12);
        assert_eq!(spec.mask, ChannelMask::None);
        assert_eq!(policy.select("artwork-1", None).unwrap().shape_count, 1000);
        // The table itself is unchanged.
        assert_eq!(policy.resolve("artwork-1").unwrap().shape_count, 1000);
    }

    #[test]
    fn select_rejects_negative_count_and_unknown_id() {
        let policy = ArtworkPolicy::standard();
        assert!(matches!(
            policy.select("artwork-2", Some(-5)),
            Err(ArtError::Generate(GenerateError::NegativeShapeCount(-5)))
        ));
        assert!(matches!(
            policy.select("nope", Some(5)),
            Err(ArtError::Config(ConfigError::UnknownArtwork(_)))
        ));
    }

    #[test]
    fn duplicate_identifier_fails() {
        let spec = ArtworkSpec::numbered(1, 10, ChannelMask::None, false);
        assert!(matches!(
            ArtworkPolicy::new(vec![spec.clone(), spec]),
            Err(ConfigError::DuplicateArtwork(id)) if id == "artwork-1"
        ));
    }

    #[test]
    fn json_table_with_defaults() {
        let json = r#"[
            {
                "identifier": "tiny",
                "shape_count": 3,
                "canvas_width": 200,
                "canvas_height": 100,
                "file_name": "tiny.html",
                "title": "Tiny"
            },
            {
                "identifier": "greenless",
                "shape_count": 4,
                "mask": "suppress_green",
                "canvas_width": 200,
                "canvas_height": 100,
                "file_name": "greenless.html",
                "title": "Greenless"
            }
        ]"#;
        let policy: ArtworkPolicy = serde_json::from_str(json).unwrap();
        let tiny = policy.resolve("tiny").unwrap();
        assert_eq!(tiny.mask, ChannelMask::None);
        assert!(!tiny.square_corners);
        assert_eq!(
            policy.resolve("greenless").unwrap().mask,
            ChannelMask::SuppressGreen
        );
    }

    #[test]
    fn json_table_rejects_duplicates() {
        let spec = ArtworkSpec::numbered(2, 1, ChannelMask::None, false);
        let json = serde_json::to_string(&vec![spec.clone(), spec]).unwrap();
        let err = serde_json::from_str::<ArtworkPolicy>(&json).unwrap_err();
        assert!(err.to_string().contains("artwork-2"), "{err}");
    }

    #[test]
    fn render_elements_applies_mask_to_every_line() {
        let policy = ArtworkPolicy::standard();
        let spec = policy.resolve("artwork-2").unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let lines = spec.render_elements(&ShapeConfig::default(), &mut rng, 1);
        assert_eq!(lines.len(), 300);
        for line in &lines {
            assert!(line.starts_with("   <"), "{line:?}");
            assert!(line.contains(", 0)\" fill-opacity"), "blue not suppressed: {line}");
            if line.contains("<rect ") {
                assert!(line.contains(r#"rx="0" ry="0""#), "corners not squared: {line}");
            }
        }
    }

    #[test]
    fn render_elements_is_reproducible() {
        let policy = ArtworkPolicy::standard();
        let spec = policy.resolve("artwork-3").unwrap();
        let config = ShapeConfig::default();
        let a = spec.render_elements(&config, &mut StdRng::seed_from_u64(8), 1);
        let b = spec.render_elements(&config, &mut StdRng::seed_from_u64(8), 1);
        assert_eq!(a, b);
    }
}
