// Sampling ranges for shape generation.
//
// `ShapeConfig` is the validated, read-only table the generator samples
// from: canvas coordinate bounds, per-kind geometry bounds, color bounds,
// opacity bounds, and the set of enabled shape kinds. It can only be built
// through `ShapeConfig::new` (from a plain `ShapeRanges` record) or
// `ShapeConfig::default()`, and deserialization goes through the same
// validation, so an inverted range never exists in memory.
//
// Integer ranges are inclusive on both ends. The opacity range is half-open,
// [min, max), matching a unit-interval float draw.

use crate::error::ConfigError;
use crate::shape::ShapeKind;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Draw a uniform value from the range. Requires `min <= max`, which a
    /// validated `ShapeConfig` guarantees.
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        rng.random_range(self.min..=self.max)
    }

    fn check(&self, name: &str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                name: name.to_string(),
                min: self.min as f64,
                max: self.max as f64,
            });
        }
        Ok(())
    }
}

/// A half-open opacity range `[min, max)` within the unit interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpacityRange {
    pub min: f64,
    pub max: f64,
}

impl OpacityRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        if self.min == self.max {
            return value == self.min;
        }
        (self.min..self.max).contains(&value)
    }

    /// Draw a uniform value. A degenerate range always yields `min`.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        if self.min == self.max {
            return self.min;
        }
        rng.random_range(self.min..self.max)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.min > self.max || self.min.is_nan() || self.max.is_nan() {
            return Err(ConfigError::InvertedRange {
                name: "opacity".to_string(),
                min: self.min,
                max: self.max,
            });
        }
        if self.min < 0.0 || self.max > 1.0 {
            return Err(ConfigError::OpacityOutOfUnit {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Unvalidated range table, as written in a JSON config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRanges {
    pub kinds: Vec<ShapeKind>,
    pub x: IntRange,
    pub y: IntRange,
    pub radius: IntRange,
    pub width: IntRange,
    pub height: IntRange,
    pub rx: IntRange,
    pub ry: IntRange,
    pub color: IntRange,
    pub opacity: OpacityRange,
}

impl Default for ShapeRanges {
    fn default() -> Self {
        ShapeRanges {
            kinds: ShapeKind::ALL.to_vec(),
            x: IntRange::new(0, 1000),
            y: IntRange::new(0, 700),
            radius: IntRange::new(0, 100),
            width: IntRange::new(10, 100),
            height: IntRange::new(10, 100),
            rx: IntRange::new(10, 30),
            ry: IntRange::new(10, 30),
            color: IntRange::new(0, 255),
            opacity: OpacityRange::new(0.0, 1.0),
        }
    }
}

/// Validated sampling table for the shape generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShapeRanges", into = "ShapeRanges")]
pub struct ShapeConfig {
    ranges: ShapeRanges,
}

impl ShapeConfig {
    /// Validate `ranges` and wrap them. Fails on the first inverted range,
    /// a color bound above 255, an opacity bound outside [0, 1], or an
    /// empty or repeating kind set.
    pub fn new(ranges: ShapeRanges) -> Result<Self, ConfigError> {
        if ranges.kinds.is_empty() {
            return Err(ConfigError::NoShapeKinds);
        }
        // Kinds are drawn by list index, so a repeat would skew the choice.
        for (i, kind) in ranges.kinds.iter().enumerate() {
            if ranges.kinds[..i].contains(kind) {
                return Err(ConfigError::DuplicateShapeKind(*kind));
            }
        }
        let named = [
            ("x", &ranges.x),
            ("y", &ranges.y),
            ("radius", &ranges.radius),
            ("width", &ranges.width),
            ("height", &ranges.height),
            ("rx", &ranges.rx),
            ("ry", &ranges.ry),
            ("color", &ranges.color),
        ];
        for (name, range) in named {
            range.check(name)?;
        }
        if ranges.color.max > u8::MAX as u32 {
            return Err(ConfigError::ColorOutOfGamut {
                max: ranges.color.max,
            });
        }
        ranges.opacity.check()?;
        Ok(ShapeConfig { ranges })
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ShapeConfig =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("loaded shape config from {}", path.display());
        Ok(config)
    }

    pub fn ranges(&self) -> &ShapeRanges {
        &self.ranges
    }

    pub fn kinds(&self) -> &[ShapeKind] {
        &self.ranges.kinds
    }
}

impl TryFrom<ShapeRanges> for ShapeConfig {
    type Error = ConfigError;

    fn try_from(ranges: ShapeRanges) -> Result<Self, Self::Error> {
        ShapeConfig::new(ranges)
    }
}

impl From<ShapeConfig> for ShapeRanges {
    fn from(config: ShapeConfig) -> Self {
        config.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_ranges_are_valid() {
        let defaults = ShapeRanges::default();
        let config = ShapeConfig::new(defaults.clone()).unwrap();
        assert_eq!(config, ShapeConfig::default());
        assert_eq!(config.ranges().x, IntRange::new(0, 1000));
        assert_eq!(config.ranges().y, IntRange::new(0, 700));
        assert_eq!(config.kinds(), &ShapeKind::ALL);
    }

    #[test]
    fn inverted_range_is_rejected_by_name() {
        let ranges = ShapeRanges {
            width: IntRange::new(50, 10),
            ..ShapeRanges::default()
        };
        match ShapeConfig::new(ranges) {
            Err(ConfigError::InvertedRange { name, .. }) => assert_eq!(name, "width"),
            other => panic!("expected InvertedRange, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_range_is_allowed() {
        let ranges = ShapeRanges {
            radius: IntRange::new(5, 5),
            ..ShapeRanges::default()
        };
        let config = ShapeConfig::new(ranges).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(config.ranges().radius.sample(&mut rng), 5);
        }
    }

    #[test]
    fn color_above_255_is_rejected() {
        let ranges = ShapeRanges {
            color: IntRange::new(0, 256),
            ..ShapeRanges::default()
        };
        assert!(matches!(
            ShapeConfig::new(ranges),
            Err(ConfigError::ColorOutOfGamut { max: 256 })
        ));
    }

    #[test]
    fn opacity_outside_unit_is_rejected() {
        let ranges = ShapeRanges {
            opacity: OpacityRange::new(0.0, 1.5),
            ..ShapeRanges::default()
        };
        assert!(matches!(
            ShapeConfig::new(ranges),
            Err(ConfigError::OpacityOutOfUnit { .. })
        ));

        let ranges = ShapeRanges {
            opacity: OpacityRange::new(0.8, 0.2),
            ..ShapeRanges::default()
        };
        assert!(matches!(
            ShapeConfig::new(ranges),
            Err(ConfigError::InvertedRange { .. })
        ));
    }

    #[test]
    fn empty_kinds_is_rejected() {
        let ranges = ShapeRanges {
            kinds: vec![],
            ..ShapeRanges::default()
        };
        assert!(matches!(ShapeConfig::new(ranges), Err(ConfigError::NoShapeKinds)));
    }

    #[test]
    fn repeated_kind_is_rejected() {
        let ranges = ShapeRanges {
            kinds: vec![
                ShapeKind::Circle,
                ShapeKind::Circle,
                ShapeKind::Circle,
                ShapeKind::Rectangle,
            ],
            ..ShapeRanges::default()
        };
        assert!(matches!(
            ShapeConfig::new(ranges),
            Err(ConfigError::DuplicateShapeKind(ShapeKind::Circle))
        ));

        let json = r#"["ellipse", "rectangle", "ellipse"]"#;
        let kinds: Vec<ShapeKind> = serde_json::from_str(json).unwrap();
        let ranges = ShapeRanges {
            kinds,
            ..ShapeRanges::default()
        };
        let body = serde_json::to_string(&ranges).unwrap();
        let err = serde_json::from_str::<ShapeConfig>(&body).unwrap_err();
        assert!(err.to_string().contains("Ellipse"), "unexpected error: {err}");
    }

    #[test]
    fn int_range_sample_reaches_both_ends() {
        let range = IntRange::new(0, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!(range.contains(v), "sample out of range: {v}");
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "not every value was drawn: {seen:?}");
    }

    #[test]
    fn deserialize_validates() {
        let json = serde_json::to_string(&ShapeRanges::default()).unwrap();
        let config: ShapeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, ShapeConfig::default());

        let bad = json.replace(
            "\"rx\":{\"min\":10,\"max\":30}",
            "\"rx\":{\"min\":30,\"max\":10}",
        );
        assert_ne!(bad, json, "replacement did not apply");
        let err = serde_json::from_str::<ShapeConfig>(&bad).unwrap_err();
        assert!(err.to_string().contains("rx"), "unexpected error: {err}");
    }

    #[test]
    fn load_reports_path_on_parse_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shapes.json");
        std::fs::write(&path, "{ not json").unwrap();
        match ShapeConfig::load(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_custom_ranges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shapes.json");
        let ranges = ShapeRanges {
            kinds: vec![ShapeKind::Circle],
            radius: IntRange::new(1, 2),
            ..ShapeRanges::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&ranges).unwrap()).unwrap();
        let config = ShapeConfig::load(&path).unwrap();
        assert_eq!(config.kinds(), &[ShapeKind::Circle]);
        assert_eq!(config.ranges().radius, IntRange::new(1, 2));
    }
}
