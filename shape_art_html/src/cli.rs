// Command-line options and the top-level run for the `generate` binary.
//
// Flags are matched by hand against `std::env::args()`. Every value is
// parsed strictly: a missing or unparsable value, or an unrecognized flag,
// is an error rather than a silent fallback to the default.
//
//   --out-dir DIR     output directory (default ".")
//   --seed N          base seed; artwork i uses N + i
//   --config PATH     shape ranges JSON
//   --policy PATH     artwork table JSON
//   --artwork ID      artwork to produce (repeatable; default: all)
//   --count N         override every selected artwork's shape count
//   --log FILTER      env_logger filter

use crate::driver::{ArtworkReport, produce_all};
use anyhow::{Context, bail};
use shape_art::{ArtworkPolicy, ShapeConfig};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// A command line that could not be turned into `Options`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("invalid value `{value}` for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unrecognized argument `{0}`")]
    UnknownArgument(String),
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub out_dir: PathBuf,
    pub seed: Option<u64>,
    pub count: Option<i64>,
    pub config: Option<PathBuf>,
    pub policy: Option<PathBuf>,
    pub artworks: Vec<String>,
    pub log_filter: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            out_dir: PathBuf::from("."),
            seed: None,
            count: None,
            config: None,
            policy: None,
            artworks: Vec::new(),
            log_filter: None,
        }
    }
}

impl Options {
    /// Parse flags, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = Options::default();
        let mut iter = args.iter();
        while let Some(flag) = iter.next() {
            let mut value = || {
                iter.next()
                    .cloned()
                    .ok_or_else(|| CliError::MissingValue(flag.clone()))
            };
            match flag.as_str() {
                "--out-dir" => options.out_dir = PathBuf::from(value()?),
                "--seed" => options.seed = Some(parse_value(flag, &value()?)?),
                "--count" => options.count = Some(parse_value(flag, &value()?)?),
                "--config" => options.config = Some(PathBuf::from(value()?)),
                "--policy" => options.policy = Some(PathBuf::from(value()?)),
                "--artwork" => options.artworks.push(value()?),
                "--log" => options.log_filter = Some(value()?),
                other => return Err(CliError::UnknownArgument(other.to_string())),
            }
        }
        Ok(options)
    }
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

/// Load configuration, select artworks and write them. Fails if any
/// selection is invalid (nothing is written then) or if any artwork could
/// not be written (the others are still produced).
pub fn run(options: &Options) -> anyhow::Result<Vec<ArtworkReport>> {
    let config = match &options.config {
        Some(path) => ShapeConfig::load(path).context("loading shape config")?,
        None => ShapeConfig::default(),
    };
    let policy = match &options.policy {
        Some(path) => ArtworkPolicy::load(path).context("loading artwork policy")?,
        None => ArtworkPolicy::standard(),
    };

    let ids: Vec<String> = if options.artworks.is_empty() {
        policy.identifiers().map(str::to_string).collect()
    } else {
        options.artworks.clone()
    };
    let specs = ids
        .iter()
        .map(|id| policy.select(id, options.count))
        .collect::<Result<Vec<_>, _>>()
        .context("selecting artworks")?;

    if !options.out_dir.is_dir() {
        bail!("output directory {} does not exist", options.out_dir.display());
    }

    log::info!("Output directory: {}", options.out_dir.display());
    match options.seed {
        Some(s) => log::info!("Seed: {s}"),
        None => log::info!("Seed: (from OS)"),
    }

    let mut reports = Vec::new();
    let mut failed = 0;
    for result in produce_all(&specs, &config, options.seed, &options.out_dir) {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                log::error!("{e}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} artworks could not be written", specs.len());
    }
    Ok(reports)
}
