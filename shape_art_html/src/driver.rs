// Producing artwork files end to end.
//
// For each selected `ArtworkSpec`: seed an RNG, generate and render the
// shapes, and write the document to `<out_dir>/<file_name>`. Artworks are
// independent, so `produce_all` runs them on the rayon pool with one RNG per
// artwork. With a base seed, artwork `i` (in selection order) is seeded with
// `base.wrapping_add(i)`, which keeps every file reproducible no matter how
// the pool schedules the work. Without one, each RNG is seeded from the OS.

use crate::document::{DocumentError, SHAPE_DEPTH, write_document_file};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use shape_art::{ArtworkSpec, ShapeConfig};
use std::path::{Path, PathBuf};

/// Summary of one written artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkReport {
    pub identifier: String,
    pub path: PathBuf,
    pub shapes: usize,
    /// Seed used, if the run was seeded.
    pub seed: Option<u64>,
}

/// Seed for the artwork at `index` in a run with base seed `base`.
pub fn artwork_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add(index as u64)
}

/// Render `spec` with `rng` and write it under `out_dir`.
pub fn produce_artwork(
    spec: &ArtworkSpec,
    config: &ShapeConfig,
    rng: &mut StdRng,
    out_dir: &Path,
) -> Result<(PathBuf, usize), DocumentError> {
    let elements = spec.render_elements(config, rng, SHAPE_DEPTH);
    let path = out_dir.join(&spec.file_name);
    write_document_file(&path, spec, &elements)?;
    Ok((path, elements.len()))
}

/// Produce every artwork in `specs` concurrently. Results come back in the
/// same order as `specs`.
pub fn produce_all(
    specs: &[ArtworkSpec],
    config: &ShapeConfig,
    seed: Option<u64>,
    out_dir: &Path,
) -> Vec<Result<ArtworkReport, DocumentError>> {
    specs
        .par_iter()
        .enumerate()
        .map(|(index, spec)| -> Result<ArtworkReport, DocumentError> {
            let seed_used = seed.map(|base| artwork_seed(base, index));
            let mut rng = match seed_used {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            log::info!("{}: generating {} shapes", spec.identifier, spec.shape_count);
            let (path, shapes) = produce_artwork(spec, config, &mut rng, out_dir)?;
            Ok(ArtworkReport {
                identifier: spec.identifier.clone(),
                path,
                shapes,
                seed: seed_used,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_offset_by_index() {
        assert_eq!(artwork_seed(10, 0), 10);
        assert_eq!(artwork_seed(10, 2), 12);
        assert_eq!(artwork_seed(u64::MAX, 1), 0);
    }
}
