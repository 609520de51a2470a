pub mod cast;
pub mod results;

pub use cast::{load_cast, load_cast_lenient, read_cast, CAST_FIELDS};
pub use results::{load_results, load_results_lenient, read_results, ResultsSummary};

use std::path::Path;

use crate::catalog::Catalog;

/// Load a cast file and its test results into a fresh catalog.
///
/// Missing or malformed files are logged and leave the catalog with whatever
/// was read up to that point; this never fails.
pub fn load_dataset(cast_file: &Path, results_file: &Path) -> Catalog {
    let mut catalog = Catalog::new();
    let credits = load_cast_lenient(cast_file, &mut catalog);
    let results = load_results_lenient(results_file, &mut catalog);
    log::info!(
        "Loaded {} credits ({} movies, {} actors); results for {} movies",
        credits,
        catalog.works().len(),
        catalog.people().len(),
        results.applied
    );
    catalog
}
