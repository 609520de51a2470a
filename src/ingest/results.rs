//! Test-result records: a movie title followed by one 0/1 flag per criterion.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::catalog::Catalog;
use crate::error::{HollywoodError, Result};

/// Outcome of reading a results file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResultsSummary {
    /// Rows attached to a known work.
    pub applied: usize,
    /// Rows naming a work that is not in the catalog.
    pub skipped: usize,
}

fn parse_flag(field: &str, line: u64) -> Result<bool> {
    match field.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(HollywoodError::Parse(format!(
            "test result '{}' on line {} is not 0 or 1",
            other, line
        ))),
    }
}

/// Read test-result records into the works of `catalog`.
///
/// The header row fixes the record width; rows for unknown titles are
/// skipped. Rows read before an error stay applied.
pub fn read_results<R: Read>(reader: R, catalog: &mut Catalog) -> Result<ResultsSummary> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut summary = ResultsSummary::default();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let Some(title) = record.get(0) else {
            continue;
        };
        let flags = record
            .iter()
            .skip(1)
            .map(|field| parse_flag(field, line))
            .collect::<Result<Vec<bool>>>()?;

        if catalog.record_test_results(title, &flags) {
            summary.applied += 1;
        } else {
            log::debug!("Skipping results for unknown movie '{}'", title);
            summary.skipped += 1;
        }
    }
    Ok(summary)
}

/// Read a results file into `catalog`.
pub fn load_results(path: &Path, catalog: &mut Catalog) -> Result<ResultsSummary> {
    let file = File::open(path)?;
    let summary = read_results(file, catalog)?;
    log::debug!(
        "Loaded results for {} movies from {} ({} unknown)",
        summary.applied,
        path.display(),
        summary.skipped
    );
    Ok(summary)
}

/// Read a results file, logging instead of returning failures.
pub fn load_results_lenient(path: &Path, catalog: &mut Catalog) -> ResultsSummary {
    match load_results(path, catalog) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Failed to read results file {}: {}", path.display(), e);
            ResultsSummary::default()
        }
    }
}
