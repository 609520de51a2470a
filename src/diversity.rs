//! Diversity test: select movies by passed criteria and share of women in the cast.

use serde::Serialize;

use crate::catalog::{Catalog, WorkId};
use crate::error::{HollywoodError, Result};

/// Number of Bechdel-like criteria in the reference results data.
pub const DEFAULT_CRITERIA: usize = 13;

/// Tolerance for the female-percentage comparison.
const PERCENT_EPSILON: f64 = 1e-5;

/// Thresholds a movie must meet to pass the diversity test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversityThresholds {
    /// Minimum number of criteria passed (inclusive).
    pub min_passed: usize,
    /// Female share of the cast, in percent, that must be exceeded.
    pub min_female_percent: f64,
}

impl DiversityThresholds {
    /// Validate thresholds against the number of criteria available.
    pub fn new(min_passed: usize, min_female_percent: f64, criteria: usize) -> Result<Self> {
        if min_passed < 1 || min_passed > criteria {
            return Err(HollywoodError::InvalidInput(format!(
                "minimum passed tests must be between 1 and {}, got {}",
                criteria, min_passed
            )));
        }
        if !(0.0..=100.0).contains(&min_female_percent) {
            return Err(HollywoodError::InvalidInput(format!(
                "minimum female percentage must be between 0 and 100, got {}",
                min_female_percent
            )));
        }
        Ok(Self {
            min_passed,
            min_female_percent,
        })
    }
}

/// Titles passing each part of the test, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiversityReport {
    pub total: usize,
    pub passed_tests: Vec<String>,
    pub passed_gender: Vec<String>,
    pub passed_both: Vec<String>,
}

/// Run the diversity test over every work in `catalog`.
///
/// A work passes the criteria part with at least `min_passed` passed
/// criteria, and the gender part when its female percentage exceeds
/// `min_female_percent` by more than 1e-5 (so exactly meeting it fails).
/// Works with no cast never pass the gender part.
pub fn diversity_test(catalog: &Catalog, thresholds: &DiversityThresholds) -> DiversityReport {
    let mut report = DiversityReport {
        total: catalog.works().len(),
        ..Default::default()
    };

    for (i, work) in catalog.works().iter().enumerate() {
        let passes_tests = work.passed_count() >= thresholds.min_passed;
        let passes_gender = catalog
            .female_percentage(WorkId(i))
            .map(|pct| pct - thresholds.min_female_percent > PERCENT_EPSILON)
            .unwrap_or(false);

        if passes_tests {
            report.passed_tests.push(work.title.clone());
        }
        if passes_gender {
            report.passed_gender.push(work.title.clone());
        }
        if passes_tests && passes_gender {
            report.passed_both.push(work.title.clone());
        }
    }

    log::debug!(
        "Diversity test: {} by criteria, {} by gender, {} both (of {})",
        report.passed_tests.len(),
        report.passed_gender.len(),
        report.passed_both.len(),
        report.total
    );
    report
}
