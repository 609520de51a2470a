//! The actor/movie graph and the queries asked of it.

use std::fmt;
use std::path::Path;

use crate::builder::{BuiltGraph, GraphBuilder};
use crate::catalog::Catalog;
use crate::diversity::{self, DiversityReport, DiversityThresholds};
use crate::error::Result;
use crate::graph::{self, AdjListGraph};
use crate::ingest;
use crate::separation;

/// Catalog of actors and movies plus the graph built from it.
///
/// Built once; every query afterwards is read-only.
#[derive(Debug, Clone)]
pub struct Hollywood {
    catalog: Catalog,
    built: BuiltGraph,
}

impl Hollywood {
    /// Load cast and results files and build the graph.
    ///
    /// Unreadable or malformed files are logged and give an empty or partial
    /// graph rather than an error.
    pub fn load(cast_file: &Path, results_file: &Path) -> Self {
        Self::from_catalog(ingest::load_dataset(cast_file, results_file))
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        let built = GraphBuilder::new().build(&catalog);
        Self { catalog, built }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &AdjListGraph<String> {
        &self.built.graph
    }

    /// Titles of the movies an actor played in, or `None` for unknown actors.
    pub fn works_with(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.catalog.person_id(name)?;
        Some(
            self.catalog
                .works_of(id)
                .into_iter()
                .map(|w| self.catalog.work(w).title.as_str())
                .collect(),
        )
    }

    /// Names of a movie's cast, or `None` for unknown movies.
    pub fn cast_of(&self, title: &str) -> Option<Vec<&str>> {
        let id = self.catalog.work_id(title)?;
        Some(
            self.catalog
                .cast_of(id)
                .into_iter()
                .map(|p| self.catalog.person(p).name.as_str())
                .collect(),
        )
    }

    pub fn describe_person(&self, name: &str) -> Option<String> {
        self.catalog
            .person_id(name)
            .map(|id| self.catalog.describe_person(id))
    }

    pub fn describe_work(&self, title: &str) -> Option<String> {
        self.catalog
            .work_id(title)
            .map(|id| self.catalog.describe_work(id))
    }

    /// Number of movies separating two actors; `-1` when they are unknown,
    /// unconnected, or the same actor.
    pub fn degree_of_separation(&self, a: &str, b: &str) -> i32 {
        separation::degree_of_separation(&self.built.graph, a, b, |label| {
            self.catalog.is_person(label)
        })
    }

    pub fn diversity_test(&self, thresholds: &DiversityThresholds) -> DiversityReport {
        diversity::diversity_test(&self.catalog, thresholds)
    }

    /// Write the graph in TGF.
    pub fn save_tgf(&self, path: &Path) -> Result<()> {
        graph::save_tgf(&self.built.graph, path)
    }
}

impl fmt::Display for Hollywood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.catalog)
    }
}
