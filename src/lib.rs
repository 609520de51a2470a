pub mod builder;
pub mod catalog;
pub mod config;
pub mod diversity;
pub mod error;
pub mod graph;
pub mod hollywood;
pub mod ingest;
pub mod separation;

pub use builder::{BuiltGraph, GraphBuilder};
pub use catalog::{Catalog, Person, PersonId, Work, WorkId};
pub use config::Config;
pub use diversity::{diversity_test, DiversityReport, DiversityThresholds};
pub use error::{HollywoodError, Result};
pub use graph::{AdjListGraph, BreadthFirst};
pub use hollywood::Hollywood;
pub use separation::{degree_of_separation, NOT_CONNECTED};
