//! Builds the actor/movie graph from a [`Catalog`].

use crate::catalog::{Catalog, PersonId, WorkId};
use crate::graph::AdjListGraph;

/// An undirected actor/movie graph plus the entity → vertex position maps.
///
/// Entities never carry their own graph position; the maps live here so the
/// same catalog can back several graphs.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: AdjListGraph<String>,
    work_positions: Vec<usize>,
    person_positions: Vec<usize>,
}

impl BuiltGraph {
    pub fn work_position(&self, work: WorkId) -> Option<usize> {
        self.work_positions.get(work.0).copied()
    }

    pub fn person_position(&self, person: PersonId) -> Option<usize> {
        self.person_positions.get(person.0).copied()
    }
}

/// Turns catalog credits into vertices and edges.
#[derive(Debug, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Vertices are all works in catalog order followed by all people; every
    /// credit becomes an edge (person → work arc, then work → person).
    ///
    /// Labels are bare names, so a person and a work sharing a name share a
    /// vertex.
    pub fn build(&self, catalog: &Catalog) -> BuiltGraph {
        let mut graph = AdjListGraph::new();

        let mut work_positions = Vec::with_capacity(catalog.works().len());
        for work in catalog.works() {
            // A new label lands at the end.
            work_positions.push(
                graph
                    .index_of(&work.title)
                    .unwrap_or(graph.num_vertices()),
            );
            graph.add_vertex(work.title.clone());
        }

        let mut person_positions = Vec::with_capacity(catalog.people().len());
        for person in catalog.people() {
            person_positions.push(
                graph
                    .index_of(&person.name)
                    .unwrap_or(graph.num_vertices()),
            );
            graph.add_vertex(person.name.clone());
        }

        for (w, work) in catalog.works().iter().enumerate() {
            for person in catalog.cast_of(WorkId(w)) {
                graph.add_edge(&catalog.person(person).name, &work.title);
            }
        }

        log::debug!(
            "Built graph with {} vertices and {} arcs",
            graph.num_vertices(),
            graph.num_arcs()
        );

        BuiltGraph {
            graph,
            work_positions,
            person_positions,
        }
    }
}
