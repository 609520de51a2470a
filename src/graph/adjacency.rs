//! Adjacency-list graph over arbitrary labeled vertices.

use std::fmt;

/// Directed graph stored as a vertex list plus one ordered arc list per vertex.
///
/// Vertices are identified by value equality and get a position at first
/// insertion. Arcs are stored as target positions. An undirected edge is just
/// a pair of opposite arcs; nothing here enforces that symmetry.
///
/// Lookups are linear scans over the vertex list.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjListGraph<T> {
    vertices: Vec<T>,
    arcs: Vec<Vec<usize>>,
}

impl<T> Default for AdjListGraph<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            arcs: Vec::new(),
        }
    }
}

impl<T: PartialEq> AdjListGraph<T> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of arcs, counted per direction.
    pub fn num_arcs(&self) -> usize {
        self.arcs.iter().map(Vec::len).sum()
    }

    /// Vertex labels in position order.
    pub fn vertices(&self) -> &[T] {
        &self.vertices
    }

    pub fn vertex(&self, position: usize) -> Option<&T> {
        self.vertices.get(position)
    }

    /// Position of `vertex`, or `None` if it is not in the graph.
    pub fn index_of(&self, vertex: &T) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }

    pub fn contains(&self, vertex: &T) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Append `vertex` at the next free position. No-op if already present.
    pub fn add_vertex(&mut self, vertex: T) {
        if self.index_of(&vertex).is_none() {
            self.vertices.push(vertex);
            self.arcs.push(Vec::new());
        }
    }

    /// Remove `vertex` and every arc touching it.
    ///
    /// Later vertices shift down one position. Unknown vertices are ignored.
    pub fn remove_vertex(&mut self, vertex: &T) {
        if let Some(index) = self.index_of(vertex) {
            self.remove_vertex_at(index);
        }
    }

    fn remove_vertex_at(&mut self, index: usize) {
        self.vertices.remove(index);
        self.arcs.remove(index);
        for targets in &mut self.arcs {
            targets.retain(|&t| t != index);
            for t in targets.iter_mut() {
                if *t > index {
                    *t -= 1;
                }
            }
        }
    }

    /// Insert a directed arc if both endpoints exist; otherwise do nothing.
    pub fn add_arc(&mut self, source: &T, destination: &T) {
        if let (Some(src), Some(dst)) = (self.index_of(source), self.index_of(destination)) {
            self.arcs[src].push(dst);
        }
    }

    /// Insert an arc between two positions; out-of-range positions are dropped.
    pub(crate) fn add_arc_at(&mut self, source: usize, destination: usize) {
        if source < self.vertices.len() && destination < self.vertices.len() {
            self.arcs[source].push(destination);
        }
    }

    /// Insert arcs in both directions.
    pub fn add_edge(&mut self, a: &T, b: &T) {
        self.add_arc(a, b);
        self.add_arc(b, a);
    }

    /// Remove one `source -> destination` arc, if present.
    pub fn remove_arc(&mut self, source: &T, destination: &T) {
        if let (Some(src), Some(dst)) = (self.index_of(source), self.index_of(destination)) {
            let targets = &mut self.arcs[src];
            if let Some(pos) = targets.iter().position(|&t| t == dst) {
                targets.remove(pos);
            }
        }
    }

    pub fn remove_edge(&mut self, a: &T, b: &T) {
        self.remove_arc(a, b);
        self.remove_arc(b, a);
    }

    /// True iff a directed arc `source -> destination` exists. Unknown
    /// vertices yield `false`.
    pub fn is_arc(&self, source: &T, destination: &T) -> bool {
        match (self.index_of(source), self.index_of(destination)) {
            (Some(src), Some(dst)) => self.arcs[src].contains(&dst),
            _ => false,
        }
    }

    /// True iff arcs exist in both directions.
    pub fn is_edge(&self, a: &T, b: &T) -> bool {
        self.is_arc(a, b) && self.is_arc(b, a)
    }

    /// Outgoing neighbors of `vertex` in arc insertion order.
    pub fn successors(&self, vertex: &T) -> Vec<&T> {
        match self.index_of(vertex) {
            Some(index) => self.arcs[index]
                .iter()
                .map(|&t| &self.vertices[t])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Arc target positions of the vertex at `position`.
    pub(crate) fn targets_at(&self, position: usize) -> &[usize] {
        self.arcs.get(position).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All arcs as `(source, destination)` position pairs, in adjacency order.
    pub fn arc_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.arcs
            .iter()
            .enumerate()
            .flat_map(|(src, targets)| targets.iter().map(move |&dst| (src, dst)))
    }
}

impl<T: fmt::Display> fmt::Display for AdjListGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertices.is_empty() {
            return write!(f, "Graph is empty");
        }
        let labels: Vec<String> = self.vertices.iter().map(ToString::to_string).collect();
        writeln!(f, "Vertices: ")?;
        writeln!(f, "[{}]", labels.join(", "))?;
        writeln!(f)?;
        writeln!(f, "Edges: ")?;
        for (vertex, targets) in self.vertices.iter().zip(&self.arcs) {
            let names: Vec<&str> = targets.iter().map(|&t| labels[t].as_str()).collect();
            writeln!(f, "from {}: [{}]", vertex, names.join(", "))?;
        }
        Ok(())
    }
}
