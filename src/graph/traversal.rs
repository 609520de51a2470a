//! Breadth-first traversal over an [`AdjListGraph`].

use std::collections::VecDeque;

use super::AdjListGraph;

/// Anything that can produce a breadth-first discovery order of labels.
///
/// The separation calculator only depends on this, so it can be driven by a
/// graph or by a test double.
pub trait BreadthFirst {
    /// Labels reachable from `start`, in discovery order. Empty if `start`
    /// is unknown.
    fn bfs_order(&self, start: &str) -> Vec<String>;
}

impl<T: PartialEq + Clone> AdjListGraph<T> {
    /// Breadth-first discovery order starting at `start`.
    ///
    /// Returns an empty sequence when `start` is not a vertex.
    pub fn traverse_bfs(&self, start: &T) -> Vec<T> {
        match self.index_of(start) {
            Some(position) => self.traverse_bfs_from(position),
            None => Vec::new(),
        }
    }

    /// Breadth-first discovery order starting at a vertex position.
    ///
    /// Siblings are discovered in ascending vertex position, not in arc
    /// insertion order.
    pub fn traverse_bfs_from(&self, start: usize) -> Vec<T> {
        let n = self.num_vertices();
        if start >= n {
            return Vec::new();
        }

        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        queue.push_back(start);
        visited[start] = true;

        while let Some(current) = queue.pop_front() {
            order.push(self.vertices()[current].clone());

            let mut next: Vec<usize> = self.targets_at(current).to_vec();
            next.sort_unstable();
            next.dedup();
            for target in next {
                if !visited[target] {
                    visited[target] = true;
                    queue.push_back(target);
                }
            }
        }

        order
    }
}

impl BreadthFirst for AdjListGraph<String> {
    fn bfs_order(&self, start: &str) -> Vec<String> {
        match self.vertices().iter().position(|v| v == start) {
            Some(position) => self.traverse_bfs_from(position),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> String {
        v.to_string()
    }

    fn graph(vertices: &[&str], edges: &[(&str, &str)]) -> AdjListGraph<String> {
        let mut g = AdjListGraph::new();
        for v in vertices {
            g.add_vertex(s(v));
        }
        for (a, b) in edges {
            g.add_edge(&s(a), &s(b));
        }
        g
    }

    #[test]
    fn test_bfs_level_order() {
        // a - b - d
        //  \
        //   c - e
        let g = graph(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "e")],
        );
        assert_eq!(g.traverse_bfs(&s("a")), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_bfs_ties_broken_by_position_not_insertion() {
        let mut g = graph(&["hub", "x", "y", "z"], &[]);
        // Insert arcs in reverse position order.
        g.add_edge(&s("hub"), &s("z"));
        g.add_edge(&s("hub"), &s("y"));
        g.add_edge(&s("hub"), &s("x"));
        assert_eq!(g.traverse_bfs(&s("hub")), vec!["hub", "x", "y", "z"]);
    }

    #[test]
    fn test_bfs_skips_unreachable() {
        let g = graph(&["a", "b", "island"], &[("a", "b")]);
        let order = g.traverse_bfs(&s("a"));
        assert_eq!(order, vec!["a", "b"]);
        assert!(!order.contains(&s("island")));
    }

    #[test]
    fn test_bfs_follows_arc_direction() {
        let mut g = graph(&["a", "b", "c"], &[]);
        g.add_arc(&s("a"), &s("b"));
        g.add_arc(&s("c"), &s("a"));
        assert_eq!(g.traverse_bfs(&s("a")), vec!["a", "b"]);
        assert_eq!(g.traverse_bfs(&s("c")), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_bfs_cycle_terminates() {
        let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(g.traverse_bfs(&s("b")), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_bfs_is_repeatable() {
        let g = graph(&["a", "b", "c", "d"], &[("a", "c"), ("c", "b"), ("a", "d")]);
        let first = g.traverse_bfs(&s("a"));
        let second = g.traverse_bfs(&s("a"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_bfs_unknown_start_is_empty() {
        let g = graph(&["a"], &[]);
        assert!(g.traverse_bfs(&s("ghost")).is_empty());
        assert!(g.traverse_bfs_from(7).is_empty());
        assert!(g.bfs_order("ghost").is_empty());
    }

    #[test]
    fn test_bfs_order_matches_inherent_traversal() {
        let g = graph(&["a", "b", "c"], &[("a", "c"), ("c", "b")]);
        assert_eq!(g.bfs_order("a"), g.traverse_bfs(&s("a")));
    }
}
