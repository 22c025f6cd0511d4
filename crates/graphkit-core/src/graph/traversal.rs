use crate::graph::types::Graph;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for providing graph adjacency to the algorithms.
///
/// Implemented by labelled [`Graph`]s and by [`crate::graph::Grid`], so the
/// same traversal and shortest-path code runs over either.
pub trait GraphProvider {
    type Vertex: Clone + Eq + Hash + Debug + Display;

    fn contains(&self, vertex: &Self::Vertex) -> bool;

    /// All vertices, in a stable order
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Outgoing `(neighbor, weight)` pairs in adjacency order
    fn outbound(&self, vertex: &Self::Vertex) -> Vec<(Self::Vertex, f64)>;
}

impl<V: Clone + Eq + Hash + Debug + Display> GraphProvider for Graph<V> {
    type Vertex = V;

    fn contains(&self, vertex: &V) -> bool {
        Graph::contains(self, vertex)
    }

    fn vertices(&self) -> Vec<V> {
        Graph::vertices(self).to_vec()
    }

    fn outbound(&self, vertex: &V) -> Vec<(V, f64)> {
        self.neighbors(vertex)
            .map(|(target, weight)| (target.clone(), weight))
            .collect()
    }
}
