use crate::bail_invalid;
use crate::error::Result;
use crate::graph::disjoint_set::DisjointSet;
use crate::graph::types::{Edge, Graph};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Undirected weighted edge between dense vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

impl WeightedEdge {
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        WeightedEdge {
            source,
            target,
            weight,
        }
    }
}

/// Minimum spanning tree, or forest when the input is disconnected
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningForest<E> {
    /// Accepted edges in ascending weight order
    pub edges: Vec<E>,
    pub total_weight: f64,
    /// Connected components, counting isolated vertices
    pub tree_count: usize,
}

impl<E> SpanningForest<E> {
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count <= 1
    }
}

/// Kruskal's algorithm over `vertex_count` vertices numbered `0..vertex_count`.
///
/// Edges are taken in ascending weight order (equal weights keep input
/// order) and accepted unless both endpoints already share a set.
#[tracing::instrument(skip(edges), fields(edge_count = edges.len()))]
pub fn kruskal_mst(
    vertex_count: usize,
    edges: &[WeightedEdge],
) -> Result<SpanningForest<WeightedEdge>> {
    for edge in edges {
        if edge.source >= vertex_count || edge.target >= vertex_count {
            bail_invalid!(
                "edge endpoint",
                format!(
                    "{} -- {} (vertex count is {})",
                    edge.source, edge.target, vertex_count
                )
            );
        }
        if edge.weight.is_nan() {
            bail_invalid!("edge weight", edge.weight);
        }
    }

    let mut sorted: Vec<&WeightedEdge> = edges.iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = DisjointSet::new();
    for vertex in 0..vertex_count {
        sets.make_set(vertex);
    }

    let mut forest = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_weight = 0.0;
    for edge in sorted {
        if sets.union(&edge.source, &edge.target)? {
            forest.push(*edge);
            total_weight += edge.weight;
        }
    }

    tracing::debug!(
        accepted = forest.len(),
        trees = sets.set_count(),
        "kruskal finished"
    );

    Ok(SpanningForest {
        edges: forest,
        total_weight,
        tree_count: sets.set_count(),
    })
}

/// Minimum spanning forest of a labelled graph; every edge is treated as
/// undirected
pub fn minimum_spanning_forest<V: Clone + Eq + Hash>(
    graph: &Graph<V>,
) -> Result<SpanningForest<Edge<V>>> {
    let edges: Vec<WeightedEdge> = (0..graph.vertex_count())
        .flat_map(|source| {
            graph
                .adjacent(source)
                .iter()
                .map(move |adj| WeightedEdge::new(source, adj.target, adj.weight))
        })
        .collect();

    let forest = kruskal_mst(graph.vertex_count(), &edges)?;

    Ok(SpanningForest {
        edges: forest
            .edges
            .iter()
            .map(|edge| Edge {
                from: graph.vertex_at(edge.source).clone(),
                to: graph.vertex_at(edge.target).clone(),
                weight: edge.weight,
            })
            .collect(),
        total_weight: forest.total_weight,
        tree_count: forest.tree_count,
    })
}
