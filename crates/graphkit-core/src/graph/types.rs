use crate::bail_invalid;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Whether edges are one-way or stored in both directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

impl std::str::FromStr for GraphKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(GraphKind::Directed),
            "undirected" => Ok(GraphKind::Undirected),
            other => Err(format!(
                "unknown graph kind '{}' (expected: directed, undirected)",
                other
            )),
        }
    }
}

/// Construction options for a [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphOptions {
    pub kind: GraphKind,
    /// Weight used by [`Graph::add_edge`]
    pub default_weight: f64,
    /// Refuse negative weights at insertion time
    pub reject_negative_weights: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        GraphOptions {
            kind: GraphKind::Directed,
            default_weight: 1.0,
            reject_negative_weights: false,
        }
    }
}

/// A weighted edge between two labelled vertices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

/// Adjacency entry: dense index of the target plus the edge weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Adjacent {
    pub target: usize,
    pub weight: f64,
}

/// Adjacency-list graph keyed by vertex label.
///
/// Vertices are interned to dense indices in first-reference order, which is
/// also the order [`Graph::vertices`] reports them in. Every edge endpoint is
/// registered as a vertex, even when it has no outgoing edges.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    options: GraphOptions,
    index: HashMap<V, usize>,
    vertices: Vec<V>,
    adjacency: Vec<Vec<Adjacent>>,
    edge_count: usize,
}

impl<V: Clone + Eq + Hash> Default for Graph<V> {
    fn default() -> Self {
        Self::with_options(GraphOptions::default())
    }
}

impl<V: Clone + Eq + Hash> Graph<V> {
    pub fn directed() -> Self {
        Self::default()
    }

    pub fn undirected() -> Self {
        Self::with_options(GraphOptions {
            kind: GraphKind::Undirected,
            ..Default::default()
        })
    }

    pub fn with_options(options: GraphOptions) -> Self {
        Graph {
            options,
            index: HashMap::new(),
            vertices: Vec::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.options.kind == GraphKind::Directed
    }

    /// Register a vertex with an empty adjacency list. No-op if present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.intern(vertex);
    }

    /// Add an edge carrying the graph's default weight
    pub fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        self.add_weighted_edge(from, to, self.options.default_weight)
    }

    /// Add an edge `from -> to` (and `to -> from` for undirected graphs).
    ///
    /// Both endpoints are registered first. A self-loop in an undirected
    /// graph is stored once.
    pub fn add_weighted_edge(&mut self, from: V, to: V, weight: f64) -> Result<()> {
        if weight.is_nan() {
            bail_invalid!("edge weight", weight);
        }
        if weight < 0.0 && self.options.reject_negative_weights {
            bail_invalid!("edge weight (negative weights are rejected)", weight);
        }

        let source = self.intern(from);
        let target = self.intern(to);

        self.adjacency[source].push(Adjacent { target, weight });
        if self.options.kind == GraphKind::Undirected && source != target {
            self.adjacency[target].push(Adjacent {
                target: source,
                weight,
            });
        }
        self.edge_count += 1;
        Ok(())
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// All vertices in first-reference order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of `add_edge` calls; an undirected edge counts once
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing neighbors in adjacency-list order; empty for unknown vertices
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, f64)> + 'a {
        let adjacent: &'a [Adjacent] = match self.index_of(vertex) {
            Some(idx) => self.adjacent(idx),
            None => &[],
        };
        adjacent
            .iter()
            .map(move |adj| (&self.vertices[adj.target], adj.weight))
    }

    /// Every stored directed edge. Undirected edges appear once per direction.
    pub fn edges(&self) -> Vec<Edge<V>> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, adjacent)| {
                adjacent.iter().map(move |adj| Edge {
                    from: self.vertices[source].clone(),
                    to: self.vertices[adj.target].clone(),
                    weight: adj.weight,
                })
            })
            .collect()
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub(crate) fn vertex_at(&self, idx: usize) -> &V {
        &self.vertices[idx]
    }

    pub(crate) fn adjacent(&self, idx: usize) -> &[Adjacent] {
        &self.adjacency[idx]
    }

    fn intern(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.adjacency.push(Vec::new());
        idx
    }
}

impl<V: Clone + Eq + Hash + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, vertex) in self.vertices.iter().enumerate() {
            let neighbors: Vec<String> = self.adjacency[idx]
                .iter()
                .map(|adj| self.vertices[adj.target].to_string())
                .collect();
            writeln!(f, "{} -> [{}]", vertex, neighbors.join(", "))?;
        }
        Ok(())
    }
}
