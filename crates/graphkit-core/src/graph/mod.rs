//! Graph data model and algorithms
//!
//! Provides the shared adjacency-list [`Graph`], the implicit [`Grid`] graph,
//! the [`PriorityQueue`] and [`DisjointSet`] building blocks, and the
//! algorithms in [`algos`]. Both graph kinds implement [`GraphProvider`].

pub mod algos;
pub mod disjoint_set;
pub mod document;
pub mod grid;
pub mod priority_queue;
pub mod traversal;
pub mod types;

pub use algos::{
    a_star, bfs, dfs, dijkstra, kruskal_mst, minimum_spanning_forest, topological_sort,
    ShortestPaths, SpanningForest, WeightedEdge,
};
pub use disjoint_set::DisjointSet;
pub use document::{DocumentFormat, EdgeSpec, GraphDocument};
pub use grid::{Grid, Position};
pub use priority_queue::PriorityQueue;
pub use traversal::GraphProvider;
pub use types::{Edge, Graph, GraphKind, GraphOptions};
