//! Graph algorithm implementations
//!
//! - `bfs`, `dfs`: lazy traversals from a start vertex
//! - `dijkstra`: single-source shortest paths over non-negative weights
//! - `astar`: single-target path-finding on a grid
//! - `kruskal`: minimum spanning tree/forest
//! - `toposort`: DFS linearisation with cycle detection

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod toposort;

pub use astar::a_star;
pub use bfs::{bfs, Bfs};
pub use dfs::{dfs, Dfs};
pub use dijkstra::{dijkstra, ShortestPaths};
pub use kruskal::{kruskal_mst, minimum_spanning_forest, SpanningForest, WeightedEdge};
pub use toposort::topological_sort;
