//! Graphkit Core Library
//!
//! Graph data structures and algorithms: traversal, shortest paths (Dijkstra
//! and grid A*), minimum spanning forests and topological ordering.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
