//! CLI commands for graphkit

pub mod astar;
pub mod dispatch;
pub mod helpers;
pub mod mst;
pub mod shortest;
pub mod show;
pub mod topo;
pub mod traverse;
