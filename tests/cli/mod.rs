pub mod support;

mod astar;
mod config;
mod documents;
mod logging;
mod shortest;
mod topo;
