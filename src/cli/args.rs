use clap::Args;
use std::path::PathBuf;

use graphkit_core::graph::GraphKind;

/// Arguments shared by every command that reads a graph document
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (.json, .toml, .yaml or .yml)
    pub file: PathBuf,

    /// Treat every edge as directed, whatever the document or config says
    #[arg(long, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat every edge as undirected, whatever the document or config says
    #[arg(long)]
    pub undirected: bool,
}

impl GraphArgs {
    pub fn kind_override(&self) -> Option<GraphKind> {
        match (self.directed, self.undirected) {
            (true, _) => Some(GraphKind::Directed),
            (_, true) => Some(GraphKind::Undirected),
            _ => None,
        }
    }
}
