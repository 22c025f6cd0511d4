use std::time::Instant;

use graphkit_core::config::GraphkitConfig;
use graphkit_core::error::Result;
use graphkit_core::graph::{Graph, GraphDocument};
use graphkit_core::trace_time;

use crate::cli::GraphArgs;

/// Load the document named on the command line into a labelled graph
pub fn load_graph(args: &GraphArgs, config: &GraphkitConfig) -> Result<Graph<String>> {
    let start = Instant::now();
    let document = GraphDocument::load(&args.file)?;
    trace_time!(start, "load_document", edges = document.edges.len());

    let graph = document.into_graph(&config.graph, args.kind_override())?;
    tracing::debug!(
        file = %args.file.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "graph loaded"
    );
    Ok(graph)
}

/// Render a distance for humans; unreachable vertices have no finite value
pub fn format_distance(distance: f64) -> String {
    if distance.is_finite() {
        distance.to_string()
    } else {
        "unreachable".to_string()
    }
}
