//! `graphkit show` - print a graph's adjacency list

use graphkit_core::error::Result;
use graphkit_core::graph::Graph;

use crate::cli::{Cli, OutputFormat};

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "directed": graph.is_directed(),
                "vertices": graph.vertices(),
                "edges": graph.edges(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print!("{}", graph);
            if !cli.quiet {
                println!();
                println!(
                    "{} vertices, {} edges ({})",
                    graph.vertex_count(),
                    graph.edge_count(),
                    if graph.is_directed() {
                        "directed"
                    } else {
                        "undirected"
                    }
                );
            }
        }
    }

    Ok(())
}
