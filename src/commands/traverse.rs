//! `graphkit bfs` / `graphkit dfs` - list vertices reachable from a start

use graphkit_core::error::{GraphError, Result};
use graphkit_core::graph::{bfs, dfs, Graph};

use crate::cli::{Cli, OutputFormat};

/// Visit order of a traversal command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    BreadthFirst,
    DepthFirst,
}

impl Order {
    fn name(self) -> &'static str {
        match self {
            Order::BreadthFirst => "bfs",
            Order::DepthFirst => "dfs",
        }
    }
}

/// Execute a traversal command
pub fn execute(cli: &Cli, graph: &Graph<String>, start: &str, order: Order) -> Result<()> {
    let start = start.to_string();
    if !graph.contains(&start) {
        return Err(GraphError::missing_vertex("start", &start));
    }

    let visited: Vec<String> = match order {
        Order::BreadthFirst => bfs(graph, &start).collect(),
        Order::DepthFirst => dfs(graph, &start).collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "algorithm": order.name(),
                "start": start,
                "order": visited,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for vertex in &visited {
                println!("{}", vertex);
            }
            if !cli.quiet {
                println!();
                println!(
                    "Visited {} of {} vertices",
                    visited.len(),
                    graph.vertex_count()
                );
            }
        }
    }

    Ok(())
}
