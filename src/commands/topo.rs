//! `graphkit topo` - topological order of a DAG

use graphkit_core::bail_usage;
use graphkit_core::error::Result;
use graphkit_core::graph::{topological_sort, Graph};

use crate::cli::{Cli, OutputFormat};

/// Execute the topo command
pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    if !graph.is_directed() {
        bail_usage!("topological sort requires a directed graph");
    }

    let order = topological_sort(graph)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "order": order });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for vertex in &order {
                println!("{}", vertex);
            }
        }
    }

    Ok(())
}
