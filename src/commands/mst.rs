//! `graphkit mst` - minimum spanning tree or forest

use graphkit_core::error::Result;
use graphkit_core::graph::{minimum_spanning_forest, Graph};

use crate::cli::{Cli, OutputFormat};

/// Execute the mst command
pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    let forest = minimum_spanning_forest(graph)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&forest)?);
        }
        OutputFormat::Human => {
            for edge in &forest.edges {
                println!("{} -- {} ({})", edge.from, edge.to, edge.weight);
            }
            if !cli.quiet {
                println!();
                println!("total weight: {}", forest.total_weight);
                if !forest.is_spanning_tree() {
                    println!(
                        "graph is disconnected: {} trees in the forest",
                        forest.tree_count
                    );
                }
            }
        }
    }

    Ok(())
}
