//! Command dispatch logic for graphkit
use std::time::Instant;

use graphkit_core::config::GraphkitConfig;
use graphkit_core::error::Result;
use graphkit_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::helpers::load_graph;
use crate::commands::traverse::Order;

pub fn run(cli: &Cli, config: &GraphkitConfig, start: Instant) -> Result<()> {
    let result = match &cli.command {
        None => handle_no_command(),

        Some(Commands::Bfs { graph, start }) => {
            let loaded = load_graph(graph, config)?;
            commands::traverse::execute(cli, &loaded, start, Order::BreadthFirst)
        }

        Some(Commands::Dfs { graph, start }) => {
            let loaded = load_graph(graph, config)?;
            commands::traverse::execute(cli, &loaded, start, Order::DepthFirst)
        }

        Some(Commands::Dijkstra {
            graph,
            source,
            target,
        }) => {
            let loaded = load_graph(graph, config)?;
            commands::shortest::execute(cli, &loaded, source, target.as_deref())
        }

        Some(Commands::Astar {
            grid_file,
            start,
            goal,
        }) => commands::astar::execute(cli, grid_file, *start, *goal),

        Some(Commands::Mst { graph }) => {
            let loaded = load_graph(graph, config)?;
            commands::mst::execute(cli, &loaded)
        }

        Some(Commands::Topo { graph }) => {
            let loaded = load_graph(graph, config)?;
            commands::topo::execute(cli, &loaded)
        }

        Some(Commands::Show { graph }) => {
            let loaded = load_graph(graph, config)?;
            commands::show::execute(cli, &loaded)
        }
    };

    trace_time!(start, "command_total");
    result
}

fn handle_no_command() -> Result<()> {
    println!("graphkit {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Graph traversal, shortest paths, spanning trees and topological order.");
    println!();
    println!("Run `graphkit --help` for usage information.");
    Ok(())
}
