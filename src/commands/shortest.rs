//! `graphkit dijkstra` - single-source shortest paths

use serde::Serialize;

use graphkit_core::error::{GraphError, Result};
use graphkit_core::graph::{dijkstra, Graph, ShortestPaths};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::format_distance;

/// One row of the distance table; `None` serializes as `null` (unreachable)
#[derive(Debug, Serialize)]
struct DistanceRow<'a> {
    vertex: &'a str,
    distance: Option<f64>,
}

/// Execute the dijkstra command
pub fn execute(
    cli: &Cli,
    graph: &Graph<String>,
    source: &str,
    target: Option<&str>,
) -> Result<()> {
    let source = source.to_string();
    let paths = dijkstra(graph, &source)?;

    match target {
        Some(target) => print_path(cli, &paths, target),
        None => print_distances(cli, graph, &paths),
    }
}

fn print_distances(
    cli: &Cli,
    graph: &Graph<String>,
    paths: &ShortestPaths<String>,
) -> Result<()> {
    let rows: Vec<DistanceRow> = graph
        .vertices()
        .iter()
        .map(|vertex| DistanceRow {
            vertex,
            distance: paths.distance(vertex).filter(|d| d.is_finite()),
        })
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": paths.source(),
                "distances": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let width = rows.iter().map(|r| r.vertex.len()).max().unwrap_or(0);
            for row in &rows {
                println!(
                    "{:<width$}  {}",
                    row.vertex,
                    format_distance(row.distance.unwrap_or(f64::INFINITY)),
                    width = width
                );
            }
        }
    }

    Ok(())
}

fn print_path(cli: &Cli, paths: &ShortestPaths<String>, target: &str) -> Result<()> {
    let target = target.to_string();
    let distance = paths
        .distance(&target)
        .ok_or_else(|| GraphError::missing_vertex("target", &target))?;
    let path = paths.path_to(&target);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": paths.source(),
                "target": target,
                "distance": distance.is_finite().then_some(distance),
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match path {
            Some(path) => {
                println!("{}", path.join(" -> "));
                if !cli.quiet {
                    println!("distance: {}", format_distance(distance));
                }
            }
            None => println!("no path from {} to {}", paths.source(), target),
        },
    }

    Ok(())
}
