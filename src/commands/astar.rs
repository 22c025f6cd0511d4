//! `graphkit astar` - shortest path across a grid file

use std::fs;
use std::path::Path;

use graphkit_core::error::{GraphError, Result};
use graphkit_core::graph::{a_star, Grid, Position};

use crate::cli::{Cli, OutputFormat};

/// Execute the astar command
pub fn execute(cli: &Cli, grid_file: &Path, start: Position, goal: Position) -> Result<()> {
    let text = fs::read_to_string(grid_file).map_err(|e| {
        GraphError::Other(format!(
            "failed to read grid from {}: {}",
            grid_file.display(),
            e
        ))
    })?;
    let grid = Grid::parse(&text)?;
    let path = a_star(&grid, start, goal)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "goal": goal,
                "found": path.is_some(),
                "moves": path.as_ref().map(|p| p.len() - 1),
                "path": path,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match path {
            Some(path) => {
                let cells: Vec<String> = path.iter().map(Position::to_string).collect();
                println!("{}", cells.join(" -> "));
                if !cli.quiet {
                    println!("moves: {}", path.len() - 1);
                    println!();
                    print!("{}", render_path(&grid, &path));
                }
            }
            None => println!("no path from {} to {}", start, goal),
        },
    }

    Ok(())
}

/// Grid drawing with path cells marked `*`
fn render_path(grid: &Grid, path: &[Position]) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            let cell = if path.contains(&pos) {
                '*'
            } else if grid.is_walkable(pos) {
                '.'
            } else {
                '#'
            };
            out.push(cell);
        }
        out.push('\n');
    }
    out
}
