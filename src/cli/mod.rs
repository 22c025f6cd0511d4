//! CLI argument parsing for graphkit
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphkit_core::graph::Position;
pub use args::GraphArgs;
pub use output::OutputFormat;

/// Graphkit - graph algorithms from the command line
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: $GRAPHKIT_CONFIG_DIR/config.toml or the user config dir)
    #[arg(long, global = true, env = "GRAPHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides the config file)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first traversal from a start vertex
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Vertex to start from
        #[arg(long, short)]
        start: String,
    },

    /// Depth-first traversal from a start vertex
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Vertex to start from
        #[arg(long, short)]
        start: String,
    },

    /// Shortest distances from a source vertex (Dijkstra)
    Dijkstra {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source vertex
        #[arg(long, short)]
        source: String,

        /// Report only the path to this vertex
        #[arg(long, short)]
        target: Option<String>,
    },

    /// Shortest path across a grid file (A*)
    Astar {
        /// Grid file: one row per line, `0`/`.` walkable, `1`/`#` blocked
        grid_file: PathBuf,

        /// Start cell as `row,col`
        #[arg(long, short)]
        start: Position,

        /// Goal cell as `row,col`
        #[arg(long, short)]
        goal: Position,
    },

    /// Minimum spanning tree or forest (Kruskal)
    Mst {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Topological order of a directed acyclic graph
    Topo {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Print the adjacency list of a graph document
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
}
