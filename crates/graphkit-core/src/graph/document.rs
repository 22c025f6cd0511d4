//! On-disk graph documents
//!
//! A document lists edges (and optionally isolated vertices) in JSON, TOML or
//! YAML. The format is picked from the file extension.
//!
//! ```toml
//! directed = false
//! vertices = ["lonely"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 2.5
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::GraphDefaults;
use crate::error::{GraphError, Result};
use crate::graph::types::{Graph, GraphKind, GraphOptions};
use crate::trace_time;

const SUPPORTED_EXTENSIONS: &str = "json, toml, yaml, yml";

/// Serialization format of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "" => Err(GraphError::unsupported(
                "graph file extension",
                "(none)",
                SUPPORTED_EXTENSIONS,
            )),
            other => Err(GraphError::unsupported(
                "graph file extension",
                other,
                SUPPORTED_EXTENSIONS,
            )),
        }
    }
}

/// Vertex label as written in a document; numbers are accepted and
/// converted to their decimal text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexLabel {
    Text(String),
    Number(i64),
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexLabel::Text(s) => f.write_str(s),
            VertexLabel::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One edge entry; a missing weight takes the configured default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: VertexLabel,
    pub to: VertexLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A graph as stored in a file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Overrides the configured default when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,

    /// Vertices to register before any edge, e.g. isolated ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<VertexLabel>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphDocument {
    /// Read and parse a document, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read graph from {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let document = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(document)
    }

    /// Effective graph kind: explicit override, then the document, then config
    pub fn kind(&self, defaults: &GraphDefaults, kind_override: Option<GraphKind>) -> GraphKind {
        match kind_override {
            Some(kind) => kind,
            None if self.directed.unwrap_or(defaults.directed) => GraphKind::Directed,
            None => GraphKind::Undirected,
        }
    }

    /// Build a labelled graph, registering listed vertices first and then
    /// every edge in document order
    pub fn into_graph(
        self,
        defaults: &GraphDefaults,
        kind_override: Option<GraphKind>,
    ) -> Result<Graph<String>> {
        let start = Instant::now();
        let options = GraphOptions {
            kind: self.kind(defaults, kind_override),
            default_weight: defaults.default_weight,
            reject_negative_weights: defaults.reject_negative_weights,
        };

        let mut graph = Graph::with_options(options);
        for vertex in self.vertices {
            graph.add_vertex(vertex.to_string());
        }
        for edge in self.edges {
            let from = edge.from.to_string();
            let to = edge.to.to_string();
            match edge.weight {
                Some(weight) => graph.add_weighted_edge(from, to, weight)?,
                None => graph.add_edge(from, to)?,
            }
        }

        trace_time!(
            start,
            "build_graph",
            vertices = graph.vertex_count(),
            edges = graph.edge_count()
        );
        Ok(graph)
    }
}
