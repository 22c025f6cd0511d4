//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Top-level graphkit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphkitConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Log level used when no CLI flag is given (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Defaults applied when loading graph documents
    #[serde(default)]
    pub graph: GraphDefaults,
}

impl Default for GraphkitConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            log_level: None,
            graph: GraphDefaults::default(),
        }
    }
}

/// Defaults for graphs loaded from documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDefaults {
    /// Treat edges as directed unless the document says otherwise
    #[serde(default = "default_directed")]
    pub directed: bool,

    /// Weight for edges that omit one
    #[serde(default = "default_weight")]
    pub default_weight: f64,

    /// Refuse negative edge weights while loading
    #[serde(default = "default_reject_negative_weights")]
    pub reject_negative_weights: bool,
}

impl Default for GraphDefaults {
    fn default() -> Self {
        Self {
            directed: default_directed(),
            default_weight: default_weight(),
            reject_negative_weights: default_reject_negative_weights(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_directed() -> bool {
    true
}

fn default_weight() -> f64 {
    1.0
}

fn default_reject_negative_weights() -> bool {
    true
}
