//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, parse errors)
//! - 2: Usage error (bad flags/args, invalid input, missing vertex)
//! - 3: Data error (cycle in a graph that must be acyclic)

mod macros;

use thiserror::Error;

/// Exit codes for the graphkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or malformed input (2)
    Usage = 2,
    /// Data error - cycle detected (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building graphs or running algorithms
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidInput { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("cycle detected at vertex {vertex}")]
    CycleDetected { vertex: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for malformed caller-supplied data
    pub fn invalid_input(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidInput {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        GraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a start/goal/source vertex absent from the graph
    pub fn missing_vertex(role: &str, vertex: impl std::fmt::Display) -> Self {
        GraphError::InvalidInput {
            context: format!("{} vertex", role),
            value: format!("{} (not in graph)", vertex),
        }
    }

    pub fn cycle_detected(vertex: impl std::fmt::Display) -> Self {
        GraphError::CycleDetected {
            vertex: vertex.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_)
            | GraphError::InvalidInput { .. }
            | GraphError::Unsupported { .. } => ExitCode::Usage,

            GraphError::CycleDetected { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Yaml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidInput { .. } => "invalid_input",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::CycleDetected { .. } => "cycle_detected",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::CycleDetected { vertex } = self {
            error_obj["vertex"] = serde_json::json!(vertex);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for graphkit operations
pub type Result<T> = std::result::Result<T, GraphError>;
