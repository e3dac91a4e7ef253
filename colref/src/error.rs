//! Error types for reference resolution and document loading

use std::path::PathBuf;
use thiserror::Error;

use crate::reference::ValueShape;

/// Why a column input field could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("column input '{field}' references undefined column '{column}'")]
    UndefinedColumnReference { field: String, column: String },

    #[error(
        "column input '{field}' has invalid value: expected a column name or a list of column names, found {shape}"
    )]
    InvalidReferenceShape { field: String, shape: ValueShape },
}

impl ResolveError {
    /// The input field that failed to resolve
    pub fn field(&self) -> &str {
        match self {
            ResolveError::UndefinedColumnReference { field, .. }
            | ResolveError::InvalidReferenceShape { field, .. } => field,
        }
    }
}

/// Resolution failure attributed to the consumer whose inputs were checked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{consumer}: {error}")]
pub struct ConsumerError {
    pub consumer: String,
    pub error: ResolveError,
}

/// Errors raised while loading and validating a configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("column '{0}' is declared more than once")]
    DuplicateColumn(String),

    #[error("consumer '{0}' is declared more than once")]
    DuplicateConsumer(String),

    #[error("{} column reference error(s): {}", .0.len(), join_errors(.0))]
    Resolution(Vec<ConsumerError>),
}

fn join_errors(errors: &[ConsumerError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ResolveResult<T> = Result<T, ResolveError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
