//! Configuration documents
//!
//! Loads a YAML (or JSON) document declaring columns and the consumers that
//! reference them, builds the column registry and resolves each consumer's
//! column inputs.

pub mod loader;
pub mod types;

pub use loader::{build_registry, load_file, load_str, validate_document, ValidatedConfig};
pub use types::{ColumnConfig, ConfigDocument, ConsumerConfig};
