use indexmap::IndexMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use validator::Validate;

use super::types::{ColumnConfig, ConfigDocument};
use crate::columns::{ColumnDeclaration, ColumnRegistry};
use crate::error::{ConfigError, ConfigResult, ConsumerError};
use crate::resolver::{resolve, ResolvedTypes};

/// A document whose column references all resolved
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub registry: ColumnRegistry,
    /// Resolved input types per consumer, in document order
    pub consumers: IndexMap<String, ResolvedTypes>,
}

/// Parse a configuration document from YAML or JSON text
pub fn load_str(source: &str) -> ConfigResult<ConfigDocument> {
    let document: ConfigDocument = serde_yaml::from_str(source)?;
    document.validate()?;
    Ok(document)
}

/// Parse a configuration document from a file
pub fn load_file(path: impl AsRef<Path>) -> ConfigResult<ConfigDocument> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded configuration");
    load_str(&source)
}

/// Build the column registry, rejecting duplicate names
pub fn build_registry(columns: &[ColumnConfig]) -> ConfigResult<ColumnRegistry> {
    let mut registry = ColumnRegistry::new();
    for column in columns {
        if registry.insert(ColumnDeclaration::from(column)).is_some() {
            return Err(ConfigError::DuplicateColumn(column.name.clone()));
        }
    }
    Ok(registry)
}

/// Build the registry and resolve every consumer's column inputs.
///
/// Each consumer is resolved on its own; failures from all consumers are
/// collected into a single [`ConfigError::Resolution`].
pub fn validate_document(document: &ConfigDocument) -> ConfigResult<ValidatedConfig> {
    let registry = build_registry(&document.columns)?;

    let mut seen = HashSet::new();
    let mut consumers = IndexMap::new();
    let mut errors = Vec::new();

    for consumer in &document.consumers {
        if !seen.insert(consumer.name.as_str()) {
            return Err(ConfigError::DuplicateConsumer(consumer.name.clone()));
        }

        match resolve(&consumer.column_inputs(), &registry) {
            Ok(types) => {
                debug!(consumer = %consumer.name, fields = types.len(), "resolved consumer inputs");
                consumers.insert(consumer.name.clone(), types);
            }
            Err(error) => errors.push(ConsumerError {
                consumer: consumer.name.clone(),
                error,
            }),
        }
    }

    if !errors.is_empty() {
        return Err(ConfigError::Resolution(errors));
    }

    info!(
        columns = registry.len(),
        consumers = consumers.len(),
        "configuration validated"
    );
    Ok(ValidatedConfig {
        registry,
        consumers,
    })
}
