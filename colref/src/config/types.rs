use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::columns::{ColumnDeclaration, ColumnType};
use crate::reference::ReferenceValue;
use crate::resolver::ColumnInputs;

/// Top-level configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ConfigDocument {
    /// Declared data columns
    #[serde(default)]
    #[validate(nested)]
    pub columns: Vec<ColumnConfig>,
    /// Pipeline steps whose inputs reference columns
    #[serde(default)]
    #[validate(nested)]
    pub consumers: Vec<ConsumerConfig>,
}

/// A raw column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    #[validate(length(min = 1, message = "column name must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl From<&ColumnConfig> for ColumnDeclaration {
    fn from(config: &ColumnConfig) -> Self {
        ColumnDeclaration::new(config.name.clone(), config.column_type)
    }
}

/// A step consuming columns, e.g. an aggregate or a transformer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ConsumerConfig {
    #[validate(length(min = 1, message = "consumer name must not be empty"))]
    pub name: String,
    /// Column input fields, kept untyped until resolution
    #[serde(default)]
    pub inputs: IndexMap<String, serde_yaml::Value>,
}

impl ConsumerConfig {
    /// Classify the raw input values into references
    pub fn column_inputs(&self) -> ColumnInputs {
        self.inputs
            .iter()
            .map(|(field, value)| (field.clone(), ReferenceValue::from_yaml(value)))
            .collect()
    }
}
