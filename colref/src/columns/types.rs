//! Runtime column types and declarations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Runtime type tag carried by a declared column.
///
/// Tags are mutually exclusive. A list column is still a single tag here;
/// nothing at this layer composes types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnType {
    IntColumn,
    FloatColumn,
    StringColumn,
    IntListColumn,
    FloatListColumn,
    StringListColumn,
}

impl ColumnType {
    pub const ALL: [ColumnType; 6] = [
        ColumnType::IntColumn,
        ColumnType::FloatColumn,
        ColumnType::StringColumn,
        ColumnType::IntListColumn,
        ColumnType::FloatListColumn,
        ColumnType::StringListColumn,
    ];

    /// Tag as written in configuration documents (e.g. `INT_COLUMN`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::IntColumn => "INT_COLUMN",
            ColumnType::FloatColumn => "FLOAT_COLUMN",
            ColumnType::StringColumn => "STRING_COLUMN",
            ColumnType::IntListColumn => "INT_LIST_COLUMN",
            ColumnType::FloatListColumn => "FLOAT_LIST_COLUMN",
            ColumnType::StringListColumn => "STRING_LIST_COLUMN",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown column type '{0}'")]
pub struct UnknownColumnType(pub String);

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownColumnType(s.to_string()))
    }
}

/// A previously declared data column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDeclaration {
    /// Unique column name, matched exactly (case-sensitive)
    pub name: String,
    /// Declared runtime type
    #[serde(rename = "type")]
    pub runtime_type: ColumnType,
}

impl ColumnDeclaration {
    pub fn new(name: impl Into<String>, runtime_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            runtime_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        for ty in ColumnType::ALL {
            assert_eq!(ty.to_string().parse::<ColumnType>(), Ok(ty));
        }
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(
            "int_column".parse::<ColumnType>(),
            Err(UnknownColumnType("int_column".to_string()))
        );
        assert!("INT".parse::<ColumnType>().is_err());
    }

    #[test]
    fn serde_uses_document_spelling() {
        let json = serde_json::to_string(&ColumnType::StringListColumn).unwrap();
        assert_eq!(json, "\"STRING_LIST_COLUMN\"");

        let decl: ColumnDeclaration =
            serde_yaml::from_str("name: rfFloat\ntype: FLOAT_COLUMN").unwrap();
        assert_eq!(decl, ColumnDeclaration::new("rfFloat", ColumnType::FloatColumn));
    }
}
