//! Raw column references as written by configuration authors
//!
//! The document loader hands over untyped values; they are classified here
//! into a closed set of shapes so the resolver can match on them
//! exhaustively.

use std::fmt;

/// The value an author wrote for one column input field
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceValue {
    /// A single column name
    Column(String),
    /// An ordered list of column names; repeats are meaningful
    Columns(Vec<String>),
    /// Anything else. Never resolvable.
    Other(ValueShape),
}

/// Structural description of a value that is not a valid reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueShape {
    Null,
    Boolean,
    Number,
    Mapping,
    Tagged,
    /// A list appearing as an element of another list
    List,
    /// A list whose element at `position` is not text
    ListElement {
        position: usize,
        element: Box<ValueShape>,
    },
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueShape::Null => write!(f, "null"),
            ValueShape::Boolean => write!(f, "boolean"),
            ValueShape::Number => write!(f, "number"),
            ValueShape::Mapping => write!(f, "mapping"),
            ValueShape::Tagged => write!(f, "tagged value"),
            ValueShape::List => write!(f, "list"),
            ValueShape::ListElement { position, element } => {
                write!(f, "list with {} at position {}", element, position)
            }
        }
    }
}

impl ReferenceValue {
    /// Classify a value decoded by `serde_yaml`
    pub fn from_yaml(value: &serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Sequence(items) => collect_names(items.iter().map(yaml_text)),
            other => match yaml_text(other) {
                Ok(name) => ReferenceValue::Column(name.to_string()),
                Err(shape) => ReferenceValue::Other(shape),
            },
        }
    }

    /// Classify a value decoded by `serde_json`
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Array(items) => collect_names(items.iter().map(json_text)),
            other => match json_text(other) {
                Ok(name) => ReferenceValue::Column(name.to_string()),
                Err(shape) => ReferenceValue::Other(shape),
            },
        }
    }

    pub fn is_valid_shape(&self) -> bool {
        !matches!(self, ReferenceValue::Other(_))
    }
}

impl From<&str> for ReferenceValue {
    fn from(name: &str) -> Self {
        ReferenceValue::Column(name.to_string())
    }
}

impl From<Vec<&str>> for ReferenceValue {
    fn from(names: Vec<&str>) -> Self {
        ReferenceValue::Columns(names.into_iter().map(str::to_string).collect())
    }
}

fn collect_names<'a, I>(items: I) -> ReferenceValue
where
    I: Iterator<Item = Result<&'a str, ValueShape>>,
{
    let mut names = Vec::new();
    for (position, item) in items.enumerate() {
        match item {
            Ok(name) => names.push(name.to_string()),
            Err(element) => {
                return ReferenceValue::Other(ValueShape::ListElement {
                    position,
                    element: Box::new(element),
                })
            }
        }
    }
    ReferenceValue::Columns(names)
}

/// Column name, or the shape of whatever was written instead
fn yaml_text(value: &serde_yaml::Value) -> Result<&str, ValueShape> {
    use serde_yaml::Value;

    match value {
        Value::String(name) => Ok(name.as_str()),
        Value::Null => Err(ValueShape::Null),
        Value::Bool(_) => Err(ValueShape::Boolean),
        Value::Number(_) => Err(ValueShape::Number),
        Value::Mapping(_) => Err(ValueShape::Mapping),
        Value::Tagged(_) => Err(ValueShape::Tagged),
        Value::Sequence(_) => Err(ValueShape::List),
    }
}

fn json_text(value: &serde_json::Value) -> Result<&str, ValueShape> {
    use serde_json::Value;

    match value {
        Value::String(name) => Ok(name.as_str()),
        Value::Null => Err(ValueShape::Null),
        Value::Bool(_) => Err(ValueShape::Boolean),
        Value::Number(_) => Err(ValueShape::Number),
        Value::Object(_) => Err(ValueShape::Mapping),
        Value::Array(_) => Err(ValueShape::List),
    }
}
