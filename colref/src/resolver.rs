//! Column reference resolution
//!
//! Maps each column input field to the runtime type(s) of the columns it
//! names. Output shape mirrors input shape: a single name resolves to a
//! single type, a list of names to a list of types of the same length and
//! order, repeats included.
//!
//! Resolution is all-or-nothing. Fields are visited in input order and the
//! first failure aborts the call; inside a list the first missing name is
//! the one reported.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::columns::{ColumnLookup, ColumnType};
use crate::error::{ResolveError, ResolveResult};
use crate::reference::ReferenceValue;

/// Raw column inputs keyed by field name, in document order
pub type ColumnInputs = IndexMap<String, ReferenceValue>;

/// Resolved runtime types keyed by field name
pub type ResolvedTypes = IndexMap<String, ResolvedType>;

/// Resolved counterpart of a [`ReferenceValue`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResolvedType {
    Scalar(ColumnType),
    List(Vec<ColumnType>),
}

impl ResolvedType {
    pub fn as_scalar(&self) -> Option<ColumnType> {
        match self {
            ResolvedType::Scalar(ty) => Some(*ty),
            ResolvedType::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ColumnType]> {
        match self {
            ResolvedType::Scalar(_) => None,
            ResolvedType::List(types) => Some(types),
        }
    }
}

/// Resolve every field of `inputs` against `registry`.
///
/// On success the result has exactly one entry per input field, in the
/// same order. Any failing field fails the whole call.
pub fn resolve<L>(inputs: &ColumnInputs, registry: &L) -> ResolveResult<ResolvedTypes>
where
    L: ColumnLookup + ?Sized,
{
    let mut out = ResolvedTypes::with_capacity(inputs.len());
    for (field, value) in inputs.iter() {
        let resolved = resolve_field(field, value, registry)?;
        debug!(field = %field, resolved = ?resolved, "resolved column input");
        out.insert(field.clone(), resolved);
    }
    Ok(out)
}

/// Resolve a single field's reference value
pub fn resolve_field<L>(
    field: &str,
    value: &ReferenceValue,
    registry: &L,
) -> ResolveResult<ResolvedType>
where
    L: ColumnLookup + ?Sized,
{
    match value {
        ReferenceValue::Column(name) => {
            lookup_type(field, name, registry).map(ResolvedType::Scalar)
        }
        ReferenceValue::Columns(names) => names
            .iter()
            .map(|name| lookup_type(field, name, registry))
            .collect::<ResolveResult<Vec<_>>>()
            .map(ResolvedType::List),
        ReferenceValue::Other(shape) => Err(ResolveError::InvalidReferenceShape {
            field: field.to_string(),
            shape: shape.clone(),
        }),
    }
}

fn lookup_type<L>(field: &str, name: &str, registry: &L) -> ResolveResult<ColumnType>
where
    L: ColumnLookup + ?Sized,
{
    match registry.lookup(name) {
        Some(declaration) => {
            trace!(field, column = name, ty = %declaration.runtime_type, "column lookup");
            Ok(declaration.runtime_type)
        }
        None => Err(ResolveError::UndefinedColumnReference {
            field: field.to_string(),
            column: name.to_string(),
        }),
    }
}
