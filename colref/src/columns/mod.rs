//! Column declarations and the registry they live in
//!
//! Declarations are produced by the configuration loader once raw column
//! definitions have been validated. The registry is read-only from the
//! resolver's point of view.

pub mod registry;
pub mod types;

pub use registry::{ColumnLookup, ColumnRegistry};
pub use types::{ColumnDeclaration, ColumnType, UnknownColumnType};
