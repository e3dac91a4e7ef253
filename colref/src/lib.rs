//! colref - column reference resolution for configuration documents
//!
//! Configuration authors point input fields at previously declared columns,
//! either by a single name or by a list of names. This crate resolves those
//! references to the columns' runtime types:
//!
//! ```
//! use colref::{
//!     resolve, ColumnDeclaration, ColumnInputs, ColumnRegistry, ColumnType, ResolvedType,
//! };
//!
//! let registry: ColumnRegistry = vec![ColumnDeclaration::new("rfInt", ColumnType::IntColumn)]
//!     .into_iter()
//!     .collect();
//!
//! let mut inputs = ColumnInputs::new();
//! inputs.insert("in".to_string(), vec!["rfInt", "rfInt"].into());
//!
//! let resolved = resolve(&inputs, &registry).unwrap();
//! assert_eq!(
//!     resolved["in"],
//!     ResolvedType::List(vec![ColumnType::IntColumn, ColumnType::IntColumn])
//! );
//! ```

pub mod columns;
pub mod config;
pub mod error;
pub mod reference;
pub mod resolver;

pub use columns::{ColumnDeclaration, ColumnLookup, ColumnRegistry, ColumnType};
pub use error::{ConfigError, ConsumerError, ResolveError};
pub use reference::{ReferenceValue, ValueShape};
pub use resolver::{resolve, resolve_field, ColumnInputs, ResolvedType, ResolvedTypes};
