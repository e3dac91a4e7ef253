use indexmap::IndexMap;

use super::types::ColumnDeclaration;

/// Point lookup of column declarations by name.
///
/// This is all the resolver needs from a registry, so callers can back it
/// with their own schema representation.
pub trait ColumnLookup {
    /// Exact, case-sensitive lookup. `None` means the column is not declared.
    fn lookup(&self, name: &str) -> Option<&ColumnDeclaration>;
}

/// Column declarations keyed by name, in declaration order.
///
/// The registry does not check its contents; the loader that builds it is
/// responsible for rejecting duplicate names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnRegistry {
    columns: IndexMap<String, ColumnDeclaration>,
}

impl ColumnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, returning the one it replaced, if any
    pub fn insert(&mut self, declaration: ColumnDeclaration) -> Option<ColumnDeclaration> {
        self.columns.insert(declaration.name.clone(), declaration)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDeclaration> {
        self.columns.values()
    }
}

impl ColumnLookup for ColumnRegistry {
    fn lookup(&self, name: &str) -> Option<&ColumnDeclaration> {
        self.columns.get(name)
    }
}

impl FromIterator<ColumnDeclaration> for ColumnRegistry {
    fn from_iter<I: IntoIterator<Item = ColumnDeclaration>>(iter: I) -> Self {
        let mut registry = ColumnRegistry::new();
        for declaration in iter {
            registry.insert(declaration);
        }
        registry
    }
}
