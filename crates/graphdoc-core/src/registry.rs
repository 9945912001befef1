use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::TypeRecord;

/// Scalar names every document starts with.
pub const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Every declaration parsed from one SDL document, in order of appearance,
/// plus the set of names that resolve to scalars.
///
/// The scalar set is preloaded with [`BUILTIN_SCALARS`] and grows with each
/// `scalar` declaration. It decides whether a referenced type renders as
/// plain code or as a cross-link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRegistry {
    records: Vec<TypeRecord>,
    scalars: HashSet<String>,
}

impl SchemaRegistry {
    /// Creates an empty registry with the built-in scalar set.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            scalars: BUILTIN_SCALARS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Inserts a completed record. A repeated name replaces the earlier
    /// record while keeping its position.
    pub fn insert(&mut self, record: TypeRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.name == record.name) {
            *existing = record;
        } else {
            self.records.push(record);
        }
    }

    /// Adds a declared scalar name to the scalar set.
    pub fn register_scalar(&mut self, name: impl Into<String>) {
        self.scalars.insert(name.into());
    }

    /// Whether an identifier names a scalar (built-in or declared).
    pub fn is_scalar(&self, ident: &str) -> bool {
        self.scalars.contains(ident)
    }

    /// Looks up a record by name.
    pub fn get(&self, name: &str) -> Option<&TypeRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Removes and returns a record by name, keeping the order of the rest.
    pub fn take(&mut self, name: &str) -> Option<TypeRecord> {
        let pos = self.records.iter().position(|r| r.name == name)?;
        Some(self.records.remove(pos))
    }

    /// All records in declaration order.
    pub fn records(&self) -> &[TypeRecord] {
        &self.records
    }

    /// The full scalar set.
    pub fn scalars(&self) -> &HashSet<String> {
        &self.scalars
    }

    /// Number of records in the registry.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
