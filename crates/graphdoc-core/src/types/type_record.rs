use serde::{Deserialize, Serialize};

use super::type_expr::TypeExpr;
use super::type_kind::TypeKind;

/// One field of a declaration: its name and raw type expression.
///
/// Enum values are stored as fields with an empty type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub name: String,
    pub type_expr: TypeExpr,
}

/// One parsed top-level declaration: name, kind, and ordered fields.
///
/// Scalar records always have an empty field list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldEntry>,
}

impl TypeRecord {
    /// Creates an empty record of the given kind.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: Vec::new(),
        }
    }

    /// Records a field. A repeated name replaces the earlier value while
    /// keeping its position in the declaration order.
    pub fn put_field(&mut self, name: impl Into<String>, type_expr: TypeExpr) {
        let name = name.into();
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == name) {
            existing.type_expr = type_expr;
        } else {
            self.fields.push(FieldEntry { name, type_expr });
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldEntry> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = TypeRecord::new("User", TypeKind::Object);
        assert_eq!(record.name, "User");
        assert_eq!(record.kind, TypeKind::Object);
        assert!(record.fields.is_empty());
    }

    #[test]
    fn put_field_preserves_order() {
        let mut record = TypeRecord::new("User", TypeKind::Object);
        record.put_field("id", TypeExpr::new("ID!"));
        record.put_field("name", TypeExpr::new("String"));
        record.put_field("email", TypeExpr::new("String!"));
        let names: Vec<&str> = record.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "email"]);
    }

    #[test]
    fn put_field_replaces_in_place() {
        let mut record = TypeRecord::new("User", TypeKind::Object);
        record.put_field("id", TypeExpr::new("ID"));
        record.put_field("name", TypeExpr::new("String"));
        record.put_field("id", TypeExpr::new("ID!"));
        assert_eq!(record.fields.len(), 2);
        assert_eq!(record.fields[0].name, "id");
        assert_eq!(record.fields[0].type_expr.as_str(), "ID!");
    }

    #[test]
    fn field_lookup() {
        let mut record = TypeRecord::new("User", TypeKind::Object);
        record.put_field("id", TypeExpr::new("ID!"));
        assert_eq!(record.field("id").unwrap().type_expr.as_str(), "ID!");
        assert!(record.field("missing").is_none());
    }

    #[test]
    fn enum_values_have_empty_expressions() {
        let mut record = TypeRecord::new("Color", TypeKind::Enum);
        record.put_field("RED", TypeExpr::default());
        record.put_field("GREEN", TypeExpr::default());
        assert!(record.fields.iter().all(|f| f.type_expr.is_empty()));
    }
}
