//! Model types for parsed SDL declarations.

mod type_expr;
mod type_kind;
mod type_record;

pub use type_expr::TypeExpr;
pub use type_kind::TypeKind;
pub use type_record::{FieldEntry, TypeRecord};
