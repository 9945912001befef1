use serde::{Deserialize, Serialize};

/// A raw type expression as written in the source, e.g. `String`,
/// `String!`, `[String!]!`.
///
/// The expression is kept verbatim; list (`[` `]`) and non-null (`!`)
/// wrappers are only interpreted when extracting the bare identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeExpr(String);

impl TypeExpr {
    /// Wraps a raw expression string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The expression exactly as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty expression (enum values carry one).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The referenced type identifier with all `!`, `[`, `]` wrapper
    /// punctuation removed.
    pub fn base_ident(&self) -> String {
        self.0
            .chars()
            .filter(|c| !matches!(c, '!' | '[' | ']'))
            .collect()
    }
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeExpr {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
