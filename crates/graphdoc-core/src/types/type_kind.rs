use serde::{Deserialize, Serialize};

/// The declaration kind of a top-level SDL definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// An object type (`type Name { ... }`).
    Object,
    /// An input type (`input Name { ... }`).
    Input,
    /// An enum (`enum Name { ... }`).
    Enum,
    /// A scalar declaration (`scalar Name`) -- no body.
    Scalar,
}

impl TypeKind {
    /// Maps an SDL declaration keyword to its kind.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "type" => Some(Self::Object),
            "input" => Some(Self::Input),
            "enum" => Some(Self::Enum),
            "scalar" => Some(Self::Scalar),
            _ => None,
        }
    }

    /// The SDL keyword that introduces this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Object => "type",
            Self::Input => "input",
            Self::Enum => "enum",
            Self::Scalar => "scalar",
        }
    }

    /// The "Datatype class" label used in rendered documents.
    ///
    /// Scalars keep the lowercase keyword; the compound kinds are
    /// capitalized.
    pub fn class_label(&self) -> &'static str {
        match self {
            Self::Object => "Type",
            Self::Input => "Input",
            Self::Enum => "Enum",
            Self::Scalar => "scalar",
        }
    }

    /// Whether declarations of this kind carry a `{ ... }` body.
    pub fn has_body(&self) -> bool {
        !matches!(self, Self::Scalar)
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
