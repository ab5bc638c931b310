//! Error types for model queries and validation.

use thiserror::Error;

/// Error type for query contract violations.
///
/// A query that simply finds nothing returns `None` or `false`; this type is
/// reserved for malformed arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A field name argument was empty.
    #[error("field name must not be empty")]
    EmptyFieldName,
}

/// Error type for model validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A declaration has an empty name.
    #[error("{kind} declared in '{type_name}' has an empty name")]
    EmptyName {
        /// Kind of declaration (type, field, property, method).
        kind: String,
        /// Enclosing type name.
        type_name: String,
    },

    /// Two members of the same kind share a name.
    #[error("duplicate {kind} '{name}' in type '{type_name}'")]
    DuplicateMember {
        /// Kind of member.
        kind: String,
        /// Member name.
        name: String,
        /// Enclosing type name.
        type_name: String,
    },

    /// A member kind the enclosing type kind cannot declare.
    #[error("{type_kind} '{type_name}' cannot declare a {kind}")]
    UnsupportedMember {
        /// Kind of member.
        kind: String,
        /// Kind of the enclosing type.
        type_kind: String,
        /// Enclosing type name.
        type_name: String,
    },
}

impl ModelError {
    /// Creates an empty name error.
    pub fn empty_name(kind: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::EmptyName {
            kind: kind.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates a duplicate member error.
    pub fn duplicate(
        kind: impl Into<String>,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::DuplicateMember {
            kind: kind.into(),
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates an unsupported member error.
    pub fn unsupported(
        kind: impl Into<String>,
        type_kind: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnsupportedMember {
            kind: kind.into(),
            type_kind: type_kind.into(),
            type_name: type_name.into(),
        }
    }
}
