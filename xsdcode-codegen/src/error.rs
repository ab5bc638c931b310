//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Model validation error.
    #[error("model error: {0}")]
    Model(#[from] xsdcode_model::ModelError),

    /// Query contract violation.
    #[error("query error: {0}")]
    Query(#[from] xsdcode_model::QueryError),

    /// A property returns a field the type does not declare.
    #[error("property '{property}' returns undeclared field '{field}' in type '{type_name}'")]
    MissingBackingField {
        /// Enclosing type name.
        type_name: String,
        /// Property name.
        property: String,
        /// Field name returned by the getter.
        field: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xsdcode_model::{ModelError, QueryError};

    #[test]
    fn test_codegen_error_display() {
        let err = CodegenError::MissingBackingField {
            type_name: "Order".to_string(),
            property: "Items".to_string(),
            field: "_items".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "property 'Items' returns undeclared field '_items' in type 'Order'"
        );
        assert_eq!(
            CodegenError::generation("boom").to_string(),
            "generation error: boom"
        );
    }

    #[test]
    fn test_codegen_error_from() {
        let err: CodegenError = QueryError::EmptyFieldName.into();
        assert!(matches!(err, CodegenError::Query(_)));

        let err: CodegenError = ModelError::duplicate("field", "_a", "T").into();
        assert!(matches!(err, CodegenError::Model(_)));
    }
}
