//! Statement and expression nodes of the code model.
//!
//! Only the shapes the queries inspect are modelled precisely. Everything
//! else is carried as an opaque [`Snippet`] so producers never lose nodes.

use crate::types::Snippet;

/// Statement inside a constructor, method or accessor body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `return;` or `return value;`.
    Return(Option<Expression>),
    /// `target = value;`.
    Assign {
        /// Left-hand side.
        target: Expression,
        /// Right-hand side.
        value: Expression,
    },
    /// Expression evaluated for its side effects.
    Expression(Expression),
    /// Any other statement, kept verbatim.
    Other(Snippet),
}

impl Statement {
    /// Creates `return <field>;`.
    #[must_use]
    pub fn return_field(field: impl Into<String>) -> Self {
        Self::Return(Some(Expression::field(field)))
    }

    /// Creates `<field> = value;`.
    #[must_use]
    pub fn assign_field(field: impl Into<String>, value: Expression) -> Self {
        Self::Assign {
            target: Expression::field(field),
            value,
        }
    }

    /// Creates an opaque statement.
    #[must_use]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(Snippet::new(text))
    }
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Direct reference to a field of the enclosing type.
    FieldReference(String),
    /// Reference to a property of the enclosing type.
    PropertyReference(String),
    /// Reference to a parameter or the implicit `value` of a setter.
    Argument(String),
    /// `this`.
    This,
    /// Literal value.
    Literal(Literal),
    /// `new Type(args)`.
    New {
        /// Constructed type, as source text.
        type_name: String,
        /// Constructor arguments.
        arguments: Vec<Expression>,
    },
    /// Any other expression, kept verbatim.
    Other(Snippet),
}

impl Expression {
    /// Creates a field reference.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::FieldReference(name.into())
    }

    /// Creates `new Type()`.
    #[must_use]
    pub fn new_object(type_name: impl Into<String>) -> Self {
        Self::New {
            type_name: type_name.into(),
            arguments: Vec::new(),
        }
    }

    /// Creates an opaque expression.
    #[must_use]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(Snippet::new(text))
    }

    /// Returns the referenced field name if this is a field reference.
    #[must_use]
    pub fn as_field_reference(&self) -> Option<&str> {
        match self {
            Self::FieldReference(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

/// Literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// `null`.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// String literal (unescaped content).
    Str(String),
}
