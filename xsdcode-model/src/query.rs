//! Structural queries over the code model.
//!
//! Each query is a shape match on a closed set of variants. A shape that
//! does not match is an expected outcome and yields `None` or `false`.

use crate::error::QueryError;
use crate::statements::{Expression, Statement};
use crate::types::{Constructor, Field, Property, TypeDeclaration};

impl Property {
    /// Returns the name of the field this property's getter returns.
    ///
    /// Generated properties have the getter body `return <field>;`. Only the
    /// first getter statement is inspected; trailing statements are ignored.
    /// Returns `None` for an empty getter, a first statement that is not a
    /// `return`, a bare `return;`, or a returned expression that is not a
    /// direct field reference.
    #[must_use]
    pub fn backing_field_name(&self) -> Option<&str> {
        match self.getter.first()? {
            Statement::Return(Some(Expression::FieldReference(name))) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Resolves the backing field declaration within `owner`.
    #[must_use]
    pub fn backing_field<'a>(&self, owner: &'a TypeDeclaration) -> Option<&'a Field> {
        self.backing_field_name()
            .and_then(|name| owner.get_field(name))
    }
}

impl Constructor {
    /// Returns true if the body contains `<field_name> = ...;` as a top-level
    /// statement.
    ///
    /// # Errors
    /// Returns [`QueryError::EmptyFieldName`] if `field_name` is empty.
    pub fn assigns_field(&self, field_name: &str) -> Result<bool, QueryError> {
        if field_name.is_empty() {
            return Err(QueryError::EmptyFieldName);
        }

        Ok(self.body.iter().any(|statement| match statement {
            Statement::Assign { target, .. } => target.as_field_reference() == Some(field_name),
            _ => false,
        }))
    }
}

impl TypeDeclaration {
    /// Returns true if the field is initialized on every construction path:
    /// either inline, or by each declared constructor.
    ///
    /// A type without constructors only counts inline initializers. A field
    /// assigned by some constructors but not others is not initialized.
    ///
    /// # Errors
    /// Returns [`QueryError::EmptyFieldName`] if `field_name` is empty.
    pub fn is_field_initialized(&self, field_name: &str) -> Result<bool, QueryError> {
        if field_name.is_empty() {
            return Err(QueryError::EmptyFieldName);
        }

        if self
            .get_field(field_name)
            .is_some_and(|f| f.initializer.is_some())
        {
            return Ok(true);
        }

        let mut ctors = self.constructors().peekable();
        if ctors.peek().is_none() {
            return Ok(false);
        }
        for ctor in ctors {
            if !ctor.assigns_field(field_name)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
