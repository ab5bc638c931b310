//! Model validation utilities.
//!
//! Queries assume a well-formed model. These checks let the generator report
//! a malformed declaration as a diagnostic before any query runs.

use crate::error::ModelError;
use crate::types::{Member, TypeDeclaration, TypeKind};
use std::collections::HashSet;

/// Validates a type declaration for consistency.
///
/// # Arguments
/// * `ty` - The type declaration to validate
///
/// # Errors
/// Returns `ModelError` if the type or a named member has an empty name, if
/// two fields or two properties share a name, or if the type kind cannot
/// declare one of its members.
pub fn validate_type(ty: &TypeDeclaration) -> Result<(), ModelError> {
    if ty.name.is_empty() {
        return Err(ModelError::empty_name("type", "<anonymous>"));
    }
    validate_member_kinds(ty)?;
    validate_member_names(ty)?;
    validate_unique_fields(ty)?;
    validate_unique_properties(ty)?;
    Ok(())
}

/// Rejects members the type kind cannot hold.
///
/// Interfaces carry no instance state, so no fields or constructors. Enum
/// values are opaque members and nothing else is allowed.
fn validate_member_kinds(ty: &TypeDeclaration) -> Result<(), ModelError> {
    for member in &ty.members {
        let allowed = match ty.kind {
            TypeKind::Class | TypeKind::Struct => true,
            TypeKind::Interface => !member.is_field() && !member.is_constructor(),
            TypeKind::Enum => matches!(member, Member::Other(_)),
        };
        if !allowed {
            return Err(ModelError::unsupported(
                member.kind_name(),
                ty.kind.keyword(),
                &ty.name,
            ));
        }
    }
    Ok(())
}

/// Rejects named members whose name is empty.
fn validate_member_names(ty: &TypeDeclaration) -> Result<(), ModelError> {
    for member in &ty.members {
        if member.name().is_some_and(str::is_empty) {
            return Err(ModelError::empty_name(member.kind_name(), &ty.name));
        }
    }
    Ok(())
}

/// Validates that field names are unique within the type.
fn validate_unique_fields(ty: &TypeDeclaration) -> Result<(), ModelError> {
    let mut seen = HashSet::new();
    for field in ty.fields() {
        if !seen.insert(field.name.as_str()) {
            return Err(ModelError::duplicate("field", &field.name, &ty.name));
        }
    }
    Ok(())
}

/// Validates that property names are unique within the type.
fn validate_unique_properties(ty: &TypeDeclaration) -> Result<(), ModelError> {
    let mut seen = HashSet::new();
    for prop in ty.properties() {
        if !seen.insert(prop.name.as_str()) {
            return Err(ModelError::duplicate("property", &prop.name, &ty.name));
        }
    }
    Ok(())
}
