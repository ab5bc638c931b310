//! # xsdcode Model
//!
//! In-memory code model and structural queries.
//!
//! This crate provides:
//! - Declaration, statement and expression nodes for generated source
//! - Typed filtering of a type's members by member kind
//! - Backing field resolution for generated properties
//! - Detection of field assignments in constructor bodies
//! - Model validation

pub mod error;
pub mod filter;
pub mod query;
pub mod statements;
pub mod types;
pub mod validation;

pub use error::{ModelError, QueryError};
pub use filter::{MemberKind, MembersOf};
pub use statements::{Expression, Literal, Statement};
pub use types::{
    Constructor, Field, Member, Method, Parameter, Property, Snippet, TypeDeclaration, TypeKind,
};
pub use validation::validate_type;
