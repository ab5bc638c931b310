//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use xsdcode::prelude::*;
//! ```

// Model types
pub use xsdcode_model::error::{ModelError, QueryError};
pub use xsdcode_model::filter::{MemberKind, MembersOf};
pub use xsdcode_model::statements::{Expression, Literal, Statement};
pub use xsdcode_model::types::{
    Constructor, Field, Member, Method, Parameter, Property, Snippet, TypeDeclaration, TypeKind,
};
pub use xsdcode_model::validation::validate_type;

// Codegen types
pub use xsdcode_codegen::planner::{InitPlan, InitPlanner, PlannedInit, PropertyBinding};
pub use xsdcode_codegen::{CodegenError, Generator, GeneratorOptions, apply_plan, generate};
