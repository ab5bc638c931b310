//! # xsdcode
//!
//! Structural queries over generated code models, and the C# generator
//! built on them.
//!
//! ## Features
//!
//! - **Closed code model** - Types, members, statements and expressions as
//!   tagged variants, with opaque fallbacks for everything else
//! - **Typed member filtering** - Lazy, order-preserving selection by kind
//! - **Backing field resolution** - Pair generated properties with storage
//! - **Constructor assignment checks** - Avoid double initialization
//! - **Initializer merging and rendering** - Plan, merge and emit C#
//!
//! ## Quick Start
//!
//! ```ignore
//! use xsdcode::prelude::*;
//!
//! let mut ty = TypeDeclaration::new("Order");
//! ty.add_member(Field::new("_lines", "List<Line>"));
//! ty.add_member(Property::auto("Lines", "List<Line>", "_lines"));
//!
//! let code = generate(&mut ty, &GeneratorOptions::default())?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Code model, member filter, queries and validation
//! - [`codegen`] - Initialization planning, merging and C# rendering

pub mod prelude;

/// Code model and structural queries.
pub mod model {
    pub use xsdcode_model::*;
}

/// C# generation from the code model.
pub mod codegen {
    pub use xsdcode_codegen::*;
}

// Re-export commonly used items at the crate root
pub use xsdcode_codegen::{CodegenError, Generator, GeneratorOptions, generate};
pub use xsdcode_model::{ModelError, QueryError, TypeDeclaration};
