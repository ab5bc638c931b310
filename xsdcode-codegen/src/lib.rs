//! # xsdcode Codegen
//!
//! C# code generation from the xsdcode code model.
//!
//! This crate provides:
//! - Backing field pairing and constructor initialization planning
//! - Merging of planned initializers into existing constructors
//! - C# source rendering
//! - Generator options

pub mod apply;
pub mod csharp;
pub mod error;
pub mod generator;
pub mod options;
pub mod planner;

pub use apply::apply_plan;
pub use error::CodegenError;
pub use generator::Generator;
pub use options::GeneratorOptions;
pub use planner::{InitPlan, InitPlanner, PlannedInit, PropertyBinding};

use xsdcode_model::TypeDeclaration;

/// Completes constructor initialization of a type and renders it as C#.
///
/// # Arguments
/// * `ty` - Type to merge and render
/// * `options` - Generator options
///
/// # Returns
/// Generated C# source as a string.
///
/// # Errors
/// Returns `CodegenError` if validation or planning fails.
pub fn generate(
    ty: &mut TypeDeclaration,
    options: &GeneratorOptions,
) -> Result<String, CodegenError> {
    Generator::new(options).generate(ty)
}
