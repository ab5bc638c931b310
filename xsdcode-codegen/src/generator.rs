//! Generation pipeline: validate, plan, merge, render.

use crate::apply::apply_plan;
use crate::csharp::TypeRenderer;
use crate::error::CodegenError;
use crate::options::GeneratorOptions;
use crate::planner::InitPlanner;
use xsdcode_model::{TypeDeclaration, validate_type};

/// Generator for C# source from code model types.
pub struct Generator<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Completes constructor initialization of `ty` and renders it.
    ///
    /// # Errors
    /// Returns `CodegenError` if the type is malformed or a property returns
    /// an undeclared field. `ty` is left unchanged on error.
    pub fn generate(&self, ty: &mut TypeDeclaration) -> Result<String, CodegenError> {
        validate_type(ty)?;

        let plan = InitPlanner::new(self.options).plan(ty)?;
        if !plan.skipped.is_empty() {
            tracing::debug!(
                "{}: {} propert(ies) without a backing field",
                ty.name,
                plan.skipped.len()
            );
        }
        apply_plan(ty, &plan)?;

        Ok(TypeRenderer::new(self.options).render(ty))
    }

    /// Generates every type, separated by a blank line.
    ///
    /// # Errors
    /// Returns the first `CodegenError`; types before it have been merged.
    pub fn generate_all(&self, types: &mut [TypeDeclaration]) -> Result<String, CodegenError> {
        let mut output = String::new();
        for (i, ty) in types.iter_mut().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&self.generate(ty)?);
        }
        Ok(output)
    }
}
