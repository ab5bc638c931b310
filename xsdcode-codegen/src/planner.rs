//! Constructor initialization planning.
//!
//! Pairs every generated property with its backing field and decides which
//! of those fields still need a `new T()` assignment in the constructor.

use crate::error::CodegenError;
use crate::options::GeneratorOptions;
use xsdcode_model::{TypeDeclaration, TypeKind};

/// Property paired with the field its getter returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyBinding {
    /// Property name.
    pub property: String,
    /// Backing field name.
    pub field: String,
}

/// Field that needs a constructor initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedInit {
    /// Field name.
    pub field: String,
    /// Type to construct.
    pub type_name: String,
}

/// Result of planning a single type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitPlan {
    /// Type the plan was computed for.
    pub type_name: String,
    /// Resolved property/field pairs, in property order.
    pub bindings: Vec<PropertyBinding>,
    /// Initializers to synthesize, in property order.
    pub inits: Vec<PlannedInit>,
    /// Properties whose getter is not in the canonical shape.
    pub skipped: Vec<String>,
}

impl InitPlan {
    /// Returns true if no initializer needs to be synthesized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inits.is_empty()
    }
}

/// Planner for constructor-based field initialization.
pub struct InitPlanner<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> InitPlanner<'a> {
    /// Creates a new planner.
    #[must_use]
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Computes the initialization plan for a type.
    ///
    /// A field is planned unless it has an inline initializer or every
    /// constructor already assigns it. Interfaces and enums never get
    /// initializers, and neither does a struct without a constructor.
    ///
    /// # Errors
    /// Returns `CodegenError::MissingBackingField` if a property returns a
    /// field the type does not declare.
    pub fn plan(&self, ty: &TypeDeclaration) -> Result<InitPlan, CodegenError> {
        let mut plan = InitPlan {
            type_name: ty.name.clone(),
            ..InitPlan::default()
        };
        let initializable = can_initialize(ty);
        if !initializable {
            tracing::debug!(
                "{}: {} without constructor body, no initializers planned",
                ty.name,
                ty.kind.keyword()
            );
        }

        for prop in ty.properties() {
            let Some(field_name) = prop.backing_field_name() else {
                tracing::debug!(
                    "{}.{}: getter is not a field return, skipping",
                    ty.name,
                    prop.name
                );
                plan.skipped.push(prop.name.clone());
                continue;
            };

            let Some(field) = ty.get_field(field_name) else {
                tracing::warn!(
                    "{}.{} returns undeclared field {}",
                    ty.name,
                    prop.name,
                    field_name
                );
                return Err(CodegenError::MissingBackingField {
                    type_name: ty.name.clone(),
                    property: prop.name.clone(),
                    field: field_name.to_string(),
                });
            };

            plan.bindings.push(PropertyBinding {
                property: prop.name.clone(),
                field: field.name.clone(),
            });

            if !initializable || !self.options.needs_initialization(&field.type_name) {
                continue;
            }
            if plan.inits.iter().any(|i| i.field == field.name) {
                continue;
            }
            if ty.is_field_initialized(&field.name)? {
                tracing::debug!("{}.{} already initialized", ty.name, field.name);
                continue;
            }

            tracing::debug!(
                "{}.{} needs initializer new {}()",
                ty.name,
                field.name,
                field.type_name
            );
            plan.inits.push(PlannedInit {
                field: field.name.clone(),
                type_name: field.type_name.clone(),
            });
        }

        Ok(plan)
    }
}

/// Returns true if constructor initializers can be merged into `ty`.
///
/// A struct only qualifies through a declared constructor, since a
/// parameterless struct constructor cannot be synthesized.
pub(crate) fn can_initialize(ty: &TypeDeclaration) -> bool {
    match ty.kind {
        TypeKind::Class => true,
        TypeKind::Struct => ty.constructors().next().is_some(),
        TypeKind::Interface | TypeKind::Enum => false,
    }
}
