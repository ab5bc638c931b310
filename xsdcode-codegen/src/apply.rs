//! Merging planned initializers into a type.

use crate::error::CodegenError;
use crate::planner::{InitPlan, can_initialize};
use xsdcode_model::{Constructor, Expression, Member, Statement, TypeDeclaration, TypeKind};

/// Inserts the planned initializers into every constructor of `ty`.
///
/// Initializers go at the start of each body, in plan order. A constructor
/// that already assigns a planned field is left alone for that field. When
/// the type is a class with no constructor, a parameterless one is inserted
/// after the last field.
///
/// # Returns
/// The number of statements inserted.
///
/// # Errors
/// Returns `CodegenError` if the plan was computed for another type, names
/// an empty field, or targets an interface, an enum or a struct without a
/// constructor.
pub fn apply_plan(ty: &mut TypeDeclaration, plan: &InitPlan) -> Result<usize, CodegenError> {
    if plan.type_name != ty.name {
        return Err(CodegenError::generation(format!(
            "plan for '{}' applied to '{}'",
            plan.type_name, ty.name
        )));
    }
    if plan.is_empty() {
        return Ok(0);
    }
    if !can_initialize(ty) {
        return Err(CodegenError::generation(format!(
            "{} '{}' cannot take constructor initializers",
            ty.kind.keyword(),
            ty.name
        )));
    }

    if ty.kind == TypeKind::Class && ty.constructors().next().is_none() {
        let index = ty
            .members
            .iter()
            .rposition(Member::is_field)
            .map_or(0, |i| i + 1);
        ty.members.insert(index, Member::Constructor(Constructor::new()));
        tracing::debug!("{}: synthesized default constructor", ty.name);
    }

    let mut inserted = 0;
    for member in &mut ty.members {
        let Member::Constructor(ctor) = member else {
            continue;
        };

        let mut prologue = Vec::with_capacity(plan.inits.len());
        for init in &plan.inits {
            if ctor.assigns_field(&init.field)? {
                continue;
            }
            prologue.push(Statement::assign_field(
                init.field.clone(),
                Expression::new_object(init.type_name.clone()),
            ));
        }
        inserted += prologue.len();
        prologue.append(&mut ctor.body);
        ctor.body = prologue;
    }

    tracing::debug!("{}: inserted {} initializer(s)", ty.name, inserted);
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GeneratorOptions;
    use crate::planner::{InitPlanner, PlannedInit};
    use xsdcode_model::{Field, Method, Parameter, Property};

    fn catalog() -> TypeDeclaration {
        let mut ty = TypeDeclaration::new("Catalog");
        ty.add_member(Field::new("_items", "List<Item>"));
        ty.add_member(Field::new("_name", "string"));
        ty.add_member(Property::auto("Items", "List<Item>", "_items"));
        ty.add_member(Property::auto("Name", "string", "_name"));
        ty.add_member(Method::new("Clear"));
        ty
    }

    #[test]
    fn test_apply_synthesizes_constructor_after_fields() {
        let mut ty = catalog();
        let options = GeneratorOptions::default();
        let plan = InitPlanner::new(&options).plan(&ty).unwrap();

        let inserted = apply_plan(&mut ty, &plan).unwrap();
        assert_eq!(inserted, 1);
        assert!(ty.members[2].is_constructor());

        let ctor = ty.constructors().next().unwrap();
        assert_eq!(
            ctor.body,
            vec![Statement::assign_field(
                "_items",
                Expression::new_object("List<Item>")
            )]
        );
    }

    #[test]
    fn test_apply_prepends_to_existing_constructors() {
        let mut ty = catalog();
        let mut with_name = Constructor::new();
        with_name.add_parameter(Parameter::new("name", "string"));
        with_name.add_statement(Statement::assign_field(
            "_name",
            Expression::Argument("name".to_string()),
        ));
        ty.add_member(Constructor::new());
        ty.add_member(with_name);

        let options = GeneratorOptions::default();
        let plan = InitPlanner::new(&options).plan(&ty).unwrap();
        assert_eq!(apply_plan(&mut ty, &plan).unwrap(), 2);

        let ctors: Vec<_> = ty.constructors().collect();
        assert_eq!(ctors.len(), 2);
        assert_eq!(ctors[0].body.len(), 1);
        assert_eq!(ctors[1].body.len(), 2);
        assert_eq!(ctors[1].assigns_field("_items"), Ok(true));
        assert!(matches!(ctors[1].body[0], Statement::Assign { .. }));
    }

    #[test]
    fn test_apply_initializes_only_constructors_missing_the_field() {
        let mut ty = TypeDeclaration::new("Order");
        ty.add_member(Field::new("_items", "List<Item>"));
        ty.add_member(Property::auto("Items", "List<Item>", "_items"));
        ty.add_member(Constructor::new());
        let mut with_items = Constructor::new();
        with_items.add_parameter(Parameter::new("items", "List<Item>"));
        with_items.add_statement(Statement::assign_field(
            "_items",
            Expression::Argument("items".to_string()),
        ));
        ty.add_member(with_items.clone());

        let options = GeneratorOptions::default();
        let plan = InitPlanner::new(&options).plan(&ty).unwrap();
        assert_eq!(apply_plan(&mut ty, &plan).unwrap(), 1);

        let ctors: Vec<_> = ty.constructors().collect();
        assert_eq!(
            ctors[0].body,
            vec![Statement::assign_field(
                "_items",
                Expression::new_object("List<Item>")
            )]
        );
        assert_eq!(ctors[1], &with_items);
        assert_eq!(ty.is_field_initialized("_items"), Ok(true));
    }

    #[test]
    fn test_apply_rejects_types_without_constructor_bodies() {
        let plan_for = |name: &str| InitPlan {
            type_name: name.to_string(),
            inits: vec![PlannedInit {
                field: "_items".to_string(),
                type_name: "List<Item>".to_string(),
            }],
            ..InitPlan::default()
        };

        for kind in [TypeKind::Interface, TypeKind::Enum, TypeKind::Struct] {
            let mut ty = TypeDeclaration::new("Target").with_kind(kind);
            let before = ty.clone();
            assert!(matches!(
                apply_plan(&mut ty, &plan_for("Target")),
                Err(CodegenError::Generation { .. })
            ));
            assert_eq!(ty, before);
        }
    }

    #[test]
    fn test_apply_struct_uses_declared_constructor() {
        let mut ty = TypeDeclaration::new("Point").with_kind(TypeKind::Struct);
        ty.add_member(Field::new("_tags", "List<string>"));
        ty.add_member(Property::auto("Tags", "List<string>", "_tags"));
        let mut ctor = Constructor::new();
        ctor.add_parameter(Parameter::new("x", "int"));
        ty.add_member(ctor);

        let options = GeneratorOptions::default();
        let plan = InitPlanner::new(&options).plan(&ty).unwrap();
        assert_eq!(apply_plan(&mut ty, &plan).unwrap(), 1);
        assert_eq!(ty.constructors().count(), 1);
        let ctor = ty.constructors().next().unwrap();
        assert_eq!(ctor.parameters.len(), 1);
        assert_eq!(ctor.assigns_field("_tags"), Ok(true));
    }

    #[test]
    fn test_apply_then_plan_is_empty() {
        let mut ty = catalog();
        let options = GeneratorOptions::default();
        let planner = InitPlanner::new(&options);

        let plan = planner.plan(&ty).unwrap();
        apply_plan(&mut ty, &plan).unwrap();
        assert!(planner.plan(&ty).unwrap().is_empty());
        assert_eq!(apply_plan(&mut ty, &plan).unwrap(), 0);
    }

    #[test]
    fn test_apply_empty_plan_leaves_type_untouched() {
        let mut ty = TypeDeclaration::new("Plain");
        ty.add_member(Field::new("_id", "int"));
        let before = ty.clone();

        let plan = InitPlan {
            type_name: "Plain".to_string(),
            ..InitPlan::default()
        };
        assert_eq!(apply_plan(&mut ty, &plan).unwrap(), 0);
        assert_eq!(ty, before);
    }

    #[test]
    fn test_apply_rejects_foreign_plan() {
        let mut ty = catalog();
        let plan = InitPlan {
            type_name: "Other".to_string(),
            inits: vec![PlannedInit {
                field: "_items".to_string(),
                type_name: "List<Item>".to_string(),
            }],
            ..InitPlan::default()
        };
        assert!(matches!(
            apply_plan(&mut ty, &plan),
            Err(CodegenError::Generation { .. })
        ));
    }
}
