//! End-to-end tests over the public API.

use tracing_subscriber::EnvFilter;
use xsdcode::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn person() -> TypeDeclaration {
    let mut ty = TypeDeclaration::new("Person");
    ty.add_member(Field::new("_id", "int"));
    ty.add_member(Field::new("_name", "string"));
    ty.add_member(Field::new("_addresses", "List<Address>"));
    ty.add_member(Property::auto("Id", "int", "_id"));
    ty.add_member(Property::auto("Name", "string", "_name"));
    ty.add_member(Property::auto("Addresses", "List<Address>", "_addresses"));

    let mut ctor = Constructor::new();
    ctor.add_parameter(Parameter::new("n", "string"));
    ctor.add_statement(Statement::assign_field("_id", Literal::Int(1).into()));
    ctor.add_statement(Statement::assign_field(
        "_name",
        Expression::Argument("n".to_string()),
    ));
    ty.add_member(ctor);
    ty.add_member(Method::new("Validate").returning("bool"));
    ty
}

#[test]
fn resolves_backing_field_of_canonical_property() {
    let mut name = Property::new("Name", "string");
    name.add_getter_statement(Statement::return_field("_name"));
    assert_eq!(name.backing_field_name(), Some("_name"));

    let mut age = Property::new("Age", "int");
    age.add_getter_statement(Statement::Return(Some(Literal::Int(0).into())));
    assert_eq!(age.backing_field_name(), None);
}

#[test]
fn checks_constructor_assignments() {
    let ty = person();
    let ctor = ty.constructors().next().unwrap();
    assert_eq!(ctor.assigns_field("_name"), Ok(true));
    assert_eq!(ctor.assigns_field("_age"), Ok(false));
    assert_eq!(ctor.assigns_field(""), Err(QueryError::EmptyFieldName));
}

#[test]
fn filters_members_by_kind() {
    let mut ty = TypeDeclaration::new("Sample");
    ty.add_member(Field::new("_x", "int"));
    ty.add_member(Property::auto("X", "int", "_x"));
    ty.add_member(Constructor::new());
    ty.add_member(Method::new("Foo"));

    let fields: Vec<&Field> = ty.members_of::<Field>().collect();
    assert_eq!(fields, [&Field::new("_x", "int")]);
    assert_eq!(ty.members_of::<Method>().count(), 1);
}

#[test]
fn pairs_every_property_with_its_field() {
    let ty = person();
    for prop in ty.properties() {
        let field = prop.backing_field(&ty).unwrap();
        assert_eq!(field.type_name, prop.type_name);
    }
}

#[test]
fn generates_missing_initializers_only() {
    init_tracing();
    let mut ty = person();
    let options = GeneratorOptions::default();

    let code = generate(&mut ty, &options).unwrap();

    assert!(code.contains("        this._addresses = new List<Address>();\n"));
    assert_eq!(code.matches("this._id = 1;").count(), 1);
    assert_eq!(ty.constructors().count(), 1);
    assert_eq!(ty.is_field_initialized("_addresses"), Ok(true));

    let again = generate(&mut ty, &options).unwrap();
    assert_eq!(code, again);
}

#[test]
fn initializes_fields_per_constructor() {
    init_tracing();
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
    ty.add_member(with_items);
    assert_eq!(ty.is_field_initialized("_items"), Ok(false));

    let code = generate(&mut ty, &GeneratorOptions::default()).unwrap();

    assert_eq!(code.matches("this._items = new List<Item>();").count(), 1);
    assert_eq!(code.matches("this._items = items;").count(), 1);
    assert_eq!(ty.is_field_initialized("_items"), Ok(true));
}

#[test]
fn reports_undeclared_backing_field() {
    init_tracing();
    let mut ty = TypeDeclaration::new("Broken");
    ty.add_member(Property::auto("Items", "List<int>", "_items"));

    let err = generate(&mut ty, &GeneratorOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "property 'Items' returns undeclared field '_items' in type 'Broken'"
    );
}

#[test]
fn model_is_shareable_across_threads() {
    let ty = std::sync::Arc::new(person());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ty = std::sync::Arc::clone(&ty);
            std::thread::spawn(move || {
                ty.properties()
                    .filter_map(|p| p.backing_field_name().map(str::to_string))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), ["_id", "_name", "_addresses"]);
    }
}
