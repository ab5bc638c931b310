//! Declaration nodes of the code model.
//!
//! This module contains the data structures representing generated type
//! declarations and their members: fields, properties, constructors and
//! methods, plus an opaque variant for anything else an upstream emitter
//! produces.

use crate::statements::{Expression, Statement};

/// Kind of a generated type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// Reference type.
    #[default]
    Class,
    /// Value type.
    Struct,
    /// Interface.
    Interface,
    /// Enumeration.
    Enum,
}

impl TypeKind {
    /// Returns the source keyword for this kind.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

/// A generated type with an ordered list of members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeDeclaration {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
    /// Members in declaration order.
    pub members: Vec<Member>,
}

impl TypeDeclaration {
    /// Creates a new class declaration with no members.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            members: Vec::new(),
        }
    }

    /// Sets the type kind.
    #[must_use]
    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Appends a member, keeping insertion order.
    pub fn add_member(&mut self, member: impl Into<Member>) {
        self.members.push(member.into());
    }
}

/// Member of a type declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// Field declaration.
    Field(Field),
    /// Property declaration.
    Property(Property),
    /// Constructor.
    Constructor(Constructor),
    /// Method.
    Method(Method),
    /// Any other member, kept verbatim.
    Other(Snippet),
}

impl Member {
    /// Returns the member name, if the member kind has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Field(f) => Some(f.name.as_str()),
            Self::Property(p) => Some(p.name.as_str()),
            Self::Method(m) => Some(m.name.as_str()),
            Self::Constructor(_) | Self::Other(_) => None,
        }
    }

    /// Returns a short label for the member kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::Property(_) => "property",
            Self::Constructor(_) => "constructor",
            Self::Method(_) => "method",
            Self::Other(_) => "member",
        }
    }

    /// Returns true if this is a field.
    #[must_use]
    pub const fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    /// Returns true if this is a constructor.
    #[must_use]
    pub const fn is_constructor(&self) -> bool {
        matches!(self, Self::Constructor(_))
    }
}

impl From<Field> for Member {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Property> for Member {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

impl From<Constructor> for Member {
    fn from(ctor: Constructor) -> Self {
        Self::Constructor(ctor)
    }
}

impl From<Method> for Member {
    fn from(method: Method) -> Self {
        Self::Method(method)
    }
}

impl From<Snippet> for Member {
    fn from(snippet: Snippet) -> Self {
        Self::Other(snippet)
    }
}

/// Field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Declared type, as source text.
    pub type_name: String,
    /// Inline initializer (`= value`).
    pub initializer: Option<Expression>,
}

impl Field {
    /// Creates a field without an initializer.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            initializer: None,
        }
    }

    /// Sets the inline initializer.
    #[must_use]
    pub fn with_initializer(mut self, value: Expression) -> Self {
        self.initializer = Some(value);
        self
    }
}

/// Property declaration with getter and setter bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Declared type, as source text.
    pub type_name: String,
    /// Getter body.
    pub getter: Vec<Statement>,
    /// Setter body.
    pub setter: Vec<Statement>,
}

impl Property {
    /// Creates a property with empty accessor bodies.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            getter: Vec::new(),
            setter: Vec::new(),
        }
    }

    /// Creates a property in the canonical generated shape:
    /// `get { return field; } set { field = value; }`.
    #[must_use]
    pub fn auto(
        name: impl Into<String>,
        type_name: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let mut prop = Self::new(name, type_name);
        prop.add_getter_statement(Statement::return_field(field.clone()));
        prop.add_setter_statement(Statement::assign_field(
            field,
            Expression::Argument("value".to_string()),
        ));
        prop
    }

    /// Appends a statement to the getter body.
    pub fn add_getter_statement(&mut self, statement: Statement) {
        self.getter.push(statement);
    }

    /// Appends a statement to the setter body.
    pub fn add_setter_statement(&mut self, statement: Statement) {
        self.setter.push(statement);
    }

    /// Returns true if the property has no setter body.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.setter.is_empty()
    }
}

/// Constructor parameter or method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Declared type, as source text.
    pub type_name: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Constructor with an ordered statement body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Constructor {
    /// Parameters.
    pub parameters: Vec<Parameter>,
    /// Body statements in order.
    pub body: Vec<Statement>,
}

impl Constructor {
    /// Creates a parameterless constructor with an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    /// Appends a statement to the body.
    pub fn add_statement(&mut self, statement: Statement) {
        self.body.push(statement);
    }
}

/// Method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    /// Method name.
    pub name: String,
    /// Return type, `None` for `void`.
    pub return_type: Option<String>,
    /// Parameters.
    pub parameters: Vec<Parameter>,
    /// Body statements in order.
    pub body: Vec<Statement>,
}

impl Method {
    /// Creates a `void` method with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Sets the return type.
    #[must_use]
    pub fn returning(mut self, type_name: impl Into<String>) -> Self {
        self.return_type = Some(type_name.into());
        self
    }

    /// Appends a statement to the body.
    pub fn add_statement(&mut self, statement: Statement) {
        self.body.push(statement);
    }
}

/// Verbatim source text for nodes outside the modelled vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snippet {
    /// Source text.
    pub text: String,
}

impl Snippet {
    /// Creates a snippet from source text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
