//! Generator configuration.

/// Options controlling initializer planning and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    collection_types: Vec<String>,
    initialize_all_fields: bool,
    indent: String,
    emit_this_qualifier: bool,
}

impl GeneratorOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection_types: vec![
                "List".to_string(),
                "Collection".to_string(),
                "ObservableCollection".to_string(),
            ],
            initialize_all_fields: false,
            indent: "    ".to_string(),
            emit_this_qualifier: true,
        }
    }

    /// Replaces the generic base names treated as collections.
    #[must_use]
    pub fn collection_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collection_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Plans constructor initialization for every field whose type can be
    /// constructed with `new T()`: scalars, strings, `object`, nullables,
    /// arrays and interface-named types (`IList<T>`) are excluded.
    #[must_use]
    pub fn initialize_all_fields(mut self, enabled: bool) -> Self {
        self.initialize_all_fields = enabled;
        self
    }

    /// Sets the indentation unit used by the renderer.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Controls whether field references render as `this.field`.
    #[must_use]
    pub fn emit_this_qualifier(mut self, enabled: bool) -> Self {
        self.emit_this_qualifier = enabled;
        self
    }

    /// Returns true if `type_name` should be initialized in a constructor.
    #[must_use]
    pub fn needs_initialization(&self, type_name: &str) -> bool {
        let base = generic_base_name(type_name);
        if self.initialize_all_fields {
            return !is_scalar_type(type_name) && !is_interface_name(base);
        }
        self.collection_types.iter().any(|c| c == base)
    }

    /// Returns the indentation unit.
    #[must_use]
    pub fn indent_unit(&self) -> &str {
        &self.indent
    }

    /// Returns true if field references are qualified with `this.`.
    #[must_use]
    pub fn this_qualifier(&self) -> bool {
        self.emit_this_qualifier
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips generic arguments and namespace: `System.Collections.Generic.List<T>` -> `List`.
#[must_use]
pub fn generic_base_name(type_name: &str) -> &str {
    let without_args = type_name
        .split_once('<')
        .map_or(type_name, |(base, _)| base)
        .trim();
    without_args
        .rsplit_once('.')
        .map_or(without_args, |(_, name)| name)
}

/// Returns true for built-in scalars, `string`, `object`, nullable types
/// and arrays, which never get `new T()` initializers.
///
/// Keywords and their CLR names are both recognized, with or without the
/// `System.` prefix.
#[must_use]
pub fn is_scalar_type(type_name: &str) -> bool {
    let name = type_name.trim();
    if name.ends_with('?') || name.ends_with(']') {
        return true;
    }
    matches!(
        generic_base_name(name),
        "bool"
            | "byte"
            | "sbyte"
            | "char"
            | "short"
            | "ushort"
            | "int"
            | "uint"
            | "long"
            | "ulong"
            | "float"
            | "double"
            | "decimal"
            | "string"
            | "object"
            | "dynamic"
            | "Boolean"
            | "Byte"
            | "SByte"
            | "Char"
            | "Int16"
            | "UInt16"
            | "Int32"
            | "UInt32"
            | "Int64"
            | "UInt64"
            | "Single"
            | "Double"
            | "Decimal"
            | "String"
            | "Object"
            | "DateTime"
            | "DateTimeOffset"
            | "TimeSpan"
            | "Guid"
    )
}

/// Returns true for names following the interface convention `IName`,
/// which cannot be instantiated.
#[must_use]
pub fn is_interface_name(base_name: &str) -> bool {
    let mut chars = base_name.chars();
    chars.next() == Some('I') && chars.next().is_some_and(char::is_uppercase)
}
