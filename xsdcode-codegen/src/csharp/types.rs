//! Type declaration rendering.

use super::expressions::ExpressionRenderer;
use crate::options::{GeneratorOptions, generic_base_name};
use xsdcode_model::{
    Constructor, Field, Member, Method, Parameter, Property, Statement, TypeDeclaration, TypeKind,
};

/// Renders a type declaration and its members as C# source.
pub struct TypeRenderer<'a> {
    options: &'a GeneratorOptions,
    exprs: ExpressionRenderer<'a>,
}

impl<'a> TypeRenderer<'a> {
    /// Creates a new type renderer.
    #[must_use]
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self {
            options,
            exprs: ExpressionRenderer::new(options),
        }
    }

    /// Renders the type, members in declaration order.
    ///
    /// Interface members render as signatures without bodies. Enums are
    /// not `partial` and carry their values as snippets.
    #[must_use]
    pub fn render(&self, ty: &TypeDeclaration) -> String {
        let mut output = String::new();
        let signatures_only = ty.kind == TypeKind::Interface;

        match ty.kind {
            TypeKind::Enum => output.push_str(&format!("public enum {}\n", ty.name)),
            kind => output.push_str(&format!("public partial {} {}\n", kind.keyword(), ty.name)),
        }
        output.push_str("{\n");

        for (i, member) in ty.members.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            match member {
                Member::Field(field) => self.render_field(&mut output, field),
                Member::Property(prop) if signatures_only => {
                    self.render_property_signature(&mut output, prop);
                }
                Member::Property(prop) => self.render_property(&mut output, prop),
                Member::Constructor(ctor) => {
                    self.render_constructor(&mut output, &ty.name, ctor);
                }
                Member::Method(method) if signatures_only => {
                    self.render_method_signature(&mut output, method);
                }
                Member::Method(method) => self.render_method(&mut output, method),
                Member::Other(snippet) => {
                    for line in snippet.text.lines() {
                        self.line(&mut output, 1, line);
                    }
                }
            }
        }

        output.push_str("}\n");
        output
    }

    fn render_field(&self, output: &mut String, field: &Field) {
        let text = match &field.initializer {
            Some(value) => format!(
                "private {} {} = {};",
                field.type_name,
                field.name,
                self.exprs.expression(value)
            ),
            None => format!("private {} {};", field.type_name, field.name),
        };
        self.line(output, 1, &text);
    }

    fn render_property(&self, output: &mut String, prop: &Property) {
        self.line(output, 1, &format!("public {} {}", prop.type_name, prop.name));
        self.line(output, 1, "{");
        self.render_accessor(output, "get", &prop.getter);
        if !prop.is_read_only() {
            self.render_accessor(output, "set", &prop.setter);
        }
        self.line(output, 1, "}");
    }

    fn render_property_signature(&self, output: &mut String, prop: &Property) {
        let accessors = if prop.is_read_only() {
            "{ get; }"
        } else {
            "{ get; set; }"
        };
        self.line(
            output,
            1,
            &format!("{} {} {}", prop.type_name, prop.name, accessors),
        );
    }

    fn render_accessor(&self, output: &mut String, keyword: &str, body: &[Statement]) {
        self.line(output, 2, keyword);
        self.render_body(output, 2, body);
    }

    fn render_constructor(&self, output: &mut String, type_name: &str, ctor: &Constructor) {
        self.line(
            output,
            1,
            &format!(
                "public {}({})",
                generic_base_name(type_name),
                render_parameters(&ctor.parameters)
            ),
        );
        self.render_body(output, 1, &ctor.body);
    }

    fn render_method(&self, output: &mut String, method: &Method) {
        let return_type = method.return_type.as_deref().unwrap_or("void");
        self.line(
            output,
            1,
            &format!(
                "public {} {}({})",
                return_type,
                method.name,
                render_parameters(&method.parameters)
            ),
        );
        self.render_body(output, 1, &method.body);
    }

    fn render_method_signature(&self, output: &mut String, method: &Method) {
        let return_type = method.return_type.as_deref().unwrap_or("void");
        self.line(
            output,
            1,
            &format!(
                "{} {}({});",
                return_type,
                method.name,
                render_parameters(&method.parameters)
            ),
        );
    }

    fn render_body(&self, output: &mut String, depth: usize, body: &[Statement]) {
        self.line(output, depth, "{");
        for statement in body {
            for line in self.exprs.statement(statement).lines() {
                self.line(output, depth + 1, line);
            }
        }
        self.line(output, depth, "}");
    }

    fn line(&self, output: &mut String, depth: usize, text: &str) {
        for _ in 0..depth {
            output.push_str(self.options.indent_unit());
        }
        output.push_str(text);
        output.push('\n');
    }
}

fn render_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| format!("{} {}", p.type_name, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}
